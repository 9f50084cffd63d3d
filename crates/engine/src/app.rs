//! ConsoleApp: the application base that ties a game to a surface.

use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::core::{Cell, FrameBuffer};
use crate::error::EngineError;
use crate::game::ConsoleGame;
use crate::game_loop::{GameLoop, LoopExit, LOOP_THREAD_NAME};
use crate::term::{ConsoleSurface, SurfaceCloser, SurfaceHandle, SurfaceState};
use crate::types::{
    CellAttribute, ConfigError, ConsoleColor, ConsoleProperties, ScreenDimensions, WindowRegion,
};

/// A game bound to a framebuffer and a console surface.
///
/// Construction only validates the configuration and allocates the
/// framebuffer; the surface is created by [`run`](Self::run).
pub struct ConsoleApp<G: ConsoleGame, S: ConsoleSurface> {
    properties: ConsoleProperties,
    region: WindowRegion,
    frame: FrameBuffer,
    game: G,
    surface: SurfaceHandle<S>,
}

impl<G: ConsoleGame, S: ConsoleSurface> ConsoleApp<G, S> {
    pub fn new(properties: ConsoleProperties, game: G, surface: S) -> Result<Self, ConfigError> {
        properties.validate()?;
        Ok(Self {
            properties,
            region: WindowRegion::from_dimensions(properties.screen),
            frame: FrameBuffer::new(properties.screen),
            game,
            surface: SurfaceHandle::new(surface),
        })
    }

    /// Default properties with an explicit screen size.
    pub fn with_size(width: i32, height: i32, game: G, surface: S) -> Result<Self, ConfigError> {
        Self::new(ConsoleProperties::with_screen(width, height)?, game, surface)
    }

    pub fn properties(&self) -> &ConsoleProperties {
        &self.properties
    }

    pub fn dimensions(&self) -> ScreenDimensions {
        self.properties.screen
    }

    pub fn width(&self) -> u16 {
        self.properties.screen.width()
    }

    pub fn height(&self) -> u16 {
        self.properties.screen.height()
    }

    pub fn region(&self) -> WindowRegion {
        self.region
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn surface_state(&self) -> SurfaceState {
        self.surface.state()
    }

    /// Draw `ch` in `color` on black. Out-of-range coordinates are ignored.
    pub fn draw(&mut self, x: i16, y: i16, ch: char, color: ConsoleColor) {
        self.frame.draw(x, y, ch, color);
    }

    pub fn draw_attr(&mut self, x: i16, y: i16, ch: char, attr: CellAttribute) {
        self.frame.set(x, y, Cell::new(ch, attr));
    }

    /// Create the surface, run the loop on its own thread and tear down.
    ///
    /// Blocks until the loop ends. The surface is released before this
    /// returns, whatever the outcome.
    pub fn run(&mut self) -> Result<(), EngineError> {
        self.surface.open(&self.properties)?;

        let frame_interval = match self.properties.target_frame_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms as u64)),
        };
        let game_loop = GameLoop {
            game: &mut self.game,
            frame: &mut self.frame,
            surface: &self.surface,
            region: self.region,
            frame_interval,
        };

        let result = thread::scope(|scope| {
            let worker = thread::Builder::new()
                .name(LOOP_THREAD_NAME.to_string())
                .spawn_scoped(scope, move || game_loop.run())
                .map_err(EngineError::Spawn)?;
            match worker.join() {
                Ok(outcome) => outcome.map_err(EngineError::from),
                Err(_) => Err(EngineError::LoopPanicked),
            }
        });

        self.surface.close();

        let stats = result?;
        if stats.exit == LoopExit::CreateDeclined {
            info!("on_create declined; no frames rendered");
        } else {
            debug!("run finished after {} frames", stats.frames);
        }
        Ok(())
    }

    /// Release the surface now. Idempotent, never fails.
    pub fn dispose(&self) {
        self.surface.close();
    }
}

impl<G: ConsoleGame, S: ConsoleSurface + 'static> ConsoleApp<G, S> {
    /// Teardown trigger usable from other threads.
    pub fn closer(&self) -> SurfaceCloser {
        self.surface.closer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{MemorySurface, SurfaceCall};

    struct Idle;

    impl ConsoleGame for Idle {
        fn on_update(&mut self, _frame: &mut FrameBuffer, _elapsed_seconds: f64) -> bool {
            false
        }
    }

    #[test]
    fn construction_touches_no_surface() {
        let mem = MemorySurface::new();
        let app = ConsoleApp::with_size(10, 4, Idle, mem.clone()).unwrap();
        assert_eq!((app.width(), app.height()), (10, 4));
        assert_eq!(app.surface_state(), SurfaceState::Uninitialized);
        assert!(mem.calls().is_empty());
    }

    #[test]
    fn negative_size_is_rejected_before_any_allocation() {
        let mem = MemorySurface::new();
        let result = ConsoleApp::with_size(-1, 50, Idle, mem.clone());
        assert!(matches!(
            result,
            Err(ConfigError::NegativeDimension { axis: "width", value: -1 })
        ));
        assert!(mem.calls().is_empty());
    }

    #[test]
    fn run_closes_surface_once_and_dispose_is_a_no_op() {
        let mem = MemorySurface::new();
        let mut app = ConsoleApp::with_size(2, 2, Idle, mem.clone()).unwrap();
        app.run().unwrap();
        app.dispose();
        drop(app);

        assert_eq!(mem.close_count(), 1);
        assert_eq!(mem.calls().last(), Some(&SurfaceCall::Close));
    }

    #[test]
    fn draws_before_run_are_visible_in_first_frame() {
        let mem = MemorySurface::new();
        let mut app = ConsoleApp::with_size(3, 1, Idle, mem.clone()).unwrap();
        app.draw(1, 0, '@', ConsoleColor::Yellow);
        app.draw(9, 9, '!', ConsoleColor::Yellow);
        app.run().unwrap();

        assert_eq!(mem.cell(1, 0).unwrap().ch, '@');
        assert_eq!(mem.cell(0, 0).unwrap().ch, ' ');
    }
}
