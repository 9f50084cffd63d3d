//! Game loop driver.
//!
//! One iteration is: measure elapsed time, `on_update`, flush. The flush
//! always runs, so the frame produced by a stopping `on_update` is still
//! shown. A failed flush ends the loop immediately.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::core::FrameBuffer;
use crate::game::ConsoleGame;
use crate::term::{ConsoleSurface, SurfaceHandle, SurfaceWriter, WriteError};
use crate::types::WindowRegion;

/// Name of the dedicated loop thread.
pub const LOOP_THREAD_NAME: &str = "console-game-loop";

/// Monotonic frame clock.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick (or since `start`), never negative.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        dt.max(0.0)
    }

    /// Sleep for whatever is left of `interval` since the last tick.
    pub fn pace(&self, interval: Duration) {
        let remaining = interval.saturating_sub(self.last.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }
}

/// How a loop run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// `on_create` returned `false`; no frame ran.
    CreateDeclined,
    /// `on_update` returned `false`.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopStats {
    pub exit: LoopExit,
    pub frames: u64,
    pub elapsed_seconds: f64,
}

/// Everything one loop run borrows from the application.
pub struct GameLoop<'a, G, S: ConsoleSurface> {
    pub game: &'a mut G,
    pub frame: &'a mut FrameBuffer,
    pub surface: &'a SurfaceHandle<S>,
    pub region: WindowRegion,
    /// Target frame interval; `None` runs frames back to back.
    pub frame_interval: Option<Duration>,
}

impl<G: ConsoleGame, S: ConsoleSurface> GameLoop<'_, G, S> {
    /// Run `on_create` and then frames until the game stops or a flush fails.
    pub fn run(self) -> Result<LoopStats, WriteError> {
        let GameLoop {
            game,
            frame,
            surface,
            region,
            frame_interval,
        } = self;

        if !game.on_create(frame) {
            debug!("on_create returned false; skipping the loop");
            return Ok(LoopStats {
                exit: LoopExit::CreateDeclined,
                frames: 0,
                elapsed_seconds: 0.0,
            });
        }

        let mut writer = SurfaceWriter::new();
        let mut clock = FrameClock::start();
        let mut total = 0.0;

        info!(
            "game loop started ({}x{}, {})",
            frame.width(),
            frame.height(),
            match frame_interval {
                Some(interval) => format!("{}ms frames", interval.as_millis()),
                None => "unpaced".to_string(),
            }
        );

        loop {
            let elapsed = clock.tick();
            total += elapsed;

            let keep_going = game.on_update(frame, elapsed);
            writer.flush(surface, frame, region)?;

            if !keep_going {
                break;
            }
            if let Some(interval) = frame_interval {
                clock.pace(interval);
            }
        }

        let stats = LoopStats {
            exit: LoopExit::Stopped,
            frames: writer.frames_written(),
            elapsed_seconds: total,
        };
        info!(
            "game loop stopped after {} frames in {:.3}s",
            stats.frames, stats.elapsed_seconds
        );
        Ok(stats)
    }
}
