//! Engine module - application base and game loop
//!
//! An application implements [`ConsoleGame`] and hands it, together with a
//! surface backend, to a [`ConsoleApp`]. [`ConsoleApp::run`] then:
//!
//! 1. creates and activates the surface (sized to the configured screen)
//! 2. spawns the loop thread and blocks until it is joined
//! 3. on that thread: `on_create` once, then per frame `on_update` followed
//!    by a flush of the framebuffer to the surface
//! 4. releases the surface, whatever happened above
//!
//! The loop stops when a hook returns `false` or a flush fails. There is no
//! other way to stop it.
//!
//! # Example
//!
//! ```
//! use console_game_engine::{ConsoleApp, ConsoleGame};
//! use console_game_core::{Cell, FrameBuffer};
//! use console_game_term::MemorySurface;
//! use console_game_types::{CellAttribute, ConsoleColor, ConsoleProperties};
//!
//! struct Fill;
//!
//! impl ConsoleGame for Fill {
//!     fn on_update(&mut self, frame: &mut FrameBuffer, _elapsed: f64) -> bool {
//!         frame.fill(Cell::new('#', CellAttribute::fg(ConsoleColor::Green)));
//!         false
//!     }
//! }
//!
//! let surface = MemorySurface::new();
//! let props = ConsoleProperties::with_screen(8, 2).unwrap();
//! let mut app = ConsoleApp::new(props, Fill, surface.clone()).unwrap();
//! app.run().unwrap();
//!
//! assert_eq!(surface.writes(), 1);
//! assert!(surface.grid().iter().all(|c| c.ch == '#'));
//! ```

pub mod app;
pub mod error;
pub mod game;
pub mod game_loop;

pub use console_game_core as core;
pub use console_game_term as term;
pub use console_game_types as types;

pub use app::ConsoleApp;
pub use error::EngineError;
pub use game::ConsoleGame;
pub use game_loop::{FrameClock, GameLoop, LoopExit, LoopStats, LOOP_THREAD_NAME};
