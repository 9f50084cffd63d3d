//! Core grid module - the in-memory character grid
//!
//! This crate holds the [`FrameBuffer`] applications draw into between
//! flushes. It has no I/O and no platform dependencies, so everything here is
//! deterministic and cheap to test.
//!
//! # Addressing
//!
//! Cells are stored row-major; `(x, y)` maps to `y * width + x`. Drawing
//! coordinates are signed 16-bit values and any write outside the grid is
//! ignored, so callers can draw partially visible shapes without clipping
//! them first.
//!
//! # Example
//!
//! ```
//! use console_game_core::{Cell, FrameBuffer};
//! use console_game_types::{CellAttribute, ConsoleColor, ScreenDimensions};
//!
//! let mut fb = FrameBuffer::new(ScreenDimensions::new(4, 2).unwrap());
//! fb.draw(1, 1, '#', ConsoleColor::Red);
//! fb.draw(-1, 0, 'x', ConsoleColor::Red); // ignored
//!
//! assert_eq!(fb.get(1, 1).map(|c| c.ch), Some('#'));
//! assert_eq!(fb.cells().iter().filter(|c| **c != Cell::default()).count(), 1);
//! ```

pub mod fb;

pub use console_game_types as types;

pub use fb::{Cell, FrameBuffer};
