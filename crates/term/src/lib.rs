//! Terminal surface module.
//!
//! Everything between a framebuffer and the screen: the [`ConsoleSurface`]
//! capability trait a platform backend implements, the [`SurfaceHandle`]
//! that owns a backend through its create/activate/destroy lifecycle, and
//! the [`SurfaceWriter`] that flushes framebuffer regions to it.
//!
//! Two backends ship with the crate:
//! - [`CrosstermSurface`]: a real terminal, using the alternate screen as the
//!   second screen buffer and re-encoding only changed runs per frame
//! - [`MemorySurface`]: an in-memory grid that records every call, for tests

pub mod error;
pub mod handle;
pub mod memory;
pub mod renderer;
pub mod surface;
pub mod writer;

pub use console_game_core as core;
pub use console_game_types as types;

pub use error::{PlatformError, SurfaceCreationError, SurfaceStep, WriteError};
pub use handle::{SurfaceCloser, SurfaceHandle, SurfaceState};
pub use memory::{MemorySurface, SurfaceCall, SurfaceOp, INJECTED_ERROR_CODE};
pub use renderer::{console_color, encode_diff_into, encode_full_into, CrosstermSurface};
pub use surface::ConsoleSurface;
pub use writer::SurfaceWriter;
