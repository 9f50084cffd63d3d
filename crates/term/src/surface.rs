//! The narrow platform capability a console surface backend provides.
//!
//! Everything platform-specific lives behind [`ConsoleSurface`]; the handle,
//! the writer and the game loop only ever talk to this trait.

use crate::core::Cell;
use crate::error::PlatformError;
use crate::types::{AccessRights, ScreenDimensions, ShareMode, WindowRegion};

/// Platform console screen buffer.
///
/// Calls arrive in lifecycle order from [`SurfaceHandle`](crate::SurfaceHandle):
/// `create`, `activate`, `resize`, `set_window`, `set_font`, then any number
/// of `write`s, then `close`. `close` may also follow a failed step.
pub trait ConsoleSurface: Send {
    /// Allocate the back buffer.
    fn create(&mut self, access: AccessRights, share: ShareMode) -> Result<(), PlatformError>;

    /// Make the buffer the one the console displays.
    fn activate(&mut self) -> Result<(), PlatformError>;

    /// Set the buffer size in cells.
    fn resize(&mut self, dims: ScreenDimensions) -> Result<(), PlatformError>;

    /// Set the visible window rectangle within the buffer.
    fn set_window(&mut self, region: WindowRegion) -> Result<(), PlatformError>;

    /// Apply a font cell size hint. Backends that cannot change the font keep
    /// this default.
    fn set_font(&mut self, _width: i16, _height: i16) -> Result<(), PlatformError> {
        Ok(())
    }

    /// Copy `region` of a row-major grid of `buffer_size` cells to the same
    /// region of the surface.
    fn write(
        &mut self,
        cells: &[Cell],
        buffer_size: ScreenDimensions,
        region: WindowRegion,
    ) -> Result<(), PlatformError>;

    /// Release the buffer and restore whatever the console displayed before.
    fn close(&mut self) -> Result<(), PlatformError>;
}
