//! SurfaceWriter: pushes a framebuffer region to the active surface.

use log::trace;

use crate::core::FrameBuffer;
use crate::error::WriteError;
use crate::handle::SurfaceHandle;
use crate::surface::ConsoleSurface;
use crate::types::WindowRegion;

/// Flushes framebuffers through a [`SurfaceHandle`] and counts frames.
#[derive(Debug, Default)]
pub struct SurfaceWriter {
    frames_written: u64,
}

impl SurfaceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `region` of `buffer` to the same region of the surface.
    ///
    /// The region is clipped to the buffer first. An empty region still
    /// counts as a flush.
    pub fn flush<S: ConsoleSurface>(
        &mut self,
        handle: &SurfaceHandle<S>,
        buffer: &FrameBuffer,
        region: WindowRegion,
    ) -> Result<(), WriteError> {
        let region = region.clip_to(buffer.dimensions());
        handle.write(buffer.cells(), buffer.dimensions(), region)?;
        self.frames_written += 1;
        trace!("frame {} flushed ({:?})", self.frames_written, region);
        Ok(())
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;
    use crate::memory::{MemorySurface, SurfaceOp};
    use crate::types::{CellAttribute, ConsoleColor, ConsoleProperties};

    #[test]
    fn flush_copies_buffer_to_surface() {
        let props = ConsoleProperties::with_screen(3, 2).unwrap();
        let mem = MemorySurface::new();
        let handle = SurfaceHandle::new(mem.clone());
        handle.open(&props).unwrap();

        let mut fb = FrameBuffer::new(props.screen);
        fb.draw(2, 1, '*', ConsoleColor::Cyan);

        let mut writer = SurfaceWriter::new();
        writer.flush(&handle, &fb, fb.region()).unwrap();

        assert_eq!(writer.frames_written(), 1);
        assert_eq!(mem.grid(), fb.cells().to_vec());
        assert_eq!(
            mem.cell(2, 1),
            Some(Cell::new('*', CellAttribute::fg(ConsoleColor::Cyan)))
        );
    }

    #[test]
    fn partial_region_leaves_rest_of_surface_untouched() {
        let props = ConsoleProperties::with_screen(4, 4).unwrap();
        let mem = MemorySurface::new();
        let handle = SurfaceHandle::new(mem.clone());
        handle.open(&props).unwrap();

        let mut fb = FrameBuffer::new(props.screen);
        fb.fill(Cell::new('#', CellAttribute::default()));

        let mut writer = SurfaceWriter::new();
        writer
            .flush(&handle, &fb, WindowRegion::new(1, 1, 2, 2))
            .unwrap();

        assert_eq!(mem.cell(1, 1).unwrap().ch, '#');
        assert_eq!(mem.cell(0, 0).unwrap().ch, ' ');
        assert_eq!(mem.cell(3, 3).unwrap().ch, ' ');
    }

    #[test]
    fn platform_failure_carries_error_code() {
        let props = ConsoleProperties::with_screen(2, 2).unwrap();
        let mem = MemorySurface::new().fail_on(SurfaceOp::Write);
        let handle = SurfaceHandle::new(mem);
        handle.open(&props).unwrap();

        let fb = FrameBuffer::new(props.screen);
        let mut writer = SurfaceWriter::new();
        let err = writer.flush(&handle, &fb, fb.region()).unwrap_err();

        assert!(matches!(err, WriteError::Platform(_)));
        assert!(err.code().is_some());
        assert_eq!(writer.frames_written(), 0);
    }
}
