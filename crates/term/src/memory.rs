//! MemorySurface: a software-simulated console surface.
//!
//! Keeps the surface contents in memory and records every call, so the
//! handle and the game loop can be exercised without a terminal. Clones
//! share state, which lets a test keep one clone while the other is moved
//! into the code under test.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::Cell;
use crate::error::PlatformError;
use crate::surface::ConsoleSurface;
use crate::types::{AccessRights, ScreenDimensions, ShareMode, WindowRegion};

/// Error code reported by injected failures.
pub const INJECTED_ERROR_CODE: i32 = 31;

/// Surface operation, used to select where a failure is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    Create,
    Activate,
    Resize,
    SetWindow,
    SetFont,
    Write,
    Close,
}

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Create {
        access: AccessRights,
        share: ShareMode,
    },
    Activate,
    Resize(ScreenDimensions),
    SetWindow(WindowRegion),
    SetFont(i16, i16),
    Write(WindowRegion),
    Close,
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<SurfaceCall>,
    dims: Option<ScreenDimensions>,
    grid: Vec<Cell>,
    writes: usize,
    fail_on: Option<SurfaceOp>,
    fail_write_after: Option<usize>,
}

impl Recorder {
    fn check(&self, op: SurfaceOp) -> Result<(), PlatformError> {
        if self.fail_on == Some(op) {
            return Err(injected(op));
        }
        if op == SurfaceOp::Write && self.fail_write_after.is_some_and(|n| self.writes >= n) {
            return Err(injected(op));
        }
        Ok(())
    }
}

fn injected(op: SurfaceOp) -> PlatformError {
    PlatformError::new(Some(INJECTED_ERROR_CODE), format!("injected {op:?} failure"))
}

#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    shared: Arc<Mutex<Recorder>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call of `op`.
    pub fn fail_on(self, op: SurfaceOp) -> Self {
        self.lock().fail_on = Some(op);
        self
    }

    /// Let `n` writes succeed, then fail every later write.
    pub fn fail_write_after(self, n: usize) -> Self {
        self.lock().fail_write_after = Some(n);
        self
    }

    fn lock(&self) -> MutexGuard<'_, Recorder> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.lock().calls.clone()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    pub fn close_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| **c == SurfaceCall::Close)
            .count()
    }

    pub fn was_created(&self) -> bool {
        self.lock()
            .calls
            .iter()
            .any(|c| matches!(c, SurfaceCall::Create { .. }))
    }

    /// Current surface contents, row-major.
    pub fn grid(&self) -> Vec<Cell> {
        self.lock().grid.clone()
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        let rec = self.lock();
        let dims = rec.dims?;
        if x >= dims.width() || y >= dims.height() {
            return None;
        }
        rec.grid
            .get((y as usize) * (dims.width() as usize) + (x as usize))
            .copied()
    }
}

impl ConsoleSurface for MemorySurface {
    fn create(&mut self, access: AccessRights, share: ShareMode) -> Result<(), PlatformError> {
        let mut rec = self.lock();
        rec.calls.push(SurfaceCall::Create { access, share });
        rec.check(SurfaceOp::Create)
    }

    fn activate(&mut self) -> Result<(), PlatformError> {
        let mut rec = self.lock();
        rec.calls.push(SurfaceCall::Activate);
        rec.check(SurfaceOp::Activate)
    }

    fn resize(&mut self, dims: ScreenDimensions) -> Result<(), PlatformError> {
        let mut rec = self.lock();
        rec.calls.push(SurfaceCall::Resize(dims));
        rec.check(SurfaceOp::Resize)?;
        rec.dims = Some(dims);
        rec.grid = vec![Cell::default(); dims.area()];
        Ok(())
    }

    fn set_window(&mut self, region: WindowRegion) -> Result<(), PlatformError> {
        let mut rec = self.lock();
        rec.calls.push(SurfaceCall::SetWindow(region));
        rec.check(SurfaceOp::SetWindow)
    }

    fn set_font(&mut self, width: i16, height: i16) -> Result<(), PlatformError> {
        let mut rec = self.lock();
        rec.calls.push(SurfaceCall::SetFont(width, height));
        rec.check(SurfaceOp::SetFont)
    }

    fn write(
        &mut self,
        cells: &[Cell],
        buffer_size: ScreenDimensions,
        region: WindowRegion,
    ) -> Result<(), PlatformError> {
        let mut rec = self.lock();
        rec.calls.push(SurfaceCall::Write(region));
        rec.check(SurfaceOp::Write)?;

        let dims = rec.dims.unwrap_or(buffer_size);
        let region = region.clip_to(buffer_size).clip_to(dims);
        for y in region.top..=region.bottom {
            for x in region.left..=region.right {
                let src = (y as usize) * (buffer_size.width() as usize) + (x as usize);
                let dst = (y as usize) * (dims.width() as usize) + (x as usize);
                if let (Some(cell), Some(slot)) = (cells.get(src), rec.grid.get_mut(dst)) {
                    *slot = *cell;
                }
            }
        }
        rec.writes += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), PlatformError> {
        let mut rec = self.lock();
        rec.calls.push(SurfaceCall::Close);
        rec.check(SurfaceOp::Close)
    }
}
