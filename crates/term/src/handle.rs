//! SurfaceHandle: owns a console surface and its lifecycle.
//!
//! ```text
//! Uninitialized --open--> Created --activate/resize/window--> Active
//!       |                    |                                  |
//!       +-------close--------+--------------close---------------+--> Destroyed
//! ```
//!
//! `Destroyed` is terminal. The platform `close` runs at most once, and only
//! for a surface whose `create` succeeded. Closing is safe from any thread
//! through a [`SurfaceCloser`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use crate::core::Cell;
use crate::error::{PlatformError, SurfaceCreationError, SurfaceStep, WriteError};
use crate::surface::ConsoleSurface;
use crate::types::{AccessRights, ConsoleProperties, ScreenDimensions, ShareMode, WindowRegion};

/// Lifecycle state of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Uninitialized,
    Created,
    Active,
    Destroyed,
}

struct Inner<S> {
    state: SurfaceState,
    surface: S,
}

impl<S: ConsoleSurface> Inner<S> {
    fn bring_up(&mut self, props: &ConsoleProperties) -> Result<(), SurfaceCreationError> {
        let region = WindowRegion::from_dimensions(props.screen);
        step(SurfaceStep::Activate, self.surface.activate())?;
        step(SurfaceStep::Resize, self.surface.resize(props.screen))?;
        step(SurfaceStep::SetWindow, self.surface.set_window(region))?;
        step(
            SurfaceStep::SetFont,
            self.surface.set_font(props.font_width, props.font_height),
        )?;
        Ok(())
    }

    fn release(&mut self) -> bool {
        match self.state {
            SurfaceState::Destroyed => false,
            SurfaceState::Uninitialized => {
                self.state = SurfaceState::Destroyed;
                false
            }
            SurfaceState::Created | SurfaceState::Active => {
                self.state = SurfaceState::Destroyed;
                if let Err(err) = self.surface.close() {
                    warn!("failed to release console screen buffer: {err}");
                } else {
                    debug!("console screen buffer released");
                }
                true
            }
        }
    }
}

fn step(step: SurfaceStep, result: Result<(), PlatformError>) -> Result<(), SurfaceCreationError> {
    result.map_err(|source| SurfaceCreationError { step, source })
}

fn lock<S>(inner: &Mutex<Inner<S>>) -> MutexGuard<'_, Inner<S>> {
    // A panicking backend must not block teardown.
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owner of a platform surface.
pub struct SurfaceHandle<S: ConsoleSurface> {
    inner: Arc<Mutex<Inner<S>>>,
}

impl<S: ConsoleSurface> SurfaceHandle<S> {
    /// Wrap a backend. No platform call happens until [`open`](Self::open).
    pub fn new(surface: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: SurfaceState::Uninitialized,
                surface,
            })),
        }
    }

    pub fn state(&self) -> SurfaceState {
        lock(&self.inner).state
    }

    /// Create the surface and make it active with the configured size.
    ///
    /// On failure nothing stays allocated: a surface that was already created
    /// is closed before the error is returned.
    pub fn open(&self, props: &ConsoleProperties) -> Result<(), SurfaceCreationError> {
        let mut inner = lock(&self.inner);
        if inner.state != SurfaceState::Uninitialized {
            return Err(SurfaceCreationError {
                step: SurfaceStep::Create,
                source: PlatformError::new(None, format!("surface is {:?}", inner.state)),
            });
        }

        if let Err(source) = inner
            .surface
            .create(AccessRights::READ_WRITE, ShareMode::READ_WRITE)
        {
            inner.state = SurfaceState::Destroyed;
            return Err(SurfaceCreationError {
                step: SurfaceStep::Create,
                source,
            });
        }
        inner.state = SurfaceState::Created;
        debug!("console screen buffer created");

        if let Err(err) = inner.bring_up(props) {
            inner.release();
            return Err(err);
        }
        inner.state = SurfaceState::Active;
        debug!(
            "console screen buffer active at {}x{}",
            props.screen.width(),
            props.screen.height()
        );
        Ok(())
    }

    pub(crate) fn write(
        &self,
        cells: &[Cell],
        buffer_size: ScreenDimensions,
        region: WindowRegion,
    ) -> Result<(), WriteError> {
        let mut inner = lock(&self.inner);
        if inner.state != SurfaceState::Active {
            return Err(WriteError::NotActive(inner.state));
        }
        inner.surface.write(cells, buffer_size, region)?;
        Ok(())
    }

    /// Release the surface. Idempotent; returns `true` only for the call that
    /// actually released a created surface. Release failures are logged.
    pub fn close(&self) -> bool {
        lock(&self.inner).release()
    }
}

impl<S: ConsoleSurface + 'static> SurfaceHandle<S> {
    /// A handle-independent way to tear the surface down from any thread.
    pub fn closer(&self) -> SurfaceCloser {
        SurfaceCloser {
            target: self.inner.clone(),
        }
    }
}

impl<S: ConsoleSurface> Drop for SurfaceHandle<S> {
    fn drop(&mut self) {
        self.close();
    }
}

trait Release: Send + Sync {
    fn release(&self) -> bool;
    fn state(&self) -> SurfaceState;
}

impl<S: ConsoleSurface> Release for Mutex<Inner<S>> {
    fn release(&self) -> bool {
        lock(self).release()
    }

    fn state(&self) -> SurfaceState {
        lock(self).state
    }
}

/// Cloneable teardown trigger for a [`SurfaceHandle`].
#[derive(Clone)]
pub struct SurfaceCloser {
    target: Arc<dyn Release>,
}

impl SurfaceCloser {
    /// Same contract as [`SurfaceHandle::close`].
    pub fn close(&self) -> bool {
        self.target.release()
    }

    pub fn state(&self) -> SurfaceState {
        self.target.state()
    }
}

impl std::fmt::Debug for SurfaceCloser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceCloser")
            .field("state", &self.state())
            .finish()
    }
}
