//! Error types for surface operations.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::handle::SurfaceState;

/// A failed platform call, with the OS error code when one exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", code_suffix(.code))]
pub struct PlatformError {
    pub code: Option<i32>,
    pub message: String,
}

fn code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (error code {code})"),
        None => String::new(),
    }
}

impl PlatformError {
    pub fn new(code: Option<i32>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<io::Error> for PlatformError {
    fn from(err: io::Error) -> Self {
        Self {
            code: err.raw_os_error(),
            message: err.to_string(),
        }
    }
}

/// Step of bringing a surface to the active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceStep {
    Create,
    Activate,
    Resize,
    SetWindow,
    SetFont,
}

impl SurfaceStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceStep::Create => "create",
            SurfaceStep::Activate => "activate",
            SurfaceStep::Resize => "resize",
            SurfaceStep::SetWindow => "set window of",
            SurfaceStep::SetFont => "set font of",
        }
    }
}

impl fmt::Display for SurfaceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The surface could not be brought to the active state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to {step} console screen buffer: {source}")]
pub struct SurfaceCreationError {
    pub step: SurfaceStep,
    #[source]
    pub source: PlatformError,
}

/// A frame could not be written to the surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error("surface is not active (state: {0:?})")]
    NotActive(SurfaceState),

    #[error("failed to write to the console screen buffer: {0}")]
    Platform(#[from] PlatformError),
}

impl WriteError {
    /// Platform error code, if the failure came from the platform.
    pub fn code(&self) -> Option<i32> {
        match self {
            WriteError::NotActive(_) => None,
            WriteError::Platform(err) => err.code,
        }
    }
}
