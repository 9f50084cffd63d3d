//! Errors surfaced by [`ConsoleApp::run`](crate::ConsoleApp::run).

use std::io;

use thiserror::Error;

use crate::term::{SurfaceCreationError, WriteError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    SurfaceCreation(#[from] SurfaceCreationError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("failed to spawn the game loop thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("game loop thread panicked")]
    LoopPanicked,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{PlatformError, SurfaceState, SurfaceStep};

    fn describe(err: &EngineError) -> &'static str {
        match err {
            EngineError::SurfaceCreation(_) => "surface",
            EngineError::Write(_) => "write",
            EngineError::Spawn(_) => "spawn",
            EngineError::LoopPanicked => "panic",
        }
    }

    #[test]
    fn run_failures_convert_into_engine_errors() {
        let created: EngineError = SurfaceCreationError {
            step: SurfaceStep::Resize,
            source: PlatformError::new(Some(5), "denied"),
        }
        .into();
        assert_eq!(describe(&created), "surface");

        let write: EngineError = WriteError::NotActive(SurfaceState::Destroyed).into();
        assert_eq!(describe(&write), "write");
        assert_eq!(describe(&EngineError::LoopPanicked), "panic");
        assert_eq!(EngineError::LoopPanicked.to_string(), "game loop thread panicked");
    }
}
