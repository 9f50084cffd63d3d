//! Hooks an application implements to drive the loop.

use crate::core::FrameBuffer;

/// Per-application game logic.
///
/// Both hooks receive the framebuffer that is flushed after them. The
/// implementation runs on the loop thread, hence `Send`.
pub trait ConsoleGame: Send {
    /// Called once after the surface is active, before the first frame.
    /// Returning `false` ends the run without rendering a frame.
    fn on_create(&mut self, _frame: &mut FrameBuffer) -> bool {
        true
    }

    /// Called once per frame with the seconds elapsed since the previous
    /// frame. Returning `false` stops the loop once this frame is flushed.
    fn on_update(&mut self, _frame: &mut FrameBuffer, _elapsed_seconds: f64) -> bool {
        true
    }
}
