//! Demo game: random colored full blocks.

use crate::core::FrameBuffer;
use crate::engine::ConsoleGame;
use crate::types::ConsoleColor;

/// Full block, the glyph the demo fills the screen with.
pub const FULL_BLOCK: char = '\u{2588}';

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are the well-distributed ones.
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Repaints every cell with a random color each frame, for a fixed number
/// of frames.
#[derive(Debug, Clone)]
pub struct NoiseGame {
    rng: SimpleRng,
    frames_left: u32,
}

impl NoiseGame {
    pub fn new(seed: u32, frames: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            frames_left: frames,
        }
    }

    fn paint(&mut self, frame: &mut FrameBuffer) {
        for y in 0..frame.height() as i16 {
            for x in 0..frame.width() as i16 {
                let color = ConsoleColor::from_index(self.rng.next_range(16) as u8);
                frame.draw(x, y, FULL_BLOCK, color);
            }
        }
    }
}

impl ConsoleGame for NoiseGame {
    fn on_create(&mut self, frame: &mut FrameBuffer) -> bool {
        self.paint(frame);
        self.frames_left > 0
    }

    fn on_update(&mut self, frame: &mut FrameBuffer, _elapsed_seconds: f64) -> bool {
        self.paint(frame);
        self.frames_left = self.frames_left.saturating_sub(1);
        self.frames_left > 0
    }
}
