//! Property tests for framebuffer drawing.

use proptest::prelude::*;

use console_game::core::{Cell, FrameBuffer};
use console_game::types::{CellAttribute, ConsoleColor, ScreenDimensions};

fn color() -> impl Strategy<Value = ConsoleColor> {
    (0u8..16).prop_map(ConsoleColor::from_index)
}

proptest! {
    #[test]
    fn in_range_draw_changes_exactly_one_cell(
        (w, h, x, y) in (1i32..64, 1i32..64).prop_flat_map(|(w, h)| (Just(w), Just(h), 0..w, 0..h)),
        ch in proptest::char::range('!', '~'),
        color in color(),
    ) {
        let mut fb = FrameBuffer::new(ScreenDimensions::new(w, h).unwrap());
        let before = fb.clone();
        fb.draw(x as i16, y as i16, ch, color);

        let idx = (y * w + x) as usize;
        prop_assert_eq!(fb.cells()[idx], Cell::new(ch, CellAttribute::fg(color)));
        let changed = fb
            .cells()
            .iter()
            .zip(before.cells())
            .filter(|(a, b)| a != b)
            .count();
        prop_assert_eq!(changed, 1);
    }

    #[test]
    fn out_of_range_draw_changes_nothing(
        w in 0i32..32,
        h in 0i32..32,
        x in any::<i16>(),
        y in any::<i16>(),
    ) {
        prop_assume!(x < 0 || y < 0 || x as i32 >= w || y as i32 >= h);
        let mut fb = FrameBuffer::new(ScreenDimensions::new(w, h).unwrap());
        let before = fb.clone();
        fb.draw(x, y, '#', ConsoleColor::Red);
        prop_assert_eq!(fb, before);
    }

    #[test]
    fn valid_dimensions_allocate_full_grid(w in 0i32..=512, h in 0i32..=512) {
        let fb = FrameBuffer::new(ScreenDimensions::new(w, h).unwrap());
        prop_assert_eq!(fb.cells().len(), (w * h) as usize);
    }

    #[test]
    fn negative_dimensions_are_rejected(w in i32::MIN..0, h in any::<i32>()) {
        prop_assert!(ScreenDimensions::new(w, h).is_err());
        prop_assert!(ScreenDimensions::new(h.unsigned_abs().min(100) as i32, w).is_err());
    }
}
