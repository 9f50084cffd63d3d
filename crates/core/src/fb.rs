//! Framebuffer and cell types.

use crate::types::{CellAttribute, ConsoleColor, ScreenDimensions, WindowRegion};

/// A single character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub attr: CellAttribute,
}

impl Cell {
    pub const fn new(ch: char, attr: CellAttribute) -> Self {
        Self { ch, attr }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attr: CellAttribute::default(),
        }
    }
}

/// 2D grid of character cells with a fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    dims: ScreenDimensions,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(dims: ScreenDimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::default(); dims.area()],
        }
    }

    pub fn dimensions(&self) -> ScreenDimensions {
        self.dims
    }

    pub fn width(&self) -> u16 {
        self.dims.width()
    }

    pub fn height(&self) -> u16 {
        self.dims.height()
    }

    /// Region covering the whole buffer.
    pub fn region(&self) -> WindowRegion {
        WindowRegion::from_dimensions(self.dims)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `y`, or `None` past the last row.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height() {
            return None;
        }
        let w = self.width() as usize;
        let start = (y as usize) * w;
        Some(&self.cells[start..start + w])
    }

    #[inline(always)]
    fn idx(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x as u16 >= self.width() || y as u16 >= self.height() {
            return None;
        }
        Some((y as usize) * (self.width() as usize) + (x as usize))
    }

    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write a cell; coordinates outside the grid are ignored.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Draw `ch` in `color` on a black background.
    pub fn draw(&mut self, x: i16, y: i16, ch: char, color: ConsoleColor) {
        self.set(x, y, Cell::new(ch, CellAttribute::fg(color)));
    }

    /// Draw `ch` with an explicit foreground/background attribute.
    pub fn draw_attr(&mut self, x: i16, y: i16, ch: char, attr: CellAttribute) {
        self.set(x, y, Cell::new(ch, attr));
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn clear(&mut self) {
        self.fill(Cell::default());
    }

    pub fn fill_rect(&mut self, x: i16, y: i16, w: u16, h: u16, cell: Cell) {
        for dy in 0..h {
            for dx in 0..w {
                let cx = x as i32 + dx as i32;
                let cy = y as i32 + dy as i32;
                if cx > i16::MAX as i32 || cy > i16::MAX as i32 {
                    break;
                }
                self.set(cx as i16, cy as i16, cell);
            }
        }
    }

    /// Write a string left to right, stopping at the right edge.
    pub fn put_str(&mut self, x: i16, y: i16, s: &str, attr: CellAttribute) {
        let mut cx = x as i32;
        for ch in s.chars() {
            if cx >= self.width() as i32 {
                break;
            }
            self.set(cx as i16, y, Cell::new(ch, attr));
            cx += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fb(w: i32, h: i32) -> FrameBuffer {
        FrameBuffer::new(ScreenDimensions::new(w, h).unwrap())
    }

    #[test]
    fn index_is_row_major() {
        let mut f = fb(3, 2);
        f.draw(2, 1, 'Z', ConsoleColor::Green);
        assert_eq!(f.cells()[3 + 2].ch, 'Z');
        assert_eq!(f.row(1).unwrap()[2].attr, CellAttribute::fg(ConsoleColor::Green));
        assert!(f.row(2).is_none());
    }

    #[test]
    fn out_of_range_draws_are_ignored() {
        let mut f = fb(3, 3);
        let before = f.clone();
        f.draw(-1, 0, 'x', ConsoleColor::Red);
        f.draw(0, -1, 'x', ConsoleColor::Red);
        f.draw(3, 0, 'x', ConsoleColor::Red);
        f.draw(0, 3, 'x', ConsoleColor::Red);
        f.draw(i16::MAX, i16::MAX, 'x', ConsoleColor::Red);
        assert_eq!(f, before);
    }

    #[test]
    fn empty_buffer_accepts_draws() {
        let mut f = fb(0, 0);
        f.draw(0, 0, 'x', ConsoleColor::Red);
        assert!(f.cells().is_empty());
        assert!(f.region().is_empty());
    }

    #[test]
    fn fill_rect_clips_at_edges() {
        let mut f = fb(4, 4);
        let cell = Cell::new('#', CellAttribute::fg(ConsoleColor::White));
        f.fill_rect(-1, 2, 3, 5, cell);
        let filled: Vec<(i16, i16)> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|&(x, y)| f.get(x, y) == Some(cell))
            .collect();
        assert_eq!(filled, vec![(0, 2), (1, 2), (0, 3), (1, 3)]);
    }

    #[test]
    fn put_str_stops_at_right_edge() {
        let mut f = fb(4, 1);
        f.put_str(2, 0, "abc", CellAttribute::default());
        assert_eq!(f.get(2, 0).unwrap().ch, 'a');
        assert_eq!(f.get(3, 0).unwrap().ch, 'b');
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut f = fb(2, 2);
        f.fill(Cell::new('@', CellAttribute::fg(ConsoleColor::Blue)));
        f.clear();
        assert!(f.cells().iter().all(|c| *c == Cell::default()));
    }
}
