//! CrosstermSurface: a console surface on a real terminal.
//!
//! The terminal's alternate screen plays the role of the second screen
//! buffer: activating the surface switches the terminal to it, closing
//! switches back and restores the original size. Writes are diffed against
//! the previously written frame so only changed runs are re-encoded.

use std::io::{self, Write};

use log::debug;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::Cell;
use crate::error::PlatformError;
use crate::surface::ConsoleSurface;
use crate::types::{
    AccessRights, CellAttribute, ConsoleColor, ScreenDimensions, ShareMode, WindowRegion,
};

pub struct CrosstermSurface<W: Write + Send = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    /// Previously written frame, for diffing.
    last: Vec<Cell>,
    last_size: Option<ScreenDimensions>,
    window: WindowRegion,
    query_terminal: bool,
    original_size: Option<(u16, u16)>,
}

impl CrosstermSurface<io::Stdout> {
    pub fn new() -> Self {
        Self {
            query_terminal: true,
            ..Self::with_writer(io::stdout())
        }
    }
}

impl Default for CrosstermSurface<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> CrosstermSurface<W> {
    /// Encode into an arbitrary writer. The terminal size is never queried,
    /// so this works without a tty.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::new(),
            last: Vec::new(),
            last_size: None,
            window: WindowRegion::new(0, 0, -1, -1),
            query_terminal: false,
            original_size: None,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Force the next write to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last_size = None;
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl<W: Write + Send> ConsoleSurface for CrosstermSurface<W> {
    fn create(&mut self, access: AccessRights, _share: ShareMode) -> Result<(), PlatformError> {
        if !access.contains(AccessRights::WRITE) {
            return Err(PlatformError::new(None, "terminal surface requires write access"));
        }
        if self.query_terminal {
            self.original_size = Some(terminal::size()?);
        }
        self.buf = Vec::with_capacity(64 * 1024);
        Ok(())
    }

    fn activate(&mut self) -> Result<(), PlatformError> {
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    fn resize(&mut self, dims: ScreenDimensions) -> Result<(), PlatformError> {
        self.buf.queue(terminal::SetSize(dims.width(), dims.height()))?;
        self.flush_buf()?;
        self.invalidate();
        Ok(())
    }

    fn set_window(&mut self, region: WindowRegion) -> Result<(), PlatformError> {
        self.window = region;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        self.invalidate();
        Ok(())
    }

    fn set_font(&mut self, width: i16, height: i16) -> Result<(), PlatformError> {
        debug!("terminal surfaces keep their font; ignoring {width}x{height} hint");
        Ok(())
    }

    fn write(
        &mut self,
        cells: &[Cell],
        buffer_size: ScreenDimensions,
        region: WindowRegion,
    ) -> Result<(), PlatformError> {
        let region = region.clip_to(buffer_size);
        let full = self.last_size != Some(buffer_size) || self.last.len() != cells.len();

        self.buf.clear();
        if full {
            encode_full_into(cells, buffer_size, region, &mut self.buf)?;
        } else {
            encode_diff_into(&self.last, cells, buffer_size, region, &mut self.buf)?;
        }
        self.flush_buf()?;

        if full {
            self.last.clear();
            self.last.extend_from_slice(cells);
            // Cells outside a partial region were never sent, so the next
            // write must redraw everything.
            self.last_size = if region == WindowRegion::from_dimensions(buffer_size) {
                Some(buffer_size)
            } else {
                None
            };
        } else {
            copy_region(&mut self.last, cells, buffer_size, region);
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), PlatformError> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        if let Some((w, h)) = self.original_size.take() {
            self.buf.queue(terminal::SetSize(w, h))?;
        }
        self.flush_buf()?;
        Ok(())
    }
}

/// Encode every cell of `region` into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(
    cells: &[Cell],
    size: ScreenDimensions,
    region: WindowRegion,
    out: &mut Vec<u8>,
) -> io::Result<()> {
    if region.is_empty() {
        return Ok(());
    }

    let mut current: Option<CellAttribute> = None;
    for y in region.top..=region.bottom {
        out.queue(cursor::MoveTo(region.left as u16, y as u16))?;
        for x in region.left..=region.right {
            let cell = cell_at(cells, size, x, y);
            if current != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current = Some(cell.attr);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the runs of `region` that differ between `prev` and `next`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(
    prev: &[Cell],
    next: &[Cell],
    size: ScreenDimensions,
    region: WindowRegion,
    out: &mut Vec<u8>,
) -> io::Result<()> {
    let mut current: Option<CellAttribute> = None;
    let mut any = false;

    for_each_changed_run(prev, next, size, region, |x, y, len| {
        any = true;
        out.queue(cursor::MoveTo(x as u16, y as u16))?;
        for dx in 0..len {
            let cell = cell_at(next, size, x + dx, y);
            if current != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current = Some(cell.attr);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    if any {
        out.queue(ResetColor)?;
    }
    Ok(())
}

/// Copy the rows of `region` from `src` into `dst`. Both are `size` grids.
fn copy_region(dst: &mut [Cell], src: &[Cell], size: ScreenDimensions, region: WindowRegion) {
    if region.is_empty() {
        return;
    }
    let width = size.width() as usize;
    for y in region.top..=region.bottom {
        let start = (y as usize) * width + (region.left as usize);
        let end = (y as usize) * width + (region.right as usize) + 1;
        if let (Some(to), Some(from)) = (dst.get_mut(start..end), src.get(start..end)) {
            to.copy_from_slice(from);
        }
    }
}

fn cell_at(cells: &[Cell], size: ScreenDimensions, x: i16, y: i16) -> Cell {
    let i = (y as usize) * (size.width() as usize) + (x as usize);
    cells.get(i).copied().unwrap_or_default()
}

fn apply_attr_into(out: &mut Vec<u8>, attr: CellAttribute) -> io::Result<()> {
    out.queue(SetForegroundColor(console_color(attr.foreground())))?;
    out.queue(SetBackgroundColor(console_color(attr.background())))?;
    Ok(())
}

/// Map a console palette color onto the terminal's 16-color palette.
pub fn console_color(color: ConsoleColor) -> Color {
    match color {
        ConsoleColor::Black => Color::Black,
        ConsoleColor::DarkBlue => Color::DarkBlue,
        ConsoleColor::DarkGreen => Color::DarkGreen,
        ConsoleColor::DarkCyan => Color::DarkCyan,
        ConsoleColor::DarkRed => Color::DarkRed,
        ConsoleColor::DarkMagenta => Color::DarkMagenta,
        ConsoleColor::DarkYellow => Color::DarkYellow,
        ConsoleColor::Gray => Color::Grey,
        ConsoleColor::DarkGray => Color::DarkGrey,
        ConsoleColor::Blue => Color::Blue,
        ConsoleColor::Green => Color::Green,
        ConsoleColor::Cyan => Color::Cyan,
        ConsoleColor::Red => Color::Red,
        ConsoleColor::Magenta => Color::Magenta,
        ConsoleColor::Yellow => Color::Yellow,
        ConsoleColor::White => Color::White,
    }
}

fn for_each_changed_run(
    prev: &[Cell],
    next: &[Cell],
    size: ScreenDimensions,
    region: WindowRegion,
    mut f: impl FnMut(i16, i16, i16) -> io::Result<()>,
) -> io::Result<()> {
    if region.is_empty() {
        return Ok(());
    }

    for y in region.top..=region.bottom {
        let mut x = region.left;
        while x <= region.right {
            if cell_at(prev, size, x, y) == cell_at(next, size, x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x <= region.right && cell_at(prev, size, x, y) != cell_at(next, size, x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
