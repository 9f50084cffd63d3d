//! Crossterm backend lifecycle, encoded into an in-memory writer.

use console_game::core::{Cell, FrameBuffer};
use console_game::term::{ConsoleSurface, CrosstermSurface, SurfaceHandle, SurfaceWriter};
use console_game::types::{
    AccessRights, CellAttribute, ConsoleColor, ConsoleProperties, ScreenDimensions, ShareMode,
};

const ENTER_ALT_SCREEN: &str = "\x1b[?1049h";
const LEAVE_ALT_SCREEN: &str = "\x1b[?1049l";
const SHOW_CURSOR: &str = "\x1b[?25h";
const HIDE_CURSOR: &str = "\x1b[?25l";

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn lifecycle_enters_and_leaves_alternate_screen() {
    let dims = ScreenDimensions::new(3, 2).unwrap();
    let mut surface = CrosstermSurface::with_writer(Vec::new());

    surface
        .create(AccessRights::READ_WRITE, ShareMode::READ_WRITE)
        .unwrap();
    surface.activate().unwrap();
    surface.resize(dims).unwrap();
    let activated = text(surface.writer());
    assert!(activated.contains(ENTER_ALT_SCREEN));
    assert!(activated.contains(HIDE_CURSOR));

    surface.close().unwrap();
    let all = text(surface.writer());
    let leave = all.rfind(LEAVE_ALT_SCREEN).unwrap();
    assert!(leave > all.find(ENTER_ALT_SCREEN).unwrap());
    assert!(all.contains(SHOW_CURSOR));
}

#[test]
fn handle_and_writer_drive_a_terminal_surface() {
    let props = ConsoleProperties::with_screen(4, 2).unwrap();
    let handle = SurfaceHandle::new(CrosstermSurface::with_writer(Vec::new()));
    handle.open(&props).unwrap();

    let mut fb = FrameBuffer::new(props.screen);
    fb.put_str(0, 0, "wxyz", CellAttribute::new(ConsoleColor::Yellow, ConsoleColor::DarkBlue));
    fb.set(0, 1, Cell::new('q', CellAttribute::fg(ConsoleColor::Green)));

    let mut writer = SurfaceWriter::new();
    writer.flush(&handle, &fb, fb.region()).unwrap();
    fb.draw(3, 1, 'k', ConsoleColor::Red);
    writer.flush(&handle, &fb, fb.region()).unwrap();

    assert_eq!(writer.frames_written(), 2);
    assert!(handle.close());
}
