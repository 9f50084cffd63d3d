//! Console game demo runner (default binary).
//!
//! Fills the terminal with randomly colored blocks for a number of frames.
//!
//! ```text
//! console-game [FRAMES] [SEED]
//! ```
//!
//! Screen size and frame pacing come from `CONSOLE_GAME_*` environment
//! variables; the screen is shrunk to fit the terminal. Logs go to stderr,
//! filtered by `RUST_LOG` (default: `warn`).

use anyhow::{Context, Result};

use console_game::demo::NoiseGame;
use console_game::engine::ConsoleApp;
use console_game::term::CrosstermSurface;
use console_game::types::{ConsoleProperties, ScreenDimensions};

const DEFAULT_FRAMES: u32 = 300;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let frames = parse_arg(&args, 0, "FRAMES")?.unwrap_or(DEFAULT_FRAMES);
    let seed = parse_arg(&args, 1, "SEED")?.unwrap_or(1);

    let mut props = ConsoleProperties::from_env()?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        props.screen = ScreenDimensions::new(
            props.screen.width().min(cols) as i32,
            props.screen.height().min(rows) as i32,
        )?;
    }
    log::debug!(
        "demo: {} frames at {}x{}",
        frames,
        props.screen.width(),
        props.screen.height()
    );

    let mut app = ConsoleApp::new(props, NoiseGame::new(seed, frames), CrosstermSurface::new())?;
    app.run()?;
    Ok(())
}

fn parse_arg(args: &[String], index: usize, name: &str) -> Result<Option<u32>> {
    args.get(index)
        .map(|s| s.parse().with_context(|| format!("invalid {name}: {s:?}")))
        .transpose()
}
