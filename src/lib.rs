//! Console game framework (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so applications depend on
//! a single package: `console_game::{types,core,term,engine}`.

pub mod demo;

pub use console_game_core as core;
pub use console_game_engine as engine;
pub use console_game_term as term;
pub use console_game_types as types;
