//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_snake::{core, engine, input, term, types}` and adds [`app`], the glue
//! that presents engine frames on a terminal.

pub mod app;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
