//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s and runs the
//! background reader thread that feeds them to the game loop.

pub mod map;
pub mod reader;

pub use tui_snake_types as types;

pub use map::{command_for_key, handle_key_event, should_quit};
pub use reader::{forward_event, KeyReader};
