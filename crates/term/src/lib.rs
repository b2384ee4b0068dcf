//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: snapshots are rendered into a plain
//! framebuffer which is then flushed to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so layout can be asserted on in tests
//! - Control the aspect ratio (2 columns per field cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
