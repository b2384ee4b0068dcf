//! Game loop runtime.
//!
//! Glues the pure core to the outside world without touching the terminal:
//!
//! - [`config`]: `SNAKE_*` environment configuration and validation
//! - [`logging`]: optional file logger (`log` facade, `fern` backend)
//! - [`session`]: the async fixed-step loop that owns the game state and
//!   consumes input [`Command`](crate::types::Command)s from a channel
//!
//! # Example
//!
//! ```no_run
//! use tui_snake_engine::{FrameSink, GameConfig, Session};
//! use tui_snake_engine::core::GameSnapshot;
//!
//! struct Discard;
//!
//! impl FrameSink for Discard {
//!     fn present(&mut self, _snap: &GameSnapshot) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let session = Session::from_config(&GameConfig::from_env())?;
//! let (_tx, rx) = tokio::sync::mpsc::unbounded_channel();
//! let summary = session.run(rx, &mut Discard).await?;
//! println!("best score {}", summary.best_score);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use config::GameConfig;
pub use logging::init_logging;
pub use session::{FrameSink, Session, SessionSummary};
