//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, input decoding, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, headless benchmarks)
//!
//! # Module Structure
//!
//! - [`snake`]: body segments, wrapping movement and self-collision
//! - [`turns`]: buffered turn input with the reversal guard
//! - [`food`]: uniform food placement over free cells
//! - [`game_state`]: complete game state, tick loop step and episode lifecycle
//! - [`rng`]: small LCG used for food placement
//! - [`snapshot`]: render-facing copy of the state
//!
//! # Game Rules
//!
//! - The field wraps on both axes.
//! - Each tick the snake moves one cell; the new head may not land on any
//!   current segment (tail included), otherwise the episode ends.
//! - Landing on food grows the snake by one cell and respawns the food.
//! - A turn opposite to the current direction is ignored.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, TickOutcome};
//! use tui_snake_types::{Direction, FieldSize, GameAction};
//!
//! let mut game = GameState::new(FieldSize::default(), 12345);
//!
//! game.apply_action(GameAction::Turn(Direction::Left));
//! assert!(matches!(game.tick(), TickOutcome::Moved { .. } | TickOutcome::Ate { .. }));
//! assert_eq!(game.heading(), Direction::Left);
//! ```

pub mod food;
pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod turns;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::FoodSpawner;
pub use game_state::{GameState, TickOutcome};
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use turns::TurnQueue;
