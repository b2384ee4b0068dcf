//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, input decoding).
//!
//! # Field Geometry
//!
//! The play field is a grid of cells. One cell is one **step**: the snake moves
//! exactly one cell per tick and every segment occupies exactly one cell.
//!
//! - **Default size**: 40 x 20 cells
//! - **Minimum size**: 8 x 8 cells (room for the centered four-segment snake)
//! - **Maximum area**: 2^20 cells (e.g. 1024 x 1024)
//! - **Wrapping**: leaving the field on one side re-enters on the opposite side
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 60 | Default fixed-step interval |
//! | `MIN_TICK_MS` | 10 | Fastest tick accepted from configuration |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, FieldSize, Position};
//!
//! let field = FieldSize::new(10, 10).unwrap();
//!
//! // Step right from the last column wraps to column 0.
//! let p = Position::new(9, 4).stepped(Direction::Right, field);
//! assert_eq!(p, Position::new(0, 4));
//!
//! // Directions parse from their protocol names.
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! ```

/// Default field width in cells.
pub const FIELD_WIDTH: u16 = 40;

/// Default field height in cells.
pub const FIELD_HEIGHT: u16 = 20;

/// Smallest accepted field dimension on either axis.
pub const MIN_FIELD_CELLS: u16 = 8;

/// Largest accepted field area in cells.
pub const MAX_FIELD_CELLS: usize = 1 << 20;

/// Number of segments a fresh snake starts with.
pub const INITIAL_SNAKE_LEN: usize = 4;

/// Default fixed-step interval in milliseconds.
pub const TICK_MS: u32 = 60;

/// Fastest tick interval accepted from configuration.
pub const MIN_TICK_MS: u32 = 10;

/// Maximum number of buffered turns between ticks.
pub const MAX_PENDING_TURNS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_fits_minimum() {
        assert!(FIELD_WIDTH >= MIN_FIELD_CELLS);
        assert!(FIELD_HEIGHT >= MIN_FIELD_CELLS);
        assert!(TICK_MS >= MIN_TICK_MS);
    }

    #[test]
    fn field_size_rejects_tiny_dimensions() {
        assert!(FieldSize::new(MIN_FIELD_CELLS, MIN_FIELD_CELLS).is_some());
        assert!(FieldSize::new(MIN_FIELD_CELLS - 1, 20).is_none());
        assert!(FieldSize::new(20, 0).is_none());
    }

    #[test]
    fn field_size_caps_total_area() {
        assert!(FieldSize::new(1024, 1024).is_some());
        assert!(FieldSize::new(1025, 1024).is_none());
        assert!(FieldSize::new(u16::MAX, u16::MAX).is_none());
        assert_eq!(FieldSize::new(300, 300).map(|f| f.cells()), Some(90_000));
    }

    #[test]
    fn wrap_is_independent_per_axis() {
        let field = FieldSize::new(10, 8).unwrap();
        assert_eq!(field.wrap(-1, -1), Position::new(9, 7));
        assert_eq!(field.wrap(10, 8), Position::new(0, 0));
        assert_eq!(field.wrap(3, 8), Position::new(3, 0));
        assert_eq!(field.wrap(-1, 5), Position::new(9, 5));
    }

    #[test]
    fn opposite_pairs() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
        }
    }

    #[test]
    fn delta_matches_screen_axes() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }
}

/// Play field dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSize {
    width: u16,
    height: u16,
}

impl FieldSize {
    /// Create a field, or `None` if either side is below [`MIN_FIELD_CELLS`]
    /// or the area exceeds [`MAX_FIELD_CELLS`].
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width < MIN_FIELD_CELLS || height < MIN_FIELD_CELLS {
            return None;
        }
        if (width as usize) * (height as usize) > MAX_FIELD_CELLS {
            return None;
        }
        Some(Self { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Field center, rounded down.
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Fold signed coordinates back onto the field, each axis independently.
    pub fn wrap(&self, x: i32, y: i32) -> Position {
        Position {
            x: x.rem_euclid(self.width as i32) as u16,
            y: y.rem_euclid(self.height as i32) as u16,
        }
    }

    /// Row-major index of a position.
    pub fn index_of(&self, pos: Position) -> usize {
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    /// Inverse of [`FieldSize::index_of`].
    pub fn position_at(&self, index: usize) -> Position {
        let w = self.width as usize;
        Position::new((index % w) as u16, (index / w) as u16)
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// A cell on the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`, wrapped onto `field`.
    pub fn stepped(self, direction: Direction, field: FieldSize) -> Self {
        let (dx, dy) = direction.delta();
        field.wrap(self.x as i32 + dx, self.y as i32 + dy)
    }
}

/// The four cardinal directions.
///
/// Screen axes: `y` grows downward, so `Up` is a negative `y` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to modify game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Queue a turn, subject to the reversal guard
    Turn(Direction),
    /// Toggle pause state
    Pause,
    /// Start a fresh episode (at any time, including after game over)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Turn(Direction::Up)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Turn),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(d) => d.as_str(),
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Message delivered from the input side to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Action(GameAction),
    Quit,
}

impl From<GameAction> for Command {
    fn from(action: GameAction) -> Self {
        Command::Action(action)
    }
}
