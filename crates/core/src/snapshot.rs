use crate::types::{Direction, FieldSize, Position};

/// Render-facing copy of the game state.
///
/// Reuse one snapshot across frames with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into); the body
/// buffer keeps its capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub field: FieldSize,
    /// Segments, head first.
    pub body: Vec<Position>,
    pub food: Option<Position>,
    pub heading: Direction,
    pub direction: Direction,
    pub score: u32,
    pub ticks: u32,
    pub episode_id: u32,
    pub seed: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    pub fn length(&self) -> usize {
        self.body.len()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: FieldSize::default(),
            body: Vec::new(),
            food: None,
            heading: Direction::Up,
            direction: Direction::Up,
            score: 0,
            ticks: 0,
            episode_id: 0,
            seed: 0,
            paused: false,
            game_over: false,
        }
    }
}
