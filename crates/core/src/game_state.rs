//! Game state module - manages the complete game state
//!
//! This module ties together the snake, the turn buffer, food placement and the
//! RNG. It advances the game one fixed step per [`GameState::tick`] and handles
//! the episode lifecycle (pause, game over, restart).

use crate::food::FoodSpawner;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::turns::TurnQueue;
use crate::types::*;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already over; nothing moved.
    Idle,
    /// The snake moved one step.
    Moved { head: Position },
    /// The snake moved onto the food and grew; `next_food` is the respawn.
    Ate {
        head: Position,
        next_food: Option<Position>,
    },
    /// The head would have landed on the body at `at`; the episode is over.
    Collided { at: Position },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    field: FieldSize,
    snake: Snake,
    food: Option<Position>,
    turns: TurnQueue,
    rng: SimpleRng,
    spawner: FoodSpawner,
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Successful moves in the current episode.
    ticks: u32,
    /// Food eaten in the current episode.
    score: u32,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game on `field` with the given RNG seed.
    ///
    /// The snake starts centered, heading up, and the first food is placed.
    pub fn new(field: FieldSize, seed: u32) -> Self {
        let mut state = Self {
            field,
            snake: Snake::new_centered(field),
            food: None,
            turns: TurnQueue::new(),
            rng: SimpleRng::new(seed),
            spawner: FoodSpawner::new(),
            seed,
            episode_id: 0,
            ticks: 0,
            score: 0,
            paused: false,
            game_over: false,
        };
        state.respawn_food();
        state
    }

    pub fn field(&self) -> FieldSize {
        self.field
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Direction the snake is currently travelling.
    pub fn heading(&self) -> Direction {
        self.snake.heading()
    }

    /// Direction in effect once queued turns are applied.
    pub fn direction(&self) -> Direction {
        self.turns.intended(self.snake.heading())
    }

    pub fn pending_turns(&self) -> &[Direction] {
        self.turns.as_slice()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Place (or remove) the food explicitly, e.g. for scripted scenarios.
    pub fn set_food(&mut self, food: Option<Position>) {
        self.food = food.filter(|&p| self.field.contains(p));
    }

    /// Swap in a different snake and drop any queued turns.
    ///
    /// Segments outside the field are rejected.
    pub fn replace_snake(&mut self, snake: Snake) -> bool {
        if !snake.segments().all(|p| self.field.contains(p)) {
            return false;
        }
        self.snake = snake;
        self.turns.clear();
        true
    }

    /// Advance the game by one fixed step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused || self.game_over {
            return TickOutcome::Idle;
        }

        let direction = self.turns.pop().unwrap_or(self.snake.heading());
        let next = self.snake.next_head(direction, self.field);
        if !self.snake.try_advance(direction, self.field) {
            self.game_over = true;
            self.turns.clear();
            return TickOutcome::Collided { at: next };
        }
        self.ticks = self.ticks.wrapping_add(1);

        let head = self.snake.head();
        if self.food == Some(head) {
            self.snake.grow();
            self.score = self.score.saturating_add(1);
            self.respawn_food();
            return TickOutcome::Ate {
                head,
                next_food: self.food,
            };
        }

        TickOutcome::Moved { head }
    }

    /// Apply a game action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => {
                if self.paused || self.game_over {
                    return false;
                }
                self.turns.push(direction, self.snake.heading())
            }
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Start a fresh episode on the same field.
    ///
    /// The RNG keeps running, so the new episode gets a different food
    /// sequence than the last one.
    pub fn restart(&mut self) {
        self.snake = Snake::new_centered(self.field);
        self.turns.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.ticks = 0;
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.respawn_food();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.field = self.field;
        out.body.clear();
        out.body.extend(self.snake.segments());
        out.food = self.food;
        out.heading = self.snake.heading();
        out.direction = self.direction();
        out.score = self.score;
        out.ticks = self.ticks;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn respawn_food(&mut self) {
        self.food = self.spawner.spawn(&mut self.rng, self.field, &self.snake);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> FieldSize {
        FieldSize::new(20, 16).unwrap()
    }

    fn state() -> GameState {
        let mut s = GameState::new(field(), 12345);
        // Keep food out of the default path (column 10 going up).
        s.set_food(Some(Position::new(0, 15)));
        s
    }

    #[test]
    fn new_game_has_food_off_the_snake() {
        let s = GameState::new(field(), 1);
        let food = s.food().unwrap();
        assert!(!s.snake().occupies(food));
        assert_eq!(s.snake().len(), INITIAL_SNAKE_LEN);
        assert_eq!(s.heading(), Direction::Up);
        assert!(!s.game_over());
        assert!(!s.paused());
    }

    #[test]
    fn tick_moves_without_growing() {
        let mut s = state();
        let head = s.snake().head();
        assert_eq!(
            s.tick(),
            TickOutcome::Moved {
                head: Position::new(head.x, head.y - 1)
            }
        );
        assert_eq!(s.snake().len(), INITIAL_SNAKE_LEN);
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn eating_grows_by_one_and_respawns() {
        let mut s = state();
        let head = s.snake().head();
        let target = Position::new(head.x, head.y - 1);
        s.set_food(Some(target));

        match s.tick() {
            TickOutcome::Ate { head, next_food } => {
                assert_eq!(head, target);
                let f = next_food.unwrap();
                assert_ne!(f, target);
                assert!(!s.snake().occupies(f));
            }
            other => panic!("expected Ate, got {:?}", other),
        }
        assert_eq!(s.snake().len(), INITIAL_SNAKE_LEN + 1);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn turn_applies_on_next_tick() {
        let mut s = state();
        assert!(s.apply_action(GameAction::Turn(Direction::Left)));
        assert_eq!(s.heading(), Direction::Up);
        assert_eq!(s.direction(), Direction::Left);
        s.tick();
        assert_eq!(s.heading(), Direction::Left);
    }

    #[test]
    fn reversal_is_ignored() {
        let mut s = state();
        assert!(!s.apply_action(GameAction::Turn(Direction::Down)));
        assert_eq!(s.direction(), Direction::Up);
        assert!(matches!(s.tick(), TickOutcome::Moved { .. }));
    }

    #[test]
    fn quick_double_turn_does_not_reverse() {
        let mut s = state();
        // Left then Down within one tick: both queue and play out over two ticks.
        assert!(s.apply_action(GameAction::Turn(Direction::Left)));
        assert!(s.apply_action(GameAction::Turn(Direction::Down)));
        assert!(matches!(s.tick(), TickOutcome::Moved { .. }));
        assert!(matches!(s.tick(), TickOutcome::Moved { .. }));
        assert!(!s.game_over());
        assert_eq!(s.heading(), Direction::Down);
    }

    #[test]
    fn self_collision_ends_episode() {
        let mut s = state();
        // Hook shape: turning left, down, right runs the head into its own body.
        let segs = [
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(5, 7),
            Position::new(5, 8),
            Position::new(5, 9),
        ];
        assert!(s.replace_snake(Snake::from_segments(&segs, Direction::Up).unwrap()));
        s.apply_action(GameAction::Turn(Direction::Left));
        s.apply_action(GameAction::Turn(Direction::Down));
        s.apply_action(GameAction::Turn(Direction::Right));

        assert!(matches!(s.tick(), TickOutcome::Moved { .. })); // (4,5)
        assert!(matches!(s.tick(), TickOutcome::Moved { .. })); // (4,6)
        assert_eq!(
            s.tick(),
            TickOutcome::Collided {
                at: Position::new(5, 6)
            }
        );
        assert!(s.game_over());
        assert_eq!(s.tick(), TickOutcome::Idle);
        assert!(!s.apply_action(GameAction::Turn(Direction::Up)));
        assert!(!s.apply_action(GameAction::Pause));
    }

    #[test]
    fn pause_freezes_ticks_and_turns() {
        let mut s = state();
        assert!(s.apply_action(GameAction::Pause));
        let before = s.snapshot();
        assert_eq!(s.tick(), TickOutcome::Idle);
        assert!(!s.apply_action(GameAction::Turn(Direction::Left)));
        assert_eq!(s.snapshot().body, before.body);

        assert!(s.apply_action(GameAction::Pause));
        assert!(!s.paused());
        assert!(matches!(s.tick(), TickOutcome::Moved { .. }));
    }

    #[test]
    fn restart_resets_episode() {
        let mut s = state();
        let initial: Vec<_> = s.snake().segments().collect();
        s.apply_action(GameAction::Turn(Direction::Left));
        s.tick();
        s.tick();
        s.apply_action(GameAction::Pause);

        assert!(s.apply_action(GameAction::Restart));
        assert_eq!(s.episode_id(), 1);
        assert_eq!(s.score(), 0);
        assert_eq!(s.ticks(), 0);
        assert!(!s.paused());
        assert!(!s.game_over());
        assert_eq!(s.heading(), Direction::Up);
        assert!(s.pending_turns().is_empty());
        assert_eq!(s.snake().segments().collect::<Vec<_>>(), initial);
        assert!(!s.snake().occupies(s.food().unwrap()));
    }

    #[test]
    fn set_food_rejects_out_of_field() {
        let mut s = state();
        s.set_food(Some(Position::new(200, 0)));
        assert_eq!(s.food(), None);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut s = state();
        s.apply_action(GameAction::Turn(Direction::Right));
        let snap = s.snapshot();
        assert_eq!(snap.body.len(), INITIAL_SNAKE_LEN);
        assert_eq!(snap.body[0], s.snake().head());
        assert_eq!(snap.heading, Direction::Up);
        assert_eq!(snap.direction, Direction::Right);
        assert_eq!(snap.food, Some(Position::new(0, 15)));
        assert_eq!(snap.seed, 12345);
    }
}
