//! Snake body and movement rules.
//!
//! The body is a deque with the head at the front. A move pushes the new head
//! and drops the tail; growth duplicates the tail cell so the snake becomes one
//! cell longer once the duplicate is left behind on the next move.

use std::collections::VecDeque;

use crate::types::{Direction, FieldSize, Position, INITIAL_SNAKE_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
}

impl Snake {
    /// Fresh snake: four segments stacked vertically on the field center,
    /// head on top, heading up.
    pub fn new_centered(field: FieldSize) -> Self {
        let center = field.center();
        let mut body = VecDeque::with_capacity(field.cells().min(64));
        for i in (0..INITIAL_SNAKE_LEN as i32).rev() {
            body.push_back(field.wrap(center.x as i32, center.y as i32 - i));
        }
        Self {
            body,
            heading: Direction::Up,
        }
    }

    /// Build a snake from explicit segments (head first).
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments(segments: &[Position], heading: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            body: segments.iter().copied().collect(),
            heading,
        })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments, head first.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Where the head would land moving in `direction`.
    pub fn next_head(&self, direction: Direction, field: FieldSize) -> Position {
        self.head().stepped(direction, field)
    }

    /// Move one step in `direction`.
    ///
    /// The new head is checked against every current segment, tail included,
    /// before anything moves. Returns `false` (and leaves the snake untouched)
    /// on self-collision.
    pub fn try_advance(&mut self, direction: Direction, field: FieldSize) -> bool {
        let next = self.next_head(direction, field);
        if self.occupies(next) {
            return false;
        }
        self.body.push_front(next);
        self.body.pop_back();
        self.heading = direction;
        true
    }

    /// Append a segment on top of the current tail.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push_back(tail);
    }
}
