//! Buffered turn input.
//!
//! Key presses can arrive faster than ticks. Turns are queued and consumed one
//! per tick, and each new turn is checked against the direction the snake will
//! be travelling once everything already queued has been applied.

use arrayvec::ArrayVec;

use crate::types::{Direction, MAX_PENDING_TURNS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnQueue {
    pending: ArrayVec<Direction, MAX_PENDING_TURNS>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction in effect after all queued turns, given the current heading.
    pub fn intended(&self, heading: Direction) -> Direction {
        self.pending.last().copied().unwrap_or(heading)
    }

    /// Queue a turn.
    ///
    /// Rejects reversals and repeats of the intended direction, and drops the
    /// turn when the queue is full. Returns whether it was queued.
    pub fn push(&mut self, turn: Direction, heading: Direction) -> bool {
        let intended = self.intended(heading);
        if turn == intended || turn.is_opposite(intended) {
            return false;
        }
        self.pending.try_push(turn).is_ok()
    }

    /// Next turn to apply on this tick, if any.
    pub fn pop(&mut self) -> Option<Direction> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.pending
    }
}
