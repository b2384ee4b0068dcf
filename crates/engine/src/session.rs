//! The fixed-step game loop.
//!
//! A [`Session`] owns the [`GameState`] outright. Input arrives as
//! [`Command`]s on a channel and ticks come from a tokio interval; both are
//! handled on the same task, so there is no shared mutable state between the
//! key reader and the loop.

use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, MissedTickBehavior};

use crate::config::GameConfig;
use crate::core::{GameSnapshot, GameState, TickOutcome};
use crate::types::{Command, GameAction};

/// Destination for rendered frames.
pub trait FrameSink {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()>;
}

/// Totals reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Ticks processed (including idle ticks while paused or over).
    pub ticks: u64,
    /// Episodes started, counting the first one.
    pub episodes: u32,
    pub final_score: u32,
    pub best_score: u32,
}

pub struct Session {
    state: GameState,
    tick: Duration,
    snap: GameSnapshot,
    ticks: u64,
    best_score: u32,
}

impl Session {
    pub fn new(state: GameState, tick: Duration) -> Self {
        Self {
            state,
            tick,
            snap: GameSnapshot::default(),
            ticks: 0,
            best_score: 0,
        }
    }

    /// Build a session from validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let field = config.validate().context("invalid configuration")?;
        Ok(Self::new(
            GameState::new(field, config.seed),
            config.tick_interval(),
        ))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    /// Apply one action, logging lifecycle changes.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let changed = self.state.apply_action(action);
        match action {
            GameAction::Turn(d) if changed => debug!("turn queued: {}", d.as_str()),
            GameAction::Turn(d) => trace!("turn ignored: {}", d.as_str()),
            GameAction::Pause if changed => {
                info!("{}", if self.state.paused() { "paused" } else { "resumed" })
            }
            GameAction::Pause => {}
            GameAction::Restart => info!(
                "restart requested; starting episode {}",
                self.state.episode_id()
            ),
        }
        changed
    }

    /// Advance one tick, logging the outcome.
    pub fn step(&mut self) -> TickOutcome {
        self.ticks += 1;
        let outcome = self.state.tick();
        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Moved { head } => trace!("head -> ({}, {})", head.x, head.y),
            TickOutcome::Ate { head, next_food } => {
                debug!(
                    "ate at ({}, {}); score {}; next food {:?}",
                    head.x,
                    head.y,
                    self.state.score(),
                    next_food
                );
                self.best_score = self.best_score.max(self.state.score());
            }
            TickOutcome::Collided { at } => warn!(
                "game over: collided at ({}, {}) with score {} after {} moves",
                at.x,
                at.y,
                self.state.score(),
                self.state.ticks()
            ),
        }
        outcome
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            ticks: self.ticks,
            episodes: self.state.episode_id().wrapping_add(1),
            final_score: self.state.score(),
            best_score: self.best_score.max(self.state.score()),
        }
    }

    /// Run until `Quit` arrives or every sender is gone.
    ///
    /// Commands already waiting are handled before a due tick, so input is
    /// applied in arrival order relative to the ticks it preceded.
    pub async fn run<S: FrameSink>(
        mut self,
        mut commands: UnboundedReceiver<Command>,
        sink: &mut S,
    ) -> Result<SessionSummary> {
        let field = self.state.field();
        info!(
            "session start: field {}x{}, tick {:?}, seed {}",
            field.width(),
            field.height(),
            self.tick,
            self.state.seed()
        );

        self.present(sink)?;

        let mut interval = time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;

        loop {
            tokio::select! {
                biased;

                cmd = commands.recv() => match cmd {
                    Some(Command::Action(action)) => {
                        if self.apply(action) {
                            self.present(sink)?;
                        }
                    }
                    Some(Command::Quit) => {
                        info!("quit requested");
                        break;
                    }
                    None => {
                        info!("command channel closed");
                        break;
                    }
                },
                _ = interval.tick() => {
                    self.step();
                    self.present(sink)?;
                }
            }
        }

        let summary = self.summary();
        info!(
            "session end: {} ticks, {} episodes, best score {}",
            summary.ticks, summary.episodes, summary.best_score
        );
        Ok(summary)
    }

    fn present<S: FrameSink>(&mut self, sink: &mut S) -> Result<()> {
        self.state.snapshot_into(&mut self.snap);
        sink.present(&self.snap)
    }
}
