/*
session.rs

Copyright 2026 The Puzzlebox Authors

This file is part of Puzzlebox.

Puzzlebox is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Puzzlebox is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Puzzlebox. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Session controller: one player working on one puzzle.
//!
//! The session owns the active engine and the attempt counters, accumulates
//! the outcome deltas, and announces completion exactly once. An optional
//! progress store records the completion; an optional announcement delay
//! lets a frontend pace the celebration, resolved by [`Session::tick`].

use std::time::{Duration, Instant};

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::engine::{ActiveEngine, GameKind, Outcome, PlayerAction, Status};
use crate::errors::EngineError;
use crate::progress::ProgressStore;
use crate::scoring::AttemptState;

/// Completion callback, invoked with the final score.
pub type CompletionCallback = Box<dyn FnMut(u8)>;

/// Teardown callback for leaving the session.
pub type BackCallback = Box<dyn FnOnce()>;

/// A running puzzle session.
pub struct Session {
    game_id: u32,
    kind: GameKind,
    level: u32,
    engine: ActiveEngine,
    attempts: AttemptState,
    rng: StdRng,
    status: Status,
    store: Option<Box<dyn ProgressStore>>,
    on_complete: Option<CompletionCallback>,
    on_back: Option<BackCallback>,
    announce_delay: Duration,
    pending: Option<(Instant, u8)>,
    announced: bool,
    closed: bool,
}

impl Session {
    /// Start a session for a catalog game.
    ///
    /// The level defaults to the game's catalog level; the seed makes
    /// generation reproducible, otherwise the generator is seeded from the
    /// operating system.
    pub fn new(game_id: u32, level: u32, seed: Option<u64>) -> Result<Self, EngineError> {
        let kind: GameKind = GameKind::from_game_id(game_id)?;
        let mut rng: StdRng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let engine: ActiveEngine = ActiveEngine::create(kind, level, &mut rng)?;
        debug!("Session started: game {game_id} ({kind}), level {level}");

        Ok(Self {
            game_id,
            kind,
            level,
            engine,
            attempts: AttemptState::new(),
            rng,
            status: Status::Playing,
            store: None,
            on_complete: None,
            on_back: None,
            announce_delay: Duration::ZERO,
            pending: None,
            announced: false,
            closed: false,
        })
    }

    /// Attach a progress store that records the completion.
    pub fn with_store(mut self, store: Box<dyn ProgressStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Register the completion callback. Invoked exactly once per session,
    /// with the final score.
    pub fn on_complete(mut self, callback: CompletionCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    /// Register the teardown callback for [`Session::back`].
    pub fn on_back(mut self, callback: BackCallback) -> Self {
        self.on_back = Some(callback);
        self
    }

    /// Delay the completion announcement. Zero (the default) announces
    /// within the action that solved the puzzle; a nonzero delay arms a
    /// deadline that [`Session::tick`] resolves.
    pub fn with_announce_delay(mut self, delay: Duration) -> Self {
        self.announce_delay = delay;
        self
    }

    /// Route a player action to the engine and accumulate its effect.
    pub fn act(&mut self, action: &PlayerAction) -> Outcome {
        if self.closed || self.status.is_over() {
            return Outcome::ignored();
        }

        let outcome: Outcome = self
            .engine
            .apply(action, self.attempts.elapsed_secs());
        self.absorb(outcome);
        outcome
    }

    /// Advance the session clock.
    ///
    /// Resolves a pending completion announcement and lets engines with a
    /// time budget time out.
    pub fn tick(&mut self) {
        if self.closed {
            return;
        }

        if let Some((deadline, score)) = self.pending
            && Instant::now() >= deadline
        {
            self.pending = None;
            self.announce(score);
        }

        if self.status == Status::Playing
            && let Some(outcome) = self.engine.poll_clock(self.attempts.elapsed_secs())
        {
            self.absorb(outcome);
        }
    }

    /// Throw the puzzle away and generate a fresh one at the same level.
    ///
    /// Counters restart; a completion already announced stays announced.
    pub fn new_puzzle(&mut self) -> Result<(), EngineError> {
        if self.closed {
            return Ok(());
        }
        debug!("New {} puzzle at level {}", self.kind, self.level);
        self.engine = ActiveEngine::create(self.kind, self.level, &mut self.rng)?;
        self.attempts.reset();
        self.status = Status::Playing;
        self.pending = None;
        Ok(())
    }

    /// Leave the session. Cancels any pending announcement, invokes the
    /// teardown callback once, and ignores everything afterwards.
    pub fn back(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.pending = None;
        if let Some(callback) = self.on_back.take() {
            callback();
        }
    }

    /// Session status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The accumulated counters.
    pub fn attempts(&self) -> &AttemptState {
        &self.attempts
    }

    /// The engine being played.
    pub fn engine(&self) -> &ActiveEngine {
        &self.engine
    }

    /// Fold an outcome into the session state.
    fn absorb(&mut self, outcome: Outcome) {
        if !outcome.accepted {
            return;
        }
        self.attempts
            .record(outcome.moves, outcome.attempts, outcome.mistakes);
        if self.status == Status::Playing && outcome.status.is_over() {
            self.status = outcome.status;
            if outcome.status.is_completed() {
                let score: u8 = self.engine.score(&self.attempts);
                if self.announce_delay.is_zero() {
                    self.announce(score);
                } else {
                    self.pending = Some((Instant::now() + self.announce_delay, score));
                }
            }
        }
    }

    /// Record and announce the completion, exactly once.
    fn announce(&mut self, score: u8) {
        if self.announced {
            return;
        }
        self.announced = true;
        debug!("Game {} completed with score {score}", self.game_id);
        if let Some(store) = self.store.as_mut() {
            store.set(self.game_id, true, score);
        }
        if let Some(callback) = self.on_complete.as_mut() {
            callback(score);
        }
    }
}
