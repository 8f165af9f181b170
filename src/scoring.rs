/*
scoring.rs

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

//! Score computation and per-session attempt counters.
//!
//! Every engine derives its score from the same penalty law: start from 100,
//! subtract a penalty per mistake, attempt, move, or elapsed time unit, and
//! never go below the engine's floor. The [`penalized`] function implements
//! that law once; the engines only differ in the floor and in how they weigh
//! the [`AttemptState`] counters.

use std::time::Instant;

/// Maximum score for a completed puzzle.
pub const MAX_SCORE: u8 = 100;

/// Counters accumulated while the player works on one puzzle.
///
/// All counters are monotonically non-decreasing until [`AttemptState::reset`]
/// is called for a new puzzle. Which counter a given player action feeds is
/// decided by the engine: board moves increment `moves`, submitted answers
/// increment `attempts`, and wrong-but-legal answers also increment
/// `mistakes`.
#[derive(Debug, Clone)]
pub struct AttemptState {
    /// Number of wrong-but-legal inputs (wrong cell value, wrong answer).
    pub mistakes: u32,

    /// Number of submitted answers, including the correct final one.
    pub attempts: u32,

    /// Number of accepted board moves or placements.
    pub moves: u32,

    /// Time when the puzzle was started or last reset.
    started: Instant,
}

impl Default for AttemptState {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptState {
    /// Create an [`AttemptState`] object with all counters at zero.
    pub fn new() -> Self {
        Self {
            mistakes: 0,
            attempts: 0,
            moves: 0,
            started: Instant::now(),
        }
    }

    /// Reset all counters and restart the clock for a new puzzle.
    pub fn reset(&mut self) {
        self.mistakes = 0;
        self.attempts = 0;
        self.moves = 0;
        self.started = Instant::now();
    }

    /// Add counter deltas reported by an engine.
    pub fn record(&mut self, moves: u32, attempts: u32, mistakes: u32) {
        self.moves += moves;
        self.attempts += attempts;
        self.mistakes += mistakes;
    }

    /// Number of whole seconds since the puzzle was started.
    pub fn elapsed_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

/// Compute `max(floor, 100 - penalty)`, clamped to `[0, 100]`.
///
/// The result is non-increasing in `penalty`, so any score built from this
/// function is non-increasing in mistakes, attempts, moves, and elapsed time.
pub fn penalized(floor: u8, penalty: i64) -> u8 {
    let raw: i64 = i64::from(MAX_SCORE) - penalty;
    let floored: i64 = raw.max(i64::from(floor.min(MAX_SCORE)));
    floored.clamp(0, i64::from(MAX_SCORE)) as u8
}
