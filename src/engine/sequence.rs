/*
sequence.rs

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

//! Continue the arithmetic progression.
//!
//! The generator picks a random start in 1..=10; the step is `level + 2` and
//! the shown sequence has `level + 3` terms. The answer is the next term.

use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::Outcome;
use crate::scoring::{self, AttemptState};

/// Arithmetic sequence puzzle state.
#[derive(Debug, Clone)]
pub struct Sequence {
    /// Terms shown to the player.
    terms: Vec<i64>,

    /// The expected next term.
    answer: i64,

    solved: bool,
}

impl Sequence {
    /// Generate a progression for the given level.
    pub fn generate(level: u32, rng: &mut StdRng) -> Self {
        let start: i64 = rng.random_range(1..=10);
        Self::from_start(start, level)
    }

    /// Build the progression from a fixed start value.
    pub fn from_start(start: i64, level: u32) -> Self {
        let step: i64 = i64::from(level) + 2;
        let length: i64 = i64::from(level) + 3;
        let terms: Vec<i64> = (0..length).map(|i| start + i * step).collect();

        Self {
            terms,
            answer: start + length * step,
            solved: false,
        }
    }

    /// Submit the next term.
    ///
    /// Every submission counts as an attempt; a wrong one is also a mistake.
    pub fn answer(&mut self, value: i64) -> Outcome {
        if self.solved {
            return Outcome::ignored();
        }
        if value == self.answer {
            self.solved = true;
            Outcome::correct_answer()
        } else {
            Outcome::wrong_answer()
        }
    }

    /// Whether the sequence was continued correctly.
    pub fn is_complete(&self) -> bool {
        self.solved
    }

    /// Score for the session: `max(50, 100 - attempts * 20)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        scoring::penalized(50, i64::from(attempts.attempts) * 20)
    }

    /// Terms shown to the player.
    pub fn terms(&self) -> &[i64] {
        &self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;
    use rand::SeedableRng;

    #[test]
    fn progression_shape_follows_level() {
        let sequence: Sequence = Sequence::from_start(3, 2);
        assert_eq!(sequence.terms(), &[3, 7, 11, 15, 19]);
    }

    #[test]
    fn wrong_then_right() {
        let mut sequence: Sequence = Sequence::from_start(3, 2);

        let outcome: Outcome = sequence.answer(20);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.status, Status::Playing);
        assert!(!sequence.is_complete());

        let outcome: Outcome = sequence.answer(23);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.status, Status::Completed);
        assert!(sequence.is_complete());

        // Two attempts total: score is max(50, 100 - 2 * 20) = 60.
        let mut attempts: AttemptState = AttemptState::new();
        attempts.record(0, 2, 1);
        assert_eq!(sequence.score(&attempts), 60);
    }

    #[test]
    fn generated_terms_are_arithmetic() {
        for level in 0..=10 {
            let mut rng: StdRng = StdRng::seed_from_u64(u64::from(level));
            let sequence: Sequence = Sequence::generate(level, &mut rng);
            let terms: &[i64] = sequence.terms();
            assert_eq!(terms.len(), level as usize + 3);
            let step: i64 = i64::from(level) + 2;
            for window in terms.windows(2) {
                assert_eq!(window[1] - window[0], step);
            }
        }
    }
}
