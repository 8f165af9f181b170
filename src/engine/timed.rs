/*
timed.rs

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

//! Generic timed challenge, the fallback for catalog entries without a
//! dedicated engine.
//!
//! The player races a time budget of `30 + level * 10` seconds. Declaring
//! done within the budget completes the challenge; running out of time loses
//! it with a consolation score.

use crate::engine::Outcome;
use crate::scoring::{self, AttemptState};

/// How the challenge ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    /// Finished within the budget, with the elapsed seconds.
    Done(u64),

    /// The budget ran out.
    Timeout,
}

/// Timed challenge state.
#[derive(Debug, Clone)]
pub struct Timed {
    level: u32,
    budget: u64,
    ending: Option<Ending>,
}

impl Timed {
    /// Create a challenge with a budget of `30 + level * 10` seconds.
    pub fn generate(level: u32) -> Self {
        Self {
            level,
            budget: 30 + u64::from(level) * 10,
            ending: None,
        }
    }

    /// The player declares the challenge done after `elapsed` seconds.
    ///
    /// A declaration past the budget is treated as a timeout.
    pub fn finish(&mut self, elapsed: u64) -> Outcome {
        if self.ending.is_some() {
            return Outcome::ignored();
        }
        if elapsed >= self.budget {
            self.ending = Some(Ending::Timeout);
            return Outcome::lost(0);
        }
        self.ending = Some(Ending::Done(elapsed));
        Outcome::completed()
    }

    /// Poll the clock; once `elapsed` reaches the budget the challenge is
    /// lost. Returns the outcome of the transition, if one happened.
    pub fn check_timeout(&mut self, elapsed: u64) -> Option<Outcome> {
        if self.ending.is_some() || elapsed < self.budget {
            return None;
        }
        self.ending = Some(Ending::Timeout);
        Some(Outcome::lost(0))
    }

    /// Whether the challenge finished within the budget.
    pub fn is_complete(&self) -> bool {
        matches!(self.ending, Some(Ending::Done(_)))
    }

    /// Whether the budget ran out.
    pub fn is_timed_out(&self) -> bool {
        self.ending == Some(Ending::Timeout)
    }

    /// Score for the session.
    ///
    /// Finishing in time scores `max(50, 100 - elapsed / 2)`; a timeout still
    /// awards a consolation `max(40, 80 - level * 3)`.
    pub fn score(&self, _attempts: &AttemptState) -> u8 {
        match self.ending {
            Some(Ending::Done(elapsed)) => scoring::penalized(50, (elapsed / 2) as i64),
            Some(Ending::Timeout) => {
                scoring::penalized(40, 20 + i64::from(self.level) * 3)
            }
            None => 0,
        }
    }

    /// The time budget in seconds.
    pub fn budget(&self) -> u64 {
        self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;

    #[test]
    fn budget_follows_level() {
        assert_eq!(Timed::generate(0).budget(), 30);
        assert_eq!(Timed::generate(5).budget(), 80);
    }

    #[test]
    fn finishing_in_time_completes() {
        let mut timed: Timed = Timed::generate(2);
        let outcome: Outcome = timed.finish(10);
        assert_eq!(outcome.status, Status::Completed);
        assert!(timed.is_complete());

        let attempts: AttemptState = AttemptState::new();
        assert_eq!(timed.score(&attempts), 95);
    }

    #[test]
    fn slow_finish_hits_the_floor() {
        let mut timed: Timed = Timed::generate(10);
        timed.finish(120);
        let attempts: AttemptState = AttemptState::new();
        assert_eq!(timed.score(&attempts), 50);
    }

    #[test]
    fn timeout_loses_with_consolation_score() {
        let mut timed: Timed = Timed::generate(3);
        assert!(timed.check_timeout(59).is_none());

        let outcome: Outcome = timed.check_timeout(60).unwrap();
        assert_eq!(outcome.status, Status::Lost);
        assert!(timed.is_timed_out());
        assert!(!timed.is_complete());

        let attempts: AttemptState = AttemptState::new();
        assert_eq!(timed.score(&attempts), 71);

        // The transition fires only once.
        assert!(timed.check_timeout(61).is_none());
    }

    #[test]
    fn late_finish_is_a_timeout() {
        let mut timed: Timed = Timed::generate(0);
        let outcome: Outcome = timed.finish(30);
        assert_eq!(outcome.status, Status::Lost);
        assert!(timed.is_timed_out());
    }
}
