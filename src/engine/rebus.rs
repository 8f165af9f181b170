/*
rebus.rs

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

//! Picture rebus: guess the word encoded by a pair of emoji.
//!
//! Puzzles come from a fixed built-in table; the level selects an entry
//! deterministically. Answers are compared case-insensitively with
//! surrounding whitespace ignored. Asking for the hint costs score.

use crate::engine::Outcome;
use crate::scoring::{self, AttemptState};

/// Score penalty for revealing the hint.
const HINT_PENALTY: i64 = 20;

/// One rebus entry.
#[derive(Debug, Clone, Copy)]
pub struct RebusEntry {
    /// Emoji line shown to the player.
    pub puzzle: &'static str,

    /// Optional nudge, shown on request.
    pub hint: &'static str,

    /// Expected answer.
    pub answer: &'static str,
}

/// Built-in rebus table.
const REBUSES: [RebusEntry; 10] = [
    RebusEntry { puzzle: "🐝 + 🍃", hint: "An insect on a plant", answer: "beetle" },
    RebusEntry { puzzle: "🌞 + 🌻", hint: "A flower that follows the sun", answer: "sunflower" },
    RebusEntry { puzzle: "⭐ + 🐟", hint: "It lives on the sea floor", answer: "starfish" },
    RebusEntry { puzzle: "🌈 + 🎀", hint: "Colors bent into an arc", answer: "bow" },
    RebusEntry { puzzle: "🔥 + 🦟", hint: "A glowing evening insect", answer: "firefly" },
    RebusEntry { puzzle: "🏠 + 🐶", hint: "Where the dog sleeps", answer: "doghouse" },
    RebusEntry { puzzle: "🌙 + 💡", hint: "It shines at night", answer: "moonlight" },
    RebusEntry { puzzle: "❄️ + ⚪", hint: "You roll it in winter", answer: "snowball" },
    RebusEntry { puzzle: "🌊 + 🐴", hint: "A tiny curled swimmer", answer: "seahorse" },
    RebusEntry { puzzle: "🦋 + 🥛", hint: "A yellow meadow flower", answer: "buttercup" },
];

/// Rebus puzzle state.
#[derive(Debug, Clone)]
pub struct Rebus {
    entry: RebusEntry,
    hint_shown: bool,
    solved: bool,
}

impl Rebus {
    /// Pick the entry for the given level: index `(level * 3) % table size`.
    pub fn generate(level: u32) -> Self {
        let index: usize = (level as usize * 3) % REBUSES.len();
        Self {
            entry: REBUSES[index],
            hint_shown: false,
            solved: false,
        }
    }

    /// Submit an answer.
    ///
    /// Comparison is case-insensitive and ignores surrounding whitespace.
    /// Every submission counts as an attempt; a wrong one is also a mistake.
    pub fn answer(&mut self, text: &str) -> Outcome {
        if self.solved {
            return Outcome::ignored();
        }
        if text.trim().eq_ignore_ascii_case(self.entry.answer) {
            self.solved = true;
            Outcome::correct_answer()
        } else {
            Outcome::wrong_answer()
        }
    }

    /// Reveal the hint. Costs score; repeated requests are ignored.
    pub fn show_hint(&mut self) -> Outcome {
        if self.solved || self.hint_shown {
            return Outcome::ignored();
        }
        self.hint_shown = true;
        Outcome::applied()
    }

    /// Whether the rebus was solved.
    pub fn is_complete(&self) -> bool {
        self.solved
    }

    /// Score for the session:
    /// `max(50, 100 - attempts * 15 - hint penalty)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        let hint: i64 = if self.hint_shown { HINT_PENALTY } else { 0 };
        scoring::penalized(50, i64::from(attempts.attempts) * 15 + hint)
    }

    /// Emoji line shown to the player.
    pub fn puzzle(&self) -> &'static str {
        self.entry.puzzle
    }

    /// The hint, if it was revealed.
    pub fn hint(&self) -> Option<&'static str> {
        self.hint_shown.then_some(self.entry.hint)
    }
}
