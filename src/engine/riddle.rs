/*
riddle.rs

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

//! Multiple-choice logic riddles from a fixed built-in table.

use crate::engine::Outcome;
use crate::scoring::{self, AttemptState};

/// One riddle entry.
#[derive(Debug, Clone, Copy)]
pub struct RiddleEntry {
    /// The question.
    pub question: &'static str,

    /// Answer options.
    pub options: [&'static str; 4],

    /// Index of the correct option.
    pub answer: usize,

    /// Explanation shown after answering.
    pub explanation: &'static str,
}

/// Built-in riddle table.
const RIDDLES: [RiddleEntry; 10] = [
    RiddleEntry {
        question: "Mia has 3 apples and Leo has 2. How many apples in total?",
        options: ["4", "5", "6", "3"],
        answer: 1,
        explanation: "3 + 2 = 5 apples",
    },
    RiddleEntry {
        question: "Which is heavier: a kilogram of feathers or a kilogram of iron?",
        options: ["Feathers", "Iron", "The same", "It depends"],
        answer: 2,
        explanation: "A kilogram is a kilogram; both weigh the same.",
    },
    RiddleEntry {
        question: "How many months of the year have 28 days?",
        options: ["One", "Two", "All twelve", "None"],
        answer: 2,
        explanation: "Every month has at least 28 days.",
    },
    RiddleEntry {
        question: "A dog has 4 legs. How many legs do three dogs have?",
        options: ["8", "10", "12", "16"],
        answer: 2,
        explanation: "4 x 3 = 12 legs",
    },
    RiddleEntry {
        question: "What can you see with your eyes closed?",
        options: ["Light", "Dreams", "Colors", "Nothing"],
        answer: 1,
        explanation: "You see dreams when you sleep with closed eyes.",
    },
    RiddleEntry {
        question: "What is 10 - 5 + 3?",
        options: ["2", "8", "12", "5"],
        answer: 1,
        explanation: "10 - 5 = 5, then 5 + 3 = 8",
    },
    RiddleEntry {
        question: "What always goes but never moves from its place?",
        options: ["A car", "Time", "A person", "A cloud"],
        answer: 1,
        explanation: "Time always goes forward but never moves anywhere.",
    },
    RiddleEntry {
        question: "How many corners does a square have?",
        options: ["3", "4", "5", "6"],
        answer: 1,
        explanation: "A square has 4 corners.",
    },
    RiddleEntry {
        question: "Which is bigger: a half or a quarter?",
        options: ["A half", "A quarter", "The same", "It depends"],
        answer: 0,
        explanation: "One half is bigger than one quarter.",
    },
    RiddleEntry {
        question: "If the day after tomorrow is Sunday, what day is today?",
        options: ["Sunday", "Friday", "Saturday", "Wednesday"],
        answer: 1,
        explanation: "Two days before Sunday is Friday.",
    },
];

/// Riddle puzzle state.
#[derive(Debug, Clone)]
pub struct Riddle {
    entry: RiddleEntry,
    solved: bool,
}

impl Riddle {
    /// Pick the entry for the given level: index `(level * 7) % table size`.
    pub fn generate(level: u32) -> Self {
        let index: usize = (level as usize * 7) % RIDDLES.len();
        Self {
            entry: RIDDLES[index],
            solved: false,
        }
    }

    /// Choose one of the options.
    ///
    /// Indexes outside the option list are ignored. Every choice counts as
    /// an attempt; a wrong one is also a mistake.
    pub fn choose(&mut self, option: usize) -> Outcome {
        if self.solved || option >= self.entry.options.len() {
            return Outcome::ignored();
        }
        if option == self.entry.answer {
            self.solved = true;
            Outcome::correct_answer()
        } else {
            Outcome::wrong_answer()
        }
    }

    /// Whether the riddle was answered correctly.
    pub fn is_complete(&self) -> bool {
        self.solved
    }

    /// Score for the session: `max(50, 100 - attempts * 15)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        scoring::penalized(50, i64::from(attempts.attempts) * 15)
    }

    /// The question.
    pub fn question(&self) -> &'static str {
        self.entry.question
    }

    /// The answer options.
    pub fn options(&self) -> &[&'static str; 4] {
        &self.entry.options
    }

    /// The explanation, available once solved.
    pub fn explanation(&self) -> Option<&'static str> {
        self.solved.then_some(self.entry.explanation)
    }
}
