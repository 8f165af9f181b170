/*
lib.rs

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

//! Puzzle engines for a children's mini-game catalog.
//!
//! The catalog describes 500 games across five categories; the first hundred
//! map to ten bespoke puzzle engines (maze, capture-the-king chess,
//! N-in-a-row, number pyramid, two sudoku variants, rebus, riddle, sequence,
//! tangram, spot-the-difference) and the rest to a generic timed challenge.
//! A [`session::Session`] drives one puzzle end to end: it routes player
//! actions, accumulates the attempt counters, scores the completed puzzle,
//! and records the result in a [`progress::ProgressStore`].
//!
//! Rendering, input mapping, and unlock progression are out of scope: this
//! crate only provides the game logic behind such a frontend.

pub mod catalog;
pub mod cli_options;
pub mod engine;
pub mod errors;
pub mod progress;
pub mod scoring;
pub mod session;
