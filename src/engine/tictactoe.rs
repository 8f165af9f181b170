/*
tictactoe.rs

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

//! N-in-a-row on a board that grows with the level.
//!
//! The board side is `3 + level` and the winning run length is
//! `min(side, 3 + level / 2)`. The player places X; a random-legal-move
//! opponent answers with O inside the same placement call (the original
//! game's half-second pause before the opponent move is pure UI pacing).
//! An opponent win or a full board ends the session without a score; the
//! puzzle can simply be regenerated.

use log::debug;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::engine::Outcome;
use crate::scoring::{self, AttemptState};

/// Player marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// The player.
    X,

    /// The computer opponent.
    O,
}

/// How the game ended, if it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    PlayerWon,
    OpponentWon,
    BoardFull,
}

/// N-in-a-row board state.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    /// Square grid, row major.
    board: Vec<Vec<Option<Mark>>>,

    /// Side length of the board.
    size: usize,

    /// Run length required to win.
    win_length: usize,

    /// RNG driving the opponent.
    rng: StdRng,

    ending: Option<Ending>,
}

impl TicTacToe {
    /// Create an empty board for the given level.
    pub fn generate(level: u32, rng: &mut StdRng) -> Self {
        let size: usize = 3 + level as usize;
        let win_length: usize = size.min(3 + (level as usize) / 2);
        debug!("Board {size}x{size}, win length {win_length}");

        Self {
            board: vec![vec![None; size]; size],
            size,
            win_length,
            rng: StdRng::seed_from_u64(rng.random()),
            ending: None,
        }
    }

    /// Place the player's mark, then let the opponent answer.
    ///
    /// Occupied cells and finished games are silently ignored. Both marks
    /// count toward the session move counter.
    pub fn place(&mut self, row: usize, col: usize) -> Outcome {
        if self.ending.is_some() || row >= self.size || col >= self.size {
            return Outcome::ignored();
        }
        if self.board[row][col].is_some() {
            return Outcome::ignored();
        }

        self.board[row][col] = Some(Mark::X);
        if self.wins_at(row, col) {
            self.ending = Some(Ending::PlayerWon);
            return Outcome::completed_move();
        }
        if self.is_full() {
            self.ending = Some(Ending::BoardFull);
            return Outcome::drawn(1);
        }

        // Opponent: a random legal move.
        let empty: Vec<(usize, usize)> = self.empty_cells();
        let index: usize = self.rng.random_range(0..empty.len());
        let (opponent_row, opponent_col) = empty[index];
        self.board[opponent_row][opponent_col] = Some(Mark::O);
        debug!("Opponent plays ({opponent_row}, {opponent_col})");

        if self.wins_at(opponent_row, opponent_col) {
            self.ending = Some(Ending::OpponentWon);
            return Outcome::lost(2);
        }
        if self.is_full() {
            self.ending = Some(Ending::BoardFull);
            return Outcome::drawn(2);
        }
        Outcome::moved_by(2)
    }

    /// Whether the player completed a winning run.
    pub fn is_complete(&self) -> bool {
        self.ending == Some(Ending::PlayerWon)
    }

    /// Whether the game ended without a player win.
    pub fn is_over(&self) -> bool {
        matches!(self.ending, Some(Ending::OpponentWon) | Some(Ending::BoardFull))
    }

    /// Score for the session: `max(50, 100 - moves * 5)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        scoring::penalized(50, i64::from(attempts.moves) * 5)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Run length required to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Mark at the given cell.
    pub fn mark_at(&self, row: usize, col: usize) -> Option<Mark> {
        self.board[row][col]
    }

    /// Whether the mark just placed at the given cell completes a run.
    ///
    /// Counts contiguous equal marks from the placed cell along the four
    /// axes, walking both signs of each axis.
    fn wins_at(&self, row: usize, col: usize) -> bool {
        let Some(mark) = self.board[row][col] else {
            return false;
        };
        let axes: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for (dr, dc) in axes {
            let mut count: usize = 1;
            for sign in [1isize, -1] {
                for i in 1..self.win_length as isize {
                    let r: isize = row as isize + dr * i * sign;
                    let c: isize = col as isize + dc * i * sign;
                    if r < 0 || c < 0 || r >= self.size as isize || c >= self.size as isize {
                        break;
                    }
                    if self.board[r as usize][c as usize] != Some(mark) {
                        break;
                    }
                    count += 1;
                }
            }
            if count >= self.win_length {
                return true;
            }
        }
        false
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(|row| row.iter().all(|cell| cell.is_some()))
    }

    fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells: Vec<(usize, usize)> = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.board[row][col].is_none() {
                    cells.push((row, col));
                }
            }
        }
        cells
    }
}
