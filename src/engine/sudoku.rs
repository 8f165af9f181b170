/*
sudoku.rs

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

//! Procedural N x N number grid in the sudoku style.
//!
//! The solution is the modular pattern `((row + col) % size) + 1`, with about
//! half of the cells revealed up front. This is not a real sudoku: rows wrap
//! the same cyclic sequence and there are no box constraints. The grid sizes
//! are small enough for a children's game that the pattern still reads as a
//! puzzle; a proper constraint-based generator is the fixed 9x9 engine's
//! territory.

use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::Outcome;
use crate::scoring::{self, AttemptState};

/// Modular N x N grid state.
#[derive(Debug, Clone)]
pub struct Sudoku {
    /// Player-visible grid.
    grid: Vec<Vec<Option<u32>>>,

    /// Reference grid.
    solution: Vec<Vec<u32>>,

    /// Cells revealed at generation time.
    given: Vec<Vec<bool>>,

    /// Side length, `3 + level`.
    size: usize,
}

impl Sudoku {
    /// Generate a grid of side `3 + level` with about half the cells given.
    pub fn generate(level: u32, rng: &mut StdRng) -> Self {
        let size: usize = 3 + level as usize;
        let mut solution: Vec<Vec<u32>> = vec![vec![0; size]; size];
        let mut grid: Vec<Vec<Option<u32>>> = vec![vec![None; size]; size];
        let mut given: Vec<Vec<bool>> = vec![vec![false; size]; size];

        for row in 0..size {
            for col in 0..size {
                solution[row][col] = ((row + col) % size) as u32 + 1;
                if rng.random_bool(0.5) {
                    grid[row][col] = Some(solution[row][col]);
                    given[row][col] = true;
                }
            }
        }

        Self {
            grid,
            solution,
            given,
            size,
        }
    }

    /// Enter a value into an open cell.
    ///
    /// Given cells, out-of-range positions, and values outside `1..=size`
    /// are ignored. A wrong value counts as a mistake but stays on the board.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u32) -> Outcome {
        if self.is_complete()
            || row >= self.size
            || col >= self.size
            || self.given[row][col]
            || value == 0
            || value > self.size as u32
        {
            return Outcome::ignored();
        }

        self.grid[row][col] = Some(value);
        if value != self.solution[row][col] {
            return Outcome::mistake();
        }
        if self.is_complete() {
            return Outcome::completed();
        }
        Outcome::applied()
    }

    /// Whether the grid matches the solution everywhere.
    pub fn is_complete(&self) -> bool {
        self.grid.iter().zip(&self.solution).all(|(row, solution_row)| {
            row.iter()
                .zip(solution_row)
                .all(|(cell, target)| *cell == Some(*target))
        })
    }

    /// Score for the session:
    /// `max(20, 100 - mistakes * 10 - elapsed_seconds / 10)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        let penalty: i64 =
            i64::from(attempts.mistakes) * 10 + (attempts.elapsed_secs() / 10) as i64;
        scoring::penalized(20, penalty)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Player-visible value of a cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<u32> {
        self.grid[row][col]
    }

    /// Whether a cell was revealed at generation time.
    pub fn is_given(&self, row: usize, col: usize) -> bool {
        self.given[row][col]
    }

    /// Reference value of a cell.
    pub fn solution_cell(&self, row: usize, col: usize) -> u32 {
        self.solution[row][col]
    }
}
