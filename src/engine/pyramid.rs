/*
pyramid.rs

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

//! Number pyramid: every cell is the sum of the two cells supporting it.
//!
//! Generation fills the base row with random digits and derives the rest
//! bottom-up. The apex is always hidden; the other derived cells are hidden
//! with probability one half; the base row is always given. Wrong values are
//! counted as mistakes but stay on the board until overwritten.

use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::Outcome;
use crate::scoring::{self, AttemptState};

/// Number pyramid state.
#[derive(Debug, Clone)]
pub struct Pyramid {
    /// Player-visible grid; row `r` has `r + 1` cells, row 0 is the apex.
    grid: Vec<Vec<Option<u32>>>,

    /// Fully derived reference grid.
    solution: Vec<Vec<u32>>,

    /// Cells given at generation time, which the player cannot change.
    given: Vec<Vec<bool>>,

    /// Number of rows.
    rows: usize,
}

impl Pyramid {
    /// Generate a pyramid with `3 + level` rows.
    pub fn generate(level: u32, rng: &mut StdRng) -> Self {
        let rows: usize = 3 + level as usize;
        let mut solution: Vec<Vec<u32>> = (0..rows).map(|r| vec![0; r + 1]).collect();
        let mut grid: Vec<Vec<Option<u32>>> = (0..rows).map(|r| vec![None; r + 1]).collect();
        let mut given: Vec<Vec<bool>> = (0..rows).map(|r| vec![false; r + 1]).collect();

        // Base row: random digits 1 to 9.
        for col in 0..rows {
            let value: u32 = rng.random_range(1..=9);
            solution[rows - 1][col] = value;
            grid[rows - 1][col] = Some(value);
            given[rows - 1][col] = true;
        }

        // Derive upward, masking the apex and about half of the rest.
        for row in (0..rows - 1).rev() {
            for col in 0..=row {
                solution[row][col] = solution[row + 1][col] + solution[row + 1][col + 1];
                if row != 0 && rng.random_bool(0.5) {
                    grid[row][col] = Some(solution[row][col]);
                    given[row][col] = true;
                }
            }
        }

        Self {
            grid,
            solution,
            given,
            rows,
        }
    }

    /// Build a pyramid from a fixed base row, hiding every derived cell.
    ///
    /// Useful for scripted puzzles and demos; `generate` is the usual entry
    /// point.
    pub fn from_base(base: &[u32]) -> Self {
        let rows: usize = base.len();
        let mut solution: Vec<Vec<u32>> = (0..rows).map(|r| vec![0; r + 1]).collect();
        let mut grid: Vec<Vec<Option<u32>>> = (0..rows).map(|r| vec![None; r + 1]).collect();
        let mut given: Vec<Vec<bool>> = (0..rows).map(|r| vec![false; r + 1]).collect();

        for (col, value) in base.iter().enumerate() {
            solution[rows - 1][col] = *value;
            grid[rows - 1][col] = Some(*value);
            given[rows - 1][col] = true;
        }
        for row in (0..rows - 1).rev() {
            for col in 0..=row {
                solution[row][col] = solution[row + 1][col] + solution[row + 1][col + 1];
            }
        }

        Self {
            grid,
            solution,
            given,
            rows,
        }
    }

    /// Fill a hidden cell with a value.
    ///
    /// Given cells are immutable and out-of-range positions are ignored. A
    /// wrong value counts as a mistake but is kept on the board.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u32) -> Outcome {
        if self.is_complete() || row >= self.rows || col > row || self.given[row][col] {
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

    /// Score for the session: `max(50, 100 - mistakes * 10)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        scoring::penalized(50, i64::from(attempts.mistakes) * 10)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Player-visible value of a cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<u32> {
        self.grid[row][col]
    }

    /// Whether a cell was given at generation time.
    pub fn is_given(&self, row: usize, col: usize) -> bool {
        self.given[row][col]
    }

    /// Reference value of a cell.
    pub fn solution_cell(&self, row: usize, col: usize) -> u32 {
        self.solution[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;
    use rand::SeedableRng;

    #[test]
    fn every_cell_is_the_sum_of_its_supports() {
        for level in 0..=10 {
            let mut rng: StdRng = StdRng::seed_from_u64(1000 + u64::from(level));
            let pyramid: Pyramid = Pyramid::generate(level, &mut rng);
            for row in 0..pyramid.rows() - 1 {
                for col in 0..=row {
                    assert_eq!(
                        pyramid.solution_cell(row, col),
                        pyramid.solution_cell(row + 1, col) + pyramid.solution_cell(row + 1, col + 1),
                        "level {level} cell ({row}, {col})"
                    );
                }
            }
        }
    }

    #[test]
    fn apex_hidden_base_given() {
        for seed in 0..10 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let pyramid: Pyramid = Pyramid::generate(2, &mut rng);
            assert!(pyramid.cell(0, 0).is_none());
            let base: usize = pyramid.rows() - 1;
            for col in 0..pyramid.rows() {
                assert!(pyramid.is_given(base, col));
            }
        }
    }

    #[test]
    fn filling_all_cells_completes_with_no_mistakes() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let mut pyramid: Pyramid = Pyramid::generate(0, &mut rng);

        let mut last: Outcome = Outcome::ignored();
        for row in 0..pyramid.rows() {
            for col in 0..=row {
                if !pyramid.is_given(row, col) {
                    let value: u32 = pyramid.solution_cell(row, col);
                    last = pyramid.set_cell(row, col, value);
                    assert_eq!(last.mistakes, 0);
                }
            }
        }
        assert!(pyramid.is_complete());
        assert_eq!(last.status, Status::Completed);
    }

    #[test]
    fn wrong_value_counts_mistake_but_does_not_block() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let mut pyramid: Pyramid = Pyramid::generate(0, &mut rng);
        let target: u32 = pyramid.solution_cell(0, 0);

        let outcome: Outcome = pyramid.set_cell(0, 0, target + 1);
        assert!(outcome.accepted);
        assert_eq!(outcome.mistakes, 1);
        assert_eq!(pyramid.cell(0, 0), Some(target + 1));

        // The wrong value can be overwritten.
        let outcome: Outcome = pyramid.set_cell(0, 0, target);
        assert_eq!(outcome.mistakes, 0);
        assert_eq!(pyramid.cell(0, 0), Some(target));
    }

    #[test]
    fn given_cells_are_immutable() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let mut pyramid: Pyramid = Pyramid::generate(0, &mut rng);
        let base: usize = pyramid.rows() - 1;
        let outcome: Outcome = pyramid.set_cell(base, 0, 42);
        assert!(!outcome.accepted);
    }
}
