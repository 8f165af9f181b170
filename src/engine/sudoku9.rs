/*
sudoku9.rs

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

//! Classic 9x9 sudoku with a fixed, hand-picked puzzle.
//!
//! Unlike the procedural modular grid, this board is a real sudoku position
//! with a unique solution. There is exactly one puzzle; it is kept as a
//! standalone engine outside the level catalog.

use crate::engine::Outcome;
use crate::scoring::{self, AttemptState};

const SIZE: usize = 9;

/// Given cells; zero marks an empty cell.
const PUZZLE: [[u32; SIZE]; SIZE] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

const SOLUTION: [[u32; SIZE]; SIZE] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

/// Classic sudoku board state.
#[derive(Debug, Clone)]
pub struct ClassicSudoku {
    /// Player grid; zero marks an empty cell.
    grid: [[u32; SIZE]; SIZE],
}

impl Default for ClassicSudoku {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassicSudoku {
    /// Create the board with the givens filled in.
    pub fn new() -> Self {
        Self { grid: PUZZLE }
    }

    /// Enter a value into an open cell; zero clears the cell.
    ///
    /// Givens are immutable and values above 9 are ignored. Clearing a cell
    /// carries no penalty; a wrong non-zero value counts as a mistake.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u32) -> Outcome {
        if self.is_complete()
            || row >= SIZE
            || col >= SIZE
            || PUZZLE[row][col] != 0
            || value > 9
        {
            return Outcome::ignored();
        }

        self.grid[row][col] = value;
        if value != 0 && value != SOLUTION[row][col] {
            return Outcome::mistake();
        }
        if self.is_complete() {
            return Outcome::completed();
        }
        Outcome::applied()
    }

    /// Whether the grid matches the solution everywhere.
    pub fn is_complete(&self) -> bool {
        self.grid == SOLUTION
    }

    /// Score for the session: `max(0, 100 - mistakes * 10)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        scoring::penalized(0, i64::from(attempts.mistakes) * 10)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        SIZE
    }

    /// Player-visible value of a cell; zero marks an empty cell.
    pub fn cell(&self, row: usize, col: usize) -> u32 {
        self.grid[row][col]
    }

    /// Whether a cell was given.
    pub fn is_given(&self, row: usize, col: usize) -> bool {
        PUZZLE[row][col] != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;

    #[test]
    fn solution_satisfies_sudoku_constraints() {
        for i in 0..SIZE {
            let mut row_seen: [bool; SIZE + 1] = [false; SIZE + 1];
            let mut col_seen: [bool; SIZE + 1] = [false; SIZE + 1];
            for j in 0..SIZE {
                assert!(!row_seen[SOLUTION[i][j] as usize], "duplicate in row {i}");
                row_seen[SOLUTION[i][j] as usize] = true;
                assert!(!col_seen[SOLUTION[j][i] as usize], "duplicate in column {i}");
                col_seen[SOLUTION[j][i] as usize] = true;
            }
        }
        for box_row in 0..3 {
            for box_col in 0..3 {
                let mut seen: [bool; SIZE + 1] = [false; SIZE + 1];
                for i in 0..3 {
                    for j in 0..3 {
                        let value: usize = SOLUTION[box_row * 3 + i][box_col * 3 + j] as usize;
                        assert!(!seen[value], "duplicate in box ({box_row}, {box_col})");
                        seen[value] = true;
                    }
                }
            }
        }
    }

    #[test]
    fn givens_match_solution() {
        for i in 0..SIZE {
            for j in 0..SIZE {
                if PUZZLE[i][j] != 0 {
                    assert_eq!(PUZZLE[i][j], SOLUTION[i][j]);
                }
            }
        }
    }

    #[test]
    fn clearing_a_cell_is_not_a_mistake() {
        let mut board: ClassicSudoku = ClassicSudoku::new();
        assert_eq!(board.set_cell(0, 2, 7).mistakes, 1);
        let outcome: Outcome = board.set_cell(0, 2, 0);
        assert!(outcome.accepted);
        assert_eq!(outcome.mistakes, 0);
        assert_eq!(board.cell(0, 2), 0);
    }

    #[test]
    fn givens_are_immutable() {
        let mut board: ClassicSudoku = ClassicSudoku::new();
        assert!(!board.set_cell(0, 0, 1).accepted);
        assert_eq!(board.cell(0, 0), 5);
    }

    #[test]
    fn solving_the_board_completes() {
        let mut board: ClassicSudoku = ClassicSudoku::new();
        let mut last: Outcome = Outcome::ignored();
        for i in 0..SIZE {
            for j in 0..SIZE {
                if !board.is_given(i, j) {
                    last = board.set_cell(i, j, SOLUTION[i][j]);
                }
            }
        }
        assert!(board.is_complete());
        assert_eq!(last.status, Status::Completed);
        let attempts: crate::scoring::AttemptState = crate::scoring::AttemptState::new();
        assert_eq!(board.score(&attempts), 100);
    }
}
