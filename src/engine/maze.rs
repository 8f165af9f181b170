/*
maze.rs

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

//! Maze puzzle: reach the exit cell in as few moves as possible.
//!
//! The maze is carved with a randomized recursive backtracker: starting from
//! the cell (1, 1), visit stride-2 neighbors in random order and open the
//! wall cell that was jumped over. The carve produces a spanning tree over
//! the odd-coordinate cells, so every carved cell is reachable from the
//! start. The exit sits at (size - 2, size - 2); when none of its orthogonal
//! neighbors was opened by the carve, one bridge cell is opened so that the
//! exit can never end up in a sealed pocket.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::engine::{Direction, Outcome};
use crate::scoring::{self, AttemptState};

/// Status of one maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Solid cell, cannot be entered.
    Wall,

    /// Open cell.
    Path,

    /// The cell the player starts on.
    Start,

    /// The exit cell.
    End,
}

/// Maze puzzle state.
#[derive(Debug, Clone)]
pub struct Maze {
    /// Square grid of cells, row major.
    grid: Vec<Vec<Cell>>,

    /// Side length of the grid.
    size: usize,

    /// Current player position (row, column).
    player: (usize, usize),

    /// Exit position (row, column).
    end: (usize, usize),

    /// Whether the player reached the exit.
    won: bool,
}

impl Maze {
    /// Generate a maze for the given level.
    ///
    /// The side length is `(level + 3) * 2`, so level 1 produces an 8x8 grid.
    pub fn generate(level: u32, rng: &mut StdRng) -> Self {
        let size: usize = ((level as usize) + 3) * 2;
        let mut grid: Vec<Vec<Cell>> = vec![vec![Cell::Wall; size]; size];

        carve(&mut grid, 1, 1, size, rng);

        grid[1][1] = Cell::Start;
        let end: (usize, usize) = (size - 2, size - 2);
        grid[end.0][end.1] = Cell::End;

        // The exit cell sits on even coordinates, outside the carved lattice.
        // Open a bridge to the carved cell above it when the carve left the
        // exit walled in on all four sides.
        let sealed: bool = [(end.0 - 1, end.1), (end.0 + 1, end.1), (end.0, end.1 - 1), (end.0, end.1 + 1)]
            .iter()
            .all(|&(r, c)| r >= size || c >= size || grid[r][c] == Cell::Wall);
        if sealed {
            debug!("Exit at {end:?} is sealed, opening bridge at ({}, {})", end.0 - 1, end.1);
            grid[end.0 - 1][end.1] = Cell::Path;
        }

        Self {
            grid,
            size,
            player: (1, 1),
            end,
            won: false,
        }
    }

    /// Move the player one cell in the given direction.
    ///
    /// Moves into a wall or out of the grid are silently ignored.
    pub fn step(&mut self, direction: Direction) -> Outcome {
        if self.won {
            return Outcome::ignored();
        }

        let (row, col) = self.player;
        let target: Option<(usize, usize)> = match direction {
            Direction::Up => row.checked_sub(1).map(|r| (r, col)),
            Direction::Down => Some((row + 1, col)),
            Direction::Left => col.checked_sub(1).map(|c| (row, c)),
            Direction::Right => Some((row, col + 1)),
        };

        let Some((new_row, new_col)) = target else {
            return Outcome::ignored();
        };
        if new_row >= self.size || new_col >= self.size || self.grid[new_row][new_col] == Cell::Wall
        {
            return Outcome::ignored();
        }

        self.player = (new_row, new_col);
        if self.player == self.end {
            self.won = true;
            debug!("Exit reached at {:?}", self.end);
            return Outcome::completed_move();
        }
        Outcome::moved()
    }

    /// Whether the player reached the exit.
    pub fn is_complete(&self) -> bool {
        self.won
    }

    /// Score for the session: `max(50, 100 - moves * 2)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        scoring::penalized(50, i64::from(attempts.moves) * 2)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at the given position.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// Current player position.
    pub fn player(&self) -> (usize, usize) {
        self.player
    }

    /// Exit position.
    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// Start position.
    pub fn start(&self) -> (usize, usize) {
        (1, 1)
    }
}

/// Recursively carve open cells from the given position.
fn carve(grid: &mut [Vec<Cell>], row: usize, col: usize, size: usize, rng: &mut StdRng) {
    grid[row][col] = Cell::Path;

    let mut directions: [(isize, isize); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];
    directions.shuffle(rng);

    for (dr, dc) in directions {
        let new_row: isize = row as isize + dr;
        let new_col: isize = col as isize + dc;
        if new_row < 0 || new_row >= size as isize || new_col < 0 || new_col >= size as isize {
            continue;
        }
        let (new_row, new_col) = (new_row as usize, new_col as usize);
        if grid[new_row][new_col] == Cell::Wall {
            // Open the wall cell between the two lattice cells.
            let mid_row: usize = (row + new_row) / 2;
            let mid_col: usize = (col + new_col) / 2;
            grid[mid_row][mid_col] = Cell::Path;
            carve(grid, new_row, new_col, size, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    fn reachable(maze: &Maze) -> bool {
        let size: usize = maze.size();
        let mut seen: Vec<Vec<bool>> = vec![vec![false; size]; size];
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        queue.push_back(maze.start());
        seen[1][1] = true;

        while let Some((row, col)) = queue.pop_front() {
            if (row, col) == maze.end() {
                return true;
            }
            let neighbors: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
            for (dr, dc) in neighbors {
                let r: isize = row as isize + dr;
                let c: isize = col as isize + dc;
                if r < 0 || c < 0 || r >= size as isize || c >= size as isize {
                    continue;
                }
                let (r, c) = (r as usize, c as usize);
                if !seen[r][c] && maze.cell(r, c) != Cell::Wall {
                    seen[r][c] = true;
                    queue.push_back((r, c));
                }
            }
        }
        false
    }

    #[test]
    fn size_follows_level() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        assert_eq!(Maze::generate(1, &mut rng).size(), 8);
        assert_eq!(Maze::generate(4, &mut rng).size(), 14);
    }

    #[test]
    fn exit_reachable_for_all_levels() {
        for level in 1..=10 {
            for seed in 0..20 {
                let mut rng: StdRng = StdRng::seed_from_u64(seed * 31 + u64::from(level));
                let maze: Maze = Maze::generate(level, &mut rng);
                assert!(reachable(&maze), "level {level} seed {seed} has no path to exit");
            }
        }
    }

    #[test]
    fn wall_moves_are_ignored() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let mut maze: Maze = Maze::generate(1, &mut rng);
        // (0, 1) is on the outer wall ring.
        let outcome: Outcome = maze.step(Direction::Up);
        assert!(!outcome.accepted);
        assert_eq!(maze.player(), (1, 1));
    }

    #[test]
    fn walking_the_solution_completes() {
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let mut maze: Maze = Maze::generate(1, &mut rng);

        // Drive the player along a BFS path to the exit.
        let size: usize = maze.size();
        let mut previous: Vec<Vec<Option<(usize, usize)>>> = vec![vec![None; size]; size];
        let mut seen: Vec<Vec<bool>> = vec![vec![false; size]; size];
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        queue.push_back(maze.start());
        seen[1][1] = true;
        while let Some((row, col)) = queue.pop_front() {
            for (dr, dc) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
                let r: isize = row as isize + dr;
                let c: isize = col as isize + dc;
                if r < 0 || c < 0 || r >= size as isize || c >= size as isize {
                    continue;
                }
                let (r, c) = (r as usize, c as usize);
                if !seen[r][c] && maze.cell(r, c) != Cell::Wall {
                    seen[r][c] = true;
                    previous[r][c] = Some((row, col));
                    queue.push_back((r, c));
                }
            }
        }

        let mut path: Vec<(usize, usize)> = vec![maze.end()];
        while let Some(p) = previous[path.last().unwrap().0][path.last().unwrap().1] {
            path.push(p);
        }
        path.reverse();

        let mut last: Outcome = Outcome::ignored();
        for window in path.windows(2) {
            let (from, to) = (window[0], window[1]);
            let direction: Direction = if to.0 + 1 == from.0 {
                Direction::Up
            } else if from.0 + 1 == to.0 {
                Direction::Down
            } else if to.1 + 1 == from.1 {
                Direction::Left
            } else {
                Direction::Right
            };
            last = maze.step(direction);
        }
        assert!(maze.is_complete());
        assert!(last.status.is_completed());
    }
}
