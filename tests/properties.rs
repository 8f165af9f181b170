/*
properties.rs

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

//! Cross-engine properties, checked through the public crate surface.

use std::cell::Cell as StdCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use puzzlebox::engine::maze::{Cell, Maze};
use puzzlebox::engine::pyramid::Pyramid;
use puzzlebox::engine::sequence::Sequence;
use puzzlebox::engine::{GameKind, Outcome, PlayerAction, Status};
use puzzlebox::scoring::{self, AttemptState, MAX_SCORE};
use puzzlebox::session::Session;

/// Breadth-first search from the start cell over open cells.
fn end_is_reachable(maze: &Maze) -> bool {
    let size: usize = maze.size();
    let mut seen: Vec<Vec<bool>> = vec![vec![false; size]; size];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    queue.push_back(maze.start());
    seen[maze.start().0][maze.start().1] = true;

    while let Some((row, col)) = queue.pop_front() {
        if (row, col) == maze.end() {
            return true;
        }
        let neighbors: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        for (dr, dc) in neighbors {
            let (nr, nc) = (row as isize + dr, col as isize + dc);
            if nr < 0 || nc < 0 || nr as usize >= size || nc as usize >= size {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if seen[nr][nc] || maze.cell(nr, nc) == Cell::Wall {
                continue;
            }
            seen[nr][nc] = true;
            queue.push_back((nr, nc));
        }
    }
    false
}

#[test]
fn maze_end_is_always_reachable_at_level_one() {
    for seed in 0..100 {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let maze: Maze = Maze::generate(1, &mut rng);
        assert!(end_is_reachable(&maze), "unreachable end for seed {seed}");
    }
}

#[test]
fn maze_end_is_always_reachable_at_every_level() {
    for level in 1..=10 {
        for seed in 0..10 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed * 31 + u64::from(level));
            let maze: Maze = Maze::generate(level, &mut rng);
            assert!(
                end_is_reachable(&maze),
                "unreachable end for level {level}, seed {seed}"
            );
        }
    }
}

#[test]
fn scores_stay_within_bounds() {
    for penalty in [-50_i64, 0, 1, 37, 100, 10_000] {
        for floor in [0_u8, 20, 40, 50] {
            let score: u8 = scoring::penalized(floor, penalty);
            assert!(score >= floor.min(MAX_SCORE));
            assert!(score <= MAX_SCORE);
        }
    }
}

#[test]
fn scores_never_increase_with_penalty() {
    let mut previous: u8 = MAX_SCORE;
    for penalty in 0..200 {
        let score: u8 = scoring::penalized(50, penalty);
        assert!(score <= previous);
        previous = score;
    }
}

#[test]
fn pyramid_worked_example() {
    // Base [2, 3, 4] derives [5, 7] and apex [12].
    let mut pyramid: Pyramid = Pyramid::from_base(&[2, 3, 4]);
    assert_eq!(pyramid.solution_cell(1, 0), 5);
    assert_eq!(pyramid.solution_cell(1, 1), 7);
    assert_eq!(pyramid.solution_cell(0, 0), 12);

    pyramid.set_cell(1, 0, 5);
    pyramid.set_cell(1, 1, 7);
    let outcome: Outcome = pyramid.set_cell(0, 0, 12);
    assert_eq!(outcome.status, Status::Completed);

    let attempts: AttemptState = AttemptState::new();
    assert_eq!(pyramid.score(&attempts), 100);
}

#[test]
fn sequence_worked_example() {
    // Level 2, start 3: terms [3, 7, 11, 15, 19], answer 23.
    let mut sequence: Sequence = Sequence::from_start(3, 2);
    assert_eq!(sequence.terms(), &[3, 7, 11, 15, 19]);

    assert_eq!(sequence.answer(20).status, Status::Playing);
    assert_eq!(sequence.answer(23).status, Status::Completed);

    let mut attempts: AttemptState = AttemptState::new();
    attempts.record(0, 2, 1);
    assert_eq!(sequence.score(&attempts), 60);
}

#[test]
fn game_ids_route_to_the_right_engines() {
    let expected: [GameKind; 10] = [
        GameKind::Sudoku,
        GameKind::Chess,
        GameKind::Sequence,
        GameKind::Rebus,
        GameKind::Pyramid,
        GameKind::Tangram,
        GameKind::Maze,
        GameKind::Riddle,
        GameKind::TicTacToe,
        GameKind::Difference,
    ];
    for block in 0..10u32 {
        for (offset, kind) in expected.iter().enumerate() {
            let game_id: u32 = block * 10 + offset as u32 + 1;
            assert_eq!(GameKind::from_game_id(game_id).unwrap(), *kind);
        }
    }
    assert_eq!(GameKind::from_game_id(250).unwrap(), GameKind::Timed);
}

#[test]
fn session_walks_a_maze_to_completion() {
    // Game 7 is the maze. Drive the player along a path found by search.
    let mut session: Session = Session::new(7, 1, Some(99)).expect("cannot start");
    let path: Vec<puzzlebox::engine::Direction> = {
        let puzzlebox::engine::ActiveEngine::Maze(maze) = session.engine() else {
            panic!("expected a maze engine");
        };
        solve_maze(maze)
    };

    let completed: Rc<StdCell<Option<u8>>> = Rc::new(StdCell::new(None));
    let out: Rc<StdCell<Option<u8>>> = Rc::clone(&completed);
    session = session.on_complete(Box::new(move |score| out.set(Some(score))));

    for direction in path {
        session.act(&PlayerAction::Move(direction));
    }
    assert_eq!(session.status(), Status::Completed);

    let score: u8 = completed.get().expect("no completion announced");
    assert!((50..=MAX_SCORE).contains(&score));
}

/// Directions of a shortest start-to-end walk, from a breadth-first search.
fn solve_maze(maze: &Maze) -> Vec<puzzlebox::engine::Direction> {
    use puzzlebox::engine::Direction;

    let size: usize = maze.size();
    let mut previous: Vec<Vec<Option<(usize, usize)>>> = vec![vec![None; size]; size];
    let mut seen: Vec<Vec<bool>> = vec![vec![false; size]; size];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    queue.push_back(maze.start());
    seen[maze.start().0][maze.start().1] = true;

    while let Some((row, col)) = queue.pop_front() {
        if (row, col) == maze.end() {
            break;
        }
        for (dr, dc) in [(-1_isize, 0_isize), (1, 0), (0, -1), (0, 1)] {
            let (nr, nc) = (row as isize + dr, col as isize + dc);
            if nr < 0 || nc < 0 || nr as usize >= size || nc as usize >= size {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if seen[nr][nc] || maze.cell(nr, nc) == Cell::Wall {
                continue;
            }
            seen[nr][nc] = true;
            previous[nr][nc] = Some((row, col));
            queue.push_back((nr, nc));
        }
    }

    let mut steps: Vec<Direction> = Vec::new();
    let mut cursor: (usize, usize) = maze.end();
    while cursor != maze.start() {
        let from: (usize, usize) = previous[cursor.0][cursor.1].expect("end not reached");
        let direction: Direction = if cursor.0 + 1 == from.0 {
            Direction::Up
        } else if cursor.0 == from.0 + 1 {
            Direction::Down
        } else if cursor.1 + 1 == from.1 {
            Direction::Left
        } else {
            Direction::Right
        };
        steps.push(direction);
        cursor = from;
    }
    steps.reverse();
    steps
}
