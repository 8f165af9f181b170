/*
engine.rs

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

//! Puzzle engines and the dispatcher that routes a catalog game to one.
//!
//! Every engine is a self-contained state machine: it validates player
//! actions, reports the effect of each action as an [`Outcome`], and scores
//! the finished puzzle from the session counters. Engines never keep their
//! own counters; the session accumulates the outcome deltas.

use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use strum_macros::FromRepr;

use crate::errors::{self, EngineError};
use crate::scoring::AttemptState;

pub mod chess;
pub mod difference;
pub mod maze;
pub mod pyramid;
pub mod rebus;
pub mod riddle;
pub mod sequence;
pub mod sudoku;
pub mod sudoku9;
pub mod tangram;
pub mod tictactoe;
pub mod timed;

/// Cardinal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Puzzle status after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// The puzzle is still in progress.
    #[default]
    Playing,

    /// The player solved the puzzle.
    Completed,

    /// The player lost the puzzle.
    Lost,

    /// The puzzle ended without a winner.
    Drawn,
}

impl Status {
    /// Whether the puzzle was solved.
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }

    /// Whether the puzzle reached any terminal state.
    pub fn is_over(self) -> bool {
        self != Self::Playing
    }
}

/// Effect of a single player action.
///
/// The counter fields are deltas, not totals: the session adds them to its
/// [`AttemptState`]. A rejected action carries zero deltas and leaves the
/// puzzle untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the engine accepted the action.
    pub accepted: bool,

    /// Moves to add to the session counters.
    pub moves: u32,

    /// Attempts to add to the session counters.
    pub attempts: u32,

    /// Mistakes to add to the session counters.
    pub mistakes: u32,

    /// Puzzle status after the action.
    pub status: Status,
}

impl Outcome {
    const NOTHING: Self = Self {
        accepted: false,
        moves: 0,
        attempts: 0,
        mistakes: 0,
        status: Status::Playing,
    };

    /// The action was rejected; nothing changed.
    pub fn ignored() -> Self {
        Self::NOTHING
    }

    /// The action was applied without touching any counter.
    pub fn applied() -> Self {
        Self {
            accepted: true,
            ..Self::NOTHING
        }
    }

    /// One move was made.
    pub fn moved() -> Self {
        Self::moved_by(1)
    }

    /// Several moves were made at once.
    pub fn moved_by(moves: u32) -> Self {
        Self {
            accepted: true,
            moves,
            ..Self::NOTHING
        }
    }

    /// The action was applied but was wrong.
    pub fn mistake() -> Self {
        Self {
            accepted: true,
            mistakes: 1,
            ..Self::NOTHING
        }
    }

    /// A submitted answer was wrong: one attempt, one mistake.
    pub fn wrong_answer() -> Self {
        Self {
            accepted: true,
            attempts: 1,
            mistakes: 1,
            ..Self::NOTHING
        }
    }

    /// A submitted answer was right and solved the puzzle.
    pub fn correct_answer() -> Self {
        Self {
            accepted: true,
            attempts: 1,
            status: Status::Completed,
            ..Self::NOTHING
        }
    }

    /// The action solved the puzzle without being a move or an answer.
    pub fn completed() -> Self {
        Self {
            accepted: true,
            status: Status::Completed,
            ..Self::NOTHING
        }
    }

    /// A move that solved the puzzle.
    pub fn completed_move() -> Self {
        Self {
            accepted: true,
            moves: 1,
            status: Status::Completed,
            ..Self::NOTHING
        }
    }

    /// The action lost the puzzle, after `moves` moves were made.
    pub fn lost(moves: u32) -> Self {
        Self {
            accepted: true,
            moves,
            status: Status::Lost,
            ..Self::NOTHING
        }
    }

    /// The action ended the puzzle in a draw, after `moves` moves were made.
    pub fn drawn(moves: u32) -> Self {
        Self {
            accepted: true,
            moves,
            status: Status::Drawn,
            ..Self::NOTHING
        }
    }
}

/// The puzzle families.
///
/// The discriminants follow the catalog layout: games with identifiers
/// `1..=100` cycle through the first ten families, so family
/// `(game_id - 1) % 10` hosts the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(usize)]
pub enum GameKind {
    Sudoku,
    Chess,
    Sequence,
    Rebus,
    Pyramid,
    Tangram,
    Maze,
    Riddle,
    TicTacToe,
    Difference,
    Timed,
    ClassicSudoku,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            Self::Sudoku => "sudoku",
            Self::Chess => "chess",
            Self::Sequence => "sequence",
            Self::Rebus => "rebus",
            Self::Pyramid => "pyramid",
            Self::Tangram => "tangram",
            Self::Maze => "maze",
            Self::Riddle => "riddle",
            Self::TicTacToe => "tictactoe",
            Self::Difference => "difference",
            Self::Timed => "timed",
            Self::ClassicSudoku => "classic-sudoku",
        };
        write!(f, "{name}")
    }
}

impl GameKind {
    /// Map a catalog game identifier to its puzzle family.
    ///
    /// Identifiers `1..=100` cycle through the ten dedicated families;
    /// `101..=500` fall back to the timed challenge. Anything else is
    /// unknown.
    pub fn from_game_id(game_id: u32) -> Result<Self, EngineError> {
        match game_id {
            1..=100 => Self::from_repr((game_id as usize - 1) % 10)
                .ok_or(EngineError::UnknownGame(game_id)),
            101..=500 => Ok(Self::Timed),
            _ => Err(EngineError::UnknownGame(game_id)),
        }
    }
}

/// A player action, routed to the engine by the session.
///
/// Each engine understands a subset of the actions; the rest are rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    /// Step in a direction (maze) or nudge the selected piece (tangram).
    Move(Direction),

    /// Move a piece between two board squares (chess).
    PieceMove { from: (usize, usize), to: (usize, usize) },

    /// Claim a board cell (tic-tac-toe).
    Place { row: usize, col: usize },

    /// Enter a value into a grid cell (sudoku variants, pyramid).
    SetCell { row: usize, col: usize, value: u32 },

    /// Submit a text answer (rebus).
    AnswerText(String),

    /// Submit a numeric answer (sequence).
    AnswerNumber(i64),

    /// Choose an option by index (riddle).
    Choose(usize),

    /// Ask for the hint (rebus).
    Hint,

    /// Select a piece to manipulate (tangram).
    SelectPiece(usize),

    /// Rotate the selected piece (tangram).
    Rotate,

    /// Click the picture (spot-the-difference).
    Click { x: f32, y: f32 },

    /// Declare the puzzle done (tangram, timed challenge).
    Done,
}

/// A running puzzle engine.
///
/// Wraps the engine state machines behind one dispatch surface so the
/// session and the command line stay independent of the puzzle family.
#[derive(Debug)]
pub enum ActiveEngine {
    Sudoku(sudoku::Sudoku),
    Chess(chess::Chess),
    Sequence(sequence::Sequence),
    Rebus(rebus::Rebus),
    Pyramid(pyramid::Pyramid),
    Tangram(tangram::Tangram),
    Maze(maze::Maze),
    Riddle(riddle::Riddle),
    TicTacToe(tictactoe::TicTacToe),
    Difference(difference::Difference),
    Timed(timed::Timed),
    ClassicSudoku(sudoku9::ClassicSudoku),
}

impl ActiveEngine {
    /// Generate a puzzle of the given family and level.
    ///
    /// Deterministic families ignore the random generator.
    pub fn create(
        kind: GameKind,
        level: u32,
        rng: &mut StdRng,
    ) -> Result<Self, EngineError> {
        let level: u32 = errors::check_level(level)?;
        debug!("Creating a {kind} puzzle at level {level}");

        let engine: Self = match kind {
            GameKind::Sudoku => Self::Sudoku(sudoku::Sudoku::generate(level, rng)),
            GameKind::Chess => Self::Chess(chess::Chess::generate(level)),
            GameKind::Sequence => Self::Sequence(sequence::Sequence::generate(level, rng)),
            GameKind::Rebus => Self::Rebus(rebus::Rebus::generate(level)),
            GameKind::Pyramid => Self::Pyramid(pyramid::Pyramid::generate(level, rng)),
            GameKind::Tangram => Self::Tangram(tangram::Tangram::generate(level, rng)),
            GameKind::Maze => Self::Maze(maze::Maze::generate(level, rng)),
            GameKind::Riddle => Self::Riddle(riddle::Riddle::generate(level)),
            GameKind::TicTacToe => {
                Self::TicTacToe(tictactoe::TicTacToe::generate(level, rng))
            }
            GameKind::Difference => {
                Self::Difference(difference::Difference::generate(level, rng))
            }
            GameKind::Timed => Self::Timed(timed::Timed::generate(level)),
            GameKind::ClassicSudoku => Self::ClassicSudoku(sudoku9::ClassicSudoku::new()),
        };
        Ok(engine)
    }

    /// The puzzle family of this engine.
    pub fn kind(&self) -> GameKind {
        match self {
            Self::Sudoku(_) => GameKind::Sudoku,
            Self::Chess(_) => GameKind::Chess,
            Self::Sequence(_) => GameKind::Sequence,
            Self::Rebus(_) => GameKind::Rebus,
            Self::Pyramid(_) => GameKind::Pyramid,
            Self::Tangram(_) => GameKind::Tangram,
            Self::Maze(_) => GameKind::Maze,
            Self::Riddle(_) => GameKind::Riddle,
            Self::TicTacToe(_) => GameKind::TicTacToe,
            Self::Difference(_) => GameKind::Difference,
            Self::Timed(_) => GameKind::Timed,
            Self::ClassicSudoku(_) => GameKind::ClassicSudoku,
        }
    }

    /// Route an action to the engine.
    ///
    /// Actions the engine does not understand are rejected with zero deltas.
    pub fn apply(&mut self, action: &PlayerAction, elapsed_secs: u64) -> Outcome {
        match (self, action) {
            (Self::Maze(maze), PlayerAction::Move(direction)) => maze.step(*direction),
            (Self::Chess(chess), PlayerAction::PieceMove { from, to }) => {
                chess.try_move(*from, *to)
            }
            (Self::TicTacToe(game), PlayerAction::Place { row, col }) => {
                game.place(*row, *col)
            }
            (Self::Sudoku(sudoku), PlayerAction::SetCell { row, col, value }) => {
                sudoku.set_cell(*row, *col, *value)
            }
            (Self::ClassicSudoku(board), PlayerAction::SetCell { row, col, value }) => {
                board.set_cell(*row, *col, *value)
            }
            (Self::Pyramid(pyramid), PlayerAction::SetCell { row, col, value }) => {
                pyramid.set_cell(*row, *col, *value)
            }
            (Self::Rebus(rebus), PlayerAction::AnswerText(text)) => rebus.answer(text),
            (Self::Rebus(rebus), PlayerAction::Hint) => rebus.show_hint(),
            (Self::Sequence(sequence), PlayerAction::AnswerNumber(value)) => {
                sequence.answer(*value)
            }
            (Self::Riddle(riddle), PlayerAction::Choose(option)) => {
                riddle.choose(*option)
            }
            (Self::Tangram(tangram), PlayerAction::SelectPiece(id)) => {
                tangram.select(*id)
            }
            (Self::Tangram(tangram), PlayerAction::Rotate) => tangram.rotate(),
            (Self::Tangram(tangram), PlayerAction::Move(direction)) => {
                tangram.nudge(*direction)
            }
            (Self::Tangram(tangram), PlayerAction::Done) => tangram.finish(),
            (Self::Difference(puzzle), PlayerAction::Click { x, y }) => {
                puzzle.click(*x, *y)
            }
            (Self::Timed(timed), PlayerAction::Done) => timed.finish(elapsed_secs),
            _ => Outcome::ignored(),
        }
    }

    /// Poll the clock for engines with a time budget.
    ///
    /// Returns the outcome of the transition when the budget runs out.
    pub fn poll_clock(&mut self, elapsed_secs: u64) -> Option<Outcome> {
        match self {
            Self::Timed(timed) => timed.check_timeout(elapsed_secs),
            _ => None,
        }
    }

    /// Whether the puzzle was solved.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Sudoku(sudoku) => sudoku.is_complete(),
            Self::Chess(chess) => chess.is_complete(),
            Self::Sequence(sequence) => sequence.is_complete(),
            Self::Rebus(rebus) => rebus.is_complete(),
            Self::Pyramid(pyramid) => pyramid.is_complete(),
            Self::Tangram(tangram) => tangram.is_complete(),
            Self::Maze(maze) => maze.is_complete(),
            Self::Riddle(riddle) => riddle.is_complete(),
            Self::TicTacToe(game) => game.is_complete(),
            Self::Difference(puzzle) => puzzle.is_complete(),
            Self::Timed(timed) => timed.is_complete(),
            Self::ClassicSudoku(board) => board.is_complete(),
        }
    }

    /// Score the finished puzzle from the session counters.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        match self {
            Self::Sudoku(sudoku) => sudoku.score(attempts),
            Self::Chess(chess) => chess.score(attempts),
            Self::Sequence(sequence) => sequence.score(attempts),
            Self::Rebus(rebus) => rebus.score(attempts),
            Self::Pyramid(pyramid) => pyramid.score(attempts),
            Self::Tangram(tangram) => tangram.score(attempts),
            Self::Maze(maze) => maze.score(attempts),
            Self::Riddle(riddle) => riddle.score(attempts),
            Self::TicTacToe(game) => game.score(attempts),
            Self::Difference(puzzle) => puzzle.score(attempts),
            Self::Timed(timed) => timed.score(attempts),
            Self::ClassicSudoku(board) => board.score(attempts),
        }
    }
}
