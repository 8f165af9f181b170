/*
chess.rs

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

//! Simplified chess: the game ends when a king is captured.
//!
//! Piece movement follows the standard rules (sliders need a clear path,
//! knights jump, pawns capture diagonally), but there is no check, checkmate,
//! castling, en passant, or promotion. This is "capture the king", not real
//! chess; the simplification is intentional for a children's game.
//!
//! Row 0 is the black back rank and row 7 the white back rank, so white pawns
//! move toward smaller row numbers.

use log::debug;

use crate::engine::Outcome;
use crate::scoring::{self, AttemptState};

/// Piece color and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// One piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

/// Board position as (row, column), both in 0..8.
pub type Square = (usize, usize);

const BOARD_SIZE: usize = 8;

/// Back-rank piece order for the full standard setup.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Chess board state.
#[derive(Debug, Clone)]
pub struct Chess {
    /// 8x8 grid, row major; row 0 is the black back rank.
    board: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],

    /// Side to move.
    turn: Color,

    /// Side that captured the opposing king, if any.
    winner: Option<Color>,
}

impl Chess {
    /// Set up a board for the given level.
    ///
    /// Levels 2 and below play kings plus a white queen; levels 3 to 5 add a
    /// white rook; level 6 and above use the full standard starting position.
    pub fn generate(level: u32) -> Self {
        let mut board: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] = [[None; BOARD_SIZE]; BOARD_SIZE];

        if level >= 6 {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board[0][col] = Some(Piece { kind: *kind, color: Color::Black });
                board[7][col] = Some(Piece { kind: *kind, color: Color::White });
                board[1][col] = Some(Piece { kind: PieceKind::Pawn, color: Color::Black });
                board[6][col] = Some(Piece { kind: PieceKind::Pawn, color: Color::White });
            }
        } else {
            board[0][4] = Some(Piece { kind: PieceKind::King, color: Color::Black });
            board[7][4] = Some(Piece { kind: PieceKind::King, color: Color::White });
            board[7][3] = Some(Piece { kind: PieceKind::Queen, color: Color::White });
            if level >= 3 {
                board[7][0] = Some(Piece { kind: PieceKind::Rook, color: Color::White });
            }
        }

        Self {
            board,
            turn: Color::White,
            winner: None,
        }
    }

    /// Attempt to move a piece of the side to move.
    ///
    /// Illegal moves (no piece, wrong color, blocked path, own piece on the
    /// destination) are silently ignored. A legal move toggles the side to
    /// move; capturing the opposing king ends the game.
    pub fn try_move(&mut self, from: Square, to: Square) -> Outcome {
        if self.winner.is_some() || !in_bounds(from) || !in_bounds(to) || from == to {
            return Outcome::ignored();
        }
        let Some(piece) = self.board[from.0][from.1] else {
            return Outcome::ignored();
        };
        if piece.color != self.turn {
            return Outcome::ignored();
        }
        if let Some(destination) = self.board[to.0][to.1]
            && destination.color == piece.color
        {
            return Outcome::ignored();
        }
        if !self.is_legal(piece, from, to) {
            return Outcome::ignored();
        }

        let captured: Option<Piece> = self.board[to.0][to.1];
        self.board[to.0][to.1] = Some(piece);
        self.board[from.0][from.1] = None;

        if let Some(victim) = captured
            && victim.kind == PieceKind::King
        {
            self.winner = Some(self.turn);
            debug!("{:?} captured the {:?} king", self.turn, victim.color);
            return Outcome::completed_move();
        }
        self.turn = self.turn.opponent();
        Outcome::moved()
    }

    /// Whether a king was captured.
    pub fn is_complete(&self) -> bool {
        self.winner.is_some()
    }

    /// Score for the session: `max(50, 100 - moves * 5)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        scoring::penalized(50, i64::from(attempts.moves) * 5)
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Side that captured the opposing king, if the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Piece at the given square.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.0][square.1]
    }

    /// Movement rule for one piece, destination occupancy already vetted.
    fn is_legal(&self, piece: Piece, from: Square, to: Square) -> bool {
        let dr: isize = to.0 as isize - from.0 as isize;
        let dc: isize = to.1 as isize - from.1 as isize;

        match piece.kind {
            PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
            PieceKind::Queen => {
                (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && self.path_clear(from, to)
            }
            PieceKind::Rook => (dr == 0 || dc == 0) && self.path_clear(from, to),
            PieceKind::Bishop => dr.abs() == dc.abs() && self.path_clear(from, to),
            PieceKind::Knight => {
                (dr.abs() == 2 && dc.abs() == 1) || (dr.abs() == 1 && dc.abs() == 2)
            }
            PieceKind::Pawn => self.is_legal_pawn(piece.color, from, to, dr, dc),
        }
    }

    /// Pawn movement: one step forward, two from the start row, and diagonal
    /// capture only.
    fn is_legal_pawn(&self, color: Color, from: Square, to: Square, dr: isize, dc: isize) -> bool {
        let forward: isize = match color {
            Color::White => -1,
            Color::Black => 1,
        };
        let start_row: usize = match color {
            Color::White => 6,
            Color::Black => 1,
        };
        let destination: Option<Piece> = self.board[to.0][to.1];

        if dc == 0 {
            if destination.is_some() {
                return false;
            }
            if dr == forward {
                return true;
            }
            // Two steps from the start row, both cells free.
            dr == 2 * forward
                && from.0 == start_row
                && self.board[(from.0 as isize + forward) as usize][from.1].is_none()
        } else {
            dc.abs() == 1 && dr == forward && destination.is_some()
        }
    }

    /// Whether all cells strictly between the two squares are empty.
    fn path_clear(&self, from: Square, to: Square) -> bool {
        let dr: isize = (to.0 as isize - from.0 as isize).signum();
        let dc: isize = (to.1 as isize - from.1 as isize).signum();
        let mut row: isize = from.0 as isize + dr;
        let mut col: isize = from.1 as isize + dc;

        while (row, col) != (to.0 as isize, to.1 as isize) {
            if self.board[row as usize][col as usize].is_some() {
                return false;
            }
            row += dr;
            col += dc;
        }
        true
    }
}

/// Whether a square is on the board.
fn in_bounds(square: Square) -> bool {
    square.0 < BOARD_SIZE && square.1 < BOARD_SIZE
}
