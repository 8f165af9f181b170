/*
tangram.rs

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

//! Tangram-style arrangement: move and rotate scattered pieces.
//!
//! This is an open-ended puzzle: there is no reference layout to match, the
//! player arranges the pieces and signals done. Only the move count feeds
//! the score.

use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::{Direction, Outcome};
use crate::scoring::{self, AttemptState};

/// Play area width.
const AREA_WIDTH: f32 = 400.0;

/// Play area height.
const AREA_HEIGHT: f32 = 300.0;

/// Distance of one nudge.
const STEP: f32 = 20.0;

/// Piece shapes, cycled over the piece list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Triangle,
    Square,
    Parallelogram,
}

const SHAPES: [Shape; 3] = [Shape::Triangle, Shape::Square, Shape::Parallelogram];

/// One movable piece.
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    /// Piece identifier, also its index.
    pub id: usize,

    /// Horizontal position in the play area.
    pub x: f32,

    /// Vertical position in the play area.
    pub y: f32,

    /// Rotation in degrees, a multiple of 90.
    pub rotation: u16,

    /// Piece shape.
    pub shape: Shape,
}

/// Tangram puzzle state.
#[derive(Debug, Clone)]
pub struct Tangram {
    pieces: Vec<Piece>,
    selected: Option<usize>,
    done: bool,
}

impl Tangram {
    /// Scatter `4 + level` pieces at random positions and rotations.
    pub fn generate(level: u32, rng: &mut StdRng) -> Self {
        let count: usize = 4 + level as usize;
        let pieces: Vec<Piece> = (0..count)
            .map(|id| Piece {
                id,
                x: rng.random_range(0.0..300.0),
                y: rng.random_range(0.0..200.0),
                rotation: rng.random_range(0..4) * 90,
                shape: SHAPES[id % SHAPES.len()],
            })
            .collect();

        Self {
            pieces,
            selected: None,
            done: false,
        }
    }

    /// Select a piece to manipulate. Selection is free and not a move.
    pub fn select(&mut self, id: usize) -> Outcome {
        if self.done || id >= self.pieces.len() {
            return Outcome::ignored();
        }
        self.selected = Some(id);
        Outcome::applied()
    }

    /// Rotate the selected piece a quarter turn.
    pub fn rotate(&mut self) -> Outcome {
        if self.done {
            return Outcome::ignored();
        }
        let Some(id) = self.selected else {
            return Outcome::ignored();
        };
        self.pieces[id].rotation = (self.pieces[id].rotation + 90) % 360;
        Outcome::moved()
    }

    /// Nudge the selected piece, clamped to the play area.
    pub fn nudge(&mut self, direction: Direction) -> Outcome {
        if self.done {
            return Outcome::ignored();
        }
        let Some(id) = self.selected else {
            return Outcome::ignored();
        };
        let piece: &mut Piece = &mut self.pieces[id];
        match direction {
            Direction::Up => piece.y = (piece.y - STEP).max(0.0),
            Direction::Down => piece.y = (piece.y + STEP).min(AREA_HEIGHT),
            Direction::Left => piece.x = (piece.x - STEP).max(0.0),
            Direction::Right => piece.x = (piece.x + STEP).min(AREA_WIDTH),
        }
        Outcome::moved()
    }

    /// The player declares the arrangement finished.
    pub fn finish(&mut self) -> Outcome {
        if self.done {
            return Outcome::ignored();
        }
        self.done = true;
        Outcome::completed()
    }

    /// Whether the player declared the arrangement finished.
    pub fn is_complete(&self) -> bool {
        self.done
    }

    /// Score for the session: `max(50, 100 - moves / 5)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        scoring::penalized(50, i64::from(attempts.moves) / 5)
    }

    /// The pieces on the board.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;
    use rand::SeedableRng;

    #[test]
    fn piece_count_follows_level() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let tangram: Tangram = Tangram::generate(3, &mut rng);
        assert_eq!(tangram.pieces().len(), 7);
        for piece in tangram.pieces() {
            assert_eq!(piece.rotation % 90, 0);
        }
    }

    #[test]
    fn manipulation_requires_selection() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let mut tangram: Tangram = Tangram::generate(0, &mut rng);
        assert!(!tangram.rotate().accepted);
        assert!(!tangram.nudge(Direction::Left).accepted);

        assert!(tangram.select(0).accepted);
        assert!(tangram.rotate().accepted);
        assert!(tangram.nudge(Direction::Left).accepted);
    }

    #[test]
    fn nudges_stay_in_the_play_area() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let mut tangram: Tangram = Tangram::generate(0, &mut rng);
        tangram.select(0);
        for _ in 0..50 {
            tangram.nudge(Direction::Left);
            tangram.nudge(Direction::Up);
        }
        let piece: Piece = tangram.pieces()[0];
        assert_eq!(piece.x, 0.0);
        assert_eq!(piece.y, 0.0);
    }

    #[test]
    fn finishing_completes_once() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let mut tangram: Tangram = Tangram::generate(0, &mut rng);
        let outcome: Outcome = tangram.finish();
        assert_eq!(outcome.status, Status::Completed);
        assert!(tangram.is_complete());
        assert!(!tangram.finish().accepted);
    }

    #[test]
    fn score_decays_slowly_with_moves() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let tangram: Tangram = Tangram::generate(0, &mut rng);
        let mut attempts: AttemptState = AttemptState::new();
        attempts.record(24, 0, 0);
        assert_eq!(tangram.score(&attempts), 96);
    }
}
