/*
difference.rs

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

//! Spot-the-difference: click the hidden spots on a picture.
//!
//! The generator scatters `3 + level` spots; a click lands on a spot when it
//! falls within the hit box around it. Clicking an already-found spot is a
//! no-op, a miss is a mistake.

use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::Outcome;
use crate::scoring::{self, AttemptState};

/// Half-width of the square hit box around a spot.
const HIT_RADIUS: f32 = 30.0;

/// One hidden spot.
#[derive(Debug, Clone, Copy)]
pub struct Spot {
    /// Horizontal position on the picture.
    pub x: f32,

    /// Vertical position on the picture.
    pub y: f32,

    /// Whether the player found it.
    pub found: bool,
}

/// Spot-the-difference puzzle state.
#[derive(Debug, Clone)]
pub struct Difference {
    spots: Vec<Spot>,
}

impl Difference {
    /// Scatter `3 + level` spots over the picture.
    pub fn generate(level: u32, rng: &mut StdRng) -> Self {
        let count: usize = 3 + level as usize;
        let spots: Vec<Spot> = (0..count)
            .map(|_| Spot {
                x: rng.random_range(50.0..350.0),
                y: rng.random_range(50.0..350.0),
                found: false,
            })
            .collect();

        Self { spots }
    }

    /// Click the picture at the given coordinates.
    ///
    /// A click within the hit box of an unfound spot marks it found; a miss
    /// counts as a mistake. Finding the last spot completes the puzzle.
    pub fn click(&mut self, x: f32, y: f32) -> Outcome {
        if self.is_complete() {
            return Outcome::ignored();
        }

        let hit: Option<&mut Spot> = self.spots.iter_mut().find(|spot| {
            !spot.found && (spot.x - x).abs() < HIT_RADIUS && (spot.y - y).abs() < HIT_RADIUS
        });
        let Some(spot) = hit else {
            return Outcome::mistake();
        };
        spot.found = true;

        if self.is_complete() {
            Outcome::completed()
        } else {
            Outcome::applied()
        }
    }

    /// Whether every spot was found.
    pub fn is_complete(&self) -> bool {
        self.spots.iter().all(|spot| spot.found)
    }

    /// Score for the session: `max(50, 100 - mistakes * 10)`.
    pub fn score(&self, attempts: &AttemptState) -> u8 {
        scoring::penalized(50, i64::from(attempts.mistakes) * 10)
    }

    /// The spots on the picture.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Number of spots already found.
    pub fn found_count(&self) -> usize {
        self.spots.iter().filter(|spot| spot.found).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;
    use rand::SeedableRng;

    #[test]
    fn spot_count_follows_level() {
        let mut rng: StdRng = StdRng::seed_from_u64(31);
        let puzzle: Difference = Difference::generate(4, &mut rng);
        assert_eq!(puzzle.spots().len(), 7);
        for spot in puzzle.spots() {
            assert!((50.0..350.0).contains(&spot.x));
            assert!((50.0..350.0).contains(&spot.y));
        }
    }

    #[test]
    fn near_miss_outside_the_hit_box_is_a_mistake() {
        let mut rng: StdRng = StdRng::seed_from_u64(31);
        let mut puzzle: Difference = Difference::generate(0, &mut rng);
        let spot: Spot = puzzle.spots()[0];
        let outcome: Outcome = puzzle.click(spot.x + 31.0, spot.y);
        assert_eq!(outcome.mistakes, 1);
        assert_eq!(puzzle.found_count(), 0);
    }

    #[test]
    fn exact_clicks_find_every_spot() {
        let mut rng: StdRng = StdRng::seed_from_u64(31);
        let mut puzzle: Difference = Difference::generate(2, &mut rng);
        let spots: Vec<Spot> = puzzle.spots().to_vec();

        let mut last: Outcome = Outcome::ignored();
        for spot in &spots {
            last = puzzle.click(spot.x, spot.y);
            assert!(last.accepted);
            assert_eq!(last.mistakes, 0);
        }
        assert!(puzzle.is_complete());
        assert_eq!(last.status, Status::Completed);
    }

    #[test]
    fn found_spots_do_not_absorb_repeat_clicks() {
        let mut rng: StdRng = StdRng::seed_from_u64(31);
        let mut puzzle: Difference = Difference::generate(2, &mut rng);
        let spot: Spot = puzzle.spots()[0];
        assert!(puzzle.click(spot.x, spot.y).accepted);

        // The same click again misses: the spot no longer counts as a target.
        let repeat: Outcome = puzzle.click(spot.x, spot.y);
        let other_hit: bool = puzzle
            .spots()
            .iter()
            .skip(1)
            .any(|s| s.found);
        if !other_hit {
            assert_eq!(repeat.mistakes, 1);
        }
        assert!(puzzle.found_count() >= 1);
    }

    #[test]
    fn score_drops_with_misses() {
        let mut rng: StdRng = StdRng::seed_from_u64(31);
        let puzzle: Difference = Difference::generate(0, &mut rng);
        let mut attempts: AttemptState = AttemptState::new();
        attempts.record(0, 0, 3);
        assert_eq!(puzzle.score(&attempts), 70);
    }
}
