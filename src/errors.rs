/*
errors.rs

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

//! Errors raised by the puzzle engines.
//!
//! The engines have no fatal runtime conditions: illegal moves are silent
//! no-ops and wrong answers are counted as mistakes. The only reportable
//! failure is a generation parameter outside the supported range.

use std::error::Error;
use std::fmt;

/// Highest level the generators accept.
///
/// The game catalog produces levels 1 to 10. Level 0 is also accepted
/// because every scale formula is well defined there.
pub const MAX_LEVEL: u32 = 10;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The requested level is outside the supported range.
    InvalidLevel(u32),

    /// The game identifier does not map to any engine.
    UnknownGame(u32),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::InvalidLevel(level) => {
                write!(f, "level {level} is out of range (0 to {MAX_LEVEL})")
            }
            EngineError::UnknownGame(id) => write!(f, "no engine for game id {id}"),
        }
    }
}

impl Error for EngineError {}

/// Verify that a level is within the supported range.
pub fn check_level(level: u32) -> Result<u32, EngineError> {
    if level > MAX_LEVEL {
        Err(EngineError::InvalidLevel(level))
    } else {
        Ok(level)
    }
}
