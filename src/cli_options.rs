/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers working on the puzzle engines.
//! The tool lists the game catalog and generates puzzles for inspection.
//!
//! # Examples
//!
//! List the catalog:
//!
//! ```text
//! $ puzzlebox --ls
//!   1 Sudoku (level 1, easy): Sudoku 4x4
//!   2 Chess Puzzles (level 1, easy): Capture the king, setup 1
//!   ...
//! ```
//!
//! Generate the maze of game 7 at level 4 with a fixed seed:
//!
//! ```text
//! $ puzzlebox -g 7 -l 4 -s 42
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;

use crate::catalog;
use crate::engine::{ActiveEngine, GameKind};

/// Inspect the game catalog and generate puzzles for developers.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the games
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Identifier of the game to generate a puzzle for
    #[arg(short, long, group = "generate")]
    game: Option<u32>,

    /// Puzzle level, defaults to the game's catalog level
    #[arg(short, long, requires = "generate")]
    level: Option<u32>,

    /// Seed for reproducible generation
    #[arg(short, long, requires = "generate")]
    seed: Option<u64>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the games
    //
    if args.ls {
        for category in catalog::categories() {
            println!("{} ({})", category.name, category.id);
            for game in &category.games {
                println!(
                    "  {:3} {} (level {}, {}): {}",
                    game.id, game.name, game.level, game.difficulty, game.description
                );
            }
        }
        return 0;
    }

    let Some(game_id) = args.game else {
        eprintln!("Nothing to do. Use --ls to list the games or --game to generate a puzzle.");
        return 1;
    };

    //
    // Generate the requested puzzle and dump its internal representation
    //
    let Some(descriptor) = catalog::find_game(game_id) else {
        eprintln!("Unknown game {game_id}. Use --ls to list the games.");
        return 1;
    };
    let level: u32 = args.level.unwrap_or(descriptor.level);

    let kind: GameKind = match GameKind::from_game_id(game_id) {
        Ok(kind) => kind,
        Err(error) => {
            eprintln!("Error: {error}");
            return 1;
        }
    };
    debug!("Game {game_id} ({}) maps to the {kind} engine", descriptor.name);

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    match ActiveEngine::create(kind, level, &mut rng) {
        Ok(engine) => {
            println!("{} (game {game_id}, level {level})", descriptor.name);
            println!("{engine:#?}");
            0
        }
        Err(error) => {
            eprintln!("Error: {error}");
            1
        }
    }
}
