/*
catalog.rs

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

//! The game catalog: 500 games across five categories.
//!
//! Each category holds ten game templates cycled over 100 identifiers; every
//! tenth game is the same template one level harder. The catalog only
//! produces descriptors: engines consume the `level` field, and unlock
//! progression is the frontend's business.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of games in one category block.
const BLOCK_SIZE: u32 = 100;

/// Number of templates cycled within a block.
const TEMPLATES_PER_BLOCK: u32 = 10;

/// Game difficulty shown in the catalog.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Difficulty for a catalog level (1 through 10).
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=4 => Self::Easy,
            5..=7 => Self::Medium,
            _ => Self::Hard,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// One catalog entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameDescriptor {
    /// Game identifier, 1 through 500.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Level-specific description.
    pub description: String,

    /// Catalog difficulty.
    pub difficulty: Difficulty,

    /// Icon name for the frontend.
    pub icon: String,

    /// Puzzle level, 1 through 10. This is what the engines consume.
    pub level: u32,

    /// Whether the game is reachable. Only the first game of each category
    /// starts unlocked; progression itself lives outside the library.
    pub unlocked: bool,

    /// Whether the game was completed.
    pub completed: bool,

    /// Recorded score, if any.
    pub score: Option<u8>,
}

/// Blueprint for ten games of increasing level.
struct GameTemplate {
    name: &'static str,
    icon: &'static str,
    describe: fn(u32) -> String,
}

/// One of the five catalog categories.
#[derive(Serialize, Debug, Clone)]
pub struct Category {
    /// Stable category identifier.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Icon name for the frontend.
    pub icon: &'static str,

    /// The 100 games of the category.
    pub games: Vec<GameDescriptor>,
}

const LOGIC_TEMPLATES: [GameTemplate; 10] = [
    GameTemplate {
        name: "Sudoku",
        icon: "Grid3x3",
        describe: |level| format!("Sudoku {0}x{0}", 3 + level),
    },
    GameTemplate {
        name: "Chess Puzzles",
        icon: "Crown",
        describe: |level| format!("Capture the king, setup {level}"),
    },
    GameTemplate {
        name: "Logic Chains",
        icon: "Link",
        describe: |level| format!("{} elements", level + 3),
    },
    GameTemplate {
        name: "Rebuses",
        icon: "MessageSquare",
        describe: |level| format!("Difficulty {level}"),
    },
    GameTemplate {
        name: "Number Pyramids",
        icon: "Triangle",
        describe: |level| format!("{} rows", level + 3),
    },
    GameTemplate {
        name: "Tangram",
        icon: "Box",
        describe: |level| format!("{} pieces", level + 4),
    },
    GameTemplate {
        name: "Mazes",
        icon: "Puzzle",
        describe: |level| format!("Size {0}x{0}", (level + 3) * 2),
    },
    GameTemplate {
        name: "Logic Riddles",
        icon: "Lightbulb",
        describe: |level| format!("Level {level}"),
    },
    GameTemplate {
        name: "Tic-Tac-Toe",
        icon: "Grid2x2",
        describe: |level| format!("{0}x{0}", level + 3),
    },
    GameTemplate {
        name: "Spot the Differences",
        icon: "Eye",
        describe: |level| format!("{} differences", level + 3),
    },
];

const MEMORY_TEMPLATES: [GameTemplate; 10] = [
    GameTemplate {
        name: "Find the Pair",
        icon: "Copy",
        describe: |level| format!("{} pairs", (level + 2) * 2),
    },
    GameTemplate {
        name: "Remember the Order",
        icon: "ListOrdered",
        describe: |level| format!("{} elements", level + 3),
    },
    GameTemplate {
        name: "What Changed?",
        icon: "Search",
        describe: |level| format!("{} changes", level + 2),
    },
    GameTemplate {
        name: "Number Row",
        icon: "Hash",
        describe: |level| format!("{} digits", level + 4),
    },
    GameTemplate {
        name: "Memo Words",
        icon: "Type",
        describe: |level| format!("{} words", level + 5),
    },
    GameTemplate {
        name: "Picture Memory",
        icon: "Image",
        describe: |level| format!("{} details", level + 4),
    },
    GameTemplate {
        name: "Color Memory",
        icon: "Palette",
        describe: |level| format!("{} colors", level + 4),
    },
    GameTemplate {
        name: "Sound Memory",
        icon: "Music",
        describe: |level| format!("{} sounds", level + 3),
    },
    GameTemplate {
        name: "Memo Fruits",
        icon: "Apple",
        describe: |level| format!("{} fruits", level + 5),
    },
    GameTemplate {
        name: "Who Is Missing?",
        icon: "HelpCircle",
        describe: |level| format!("Out of {} items", level + 6),
    },
];

const THINKING_TEMPLATES: [GameTemplate; 10] = [
    GameTemplate {
        name: "Associations",
        icon: "Shuffle",
        describe: |level| format!("Level {level}"),
    },
    GameTemplate {
        name: "Categories",
        icon: "FolderTree",
        describe: |level| format!("{} groups", level + 3),
    },
    GameTemplate {
        name: "Cause and Effect",
        icon: "ArrowRight",
        describe: |level| format!("{} events", level + 3),
    },
    GameTemplate {
        name: "Comparison",
        icon: "Scale",
        describe: |level| format!("{} objects", level + 3),
    },
    GameTemplate {
        name: "Analogies",
        icon: "GitCompare",
        describe: |level| format!("Difficulty {level}"),
    },
    GameTemplate {
        name: "Odd One Out",
        icon: "X",
        describe: |level| format!("Out of {} items", level + 5),
    },
    GameTemplate {
        name: "Assemble the Whole",
        icon: "Puzzle",
        describe: |level| format!("{} parts", level + 4),
    },
    GameTemplate {
        name: "Opposites",
        icon: "ArrowLeftRight",
        describe: |level| format!("{} pairs", level + 4),
    },
    GameTemplate {
        name: "Creative Thinking",
        icon: "Wand2",
        describe: |level| format!("Task {level}"),
    },
    GameTemplate {
        name: "Problem Solving",
        icon: "Target",
        describe: |level| format!("Situation {level}"),
    },
];

const READING_TEMPLATES: [GameTemplate; 10] = [
    GameTemplate {
        name: "Schulte Tables",
        icon: "Table",
        describe: |level| format!("{0}x{0}", level + 3),
    },
    GameTemplate {
        name: "Field of View",
        icon: "Maximize2",
        describe: |level| format!("{} words", level + 3),
    },
    GameTemplate {
        name: "Reading Without Regression",
        icon: "FastForward",
        describe: |level| format!("{} words", (level + 3) * 10),
    },
    GameTemplate {
        name: "Word Search",
        icon: "SearchCheck",
        describe: |level| format!("{} words", level + 2),
    },
    GameTemplate {
        name: "Reading Speed",
        icon: "Gauge",
        describe: |level| format!("{} words per minute", (level + 2) * 50),
    },
    GameTemplate {
        name: "Anagrams",
        icon: "ALargeSmall",
        describe: |level| format!("{} letters", level + 4),
    },
    GameTemplate {
        name: "Syllable Reading",
        icon: "TextCursor",
        describe: |level| format!("Speed {level}"),
    },
    GameTemplate {
        name: "Rotating Text",
        icon: "RotateCw",
        describe: |level| format!("Angle {} degrees", level * 15),
    },
    GameTemplate {
        name: "Missing Letters",
        icon: "FileQuestion",
        describe: |level| format!("{} gaps", level + 2),
    },
    GameTemplate {
        name: "Word Maze",
        icon: "Route",
        describe: |level| format!("{} turns", level + 5),
    },
];

const HEMISPHERES_TEMPLATES: [GameTemplate; 10] = [
    GameTemplate {
        name: "Draw with Both Hands",
        icon: "PenTool",
        describe: |level| format!("Shape {level}"),
    },
    GameTemplate {
        name: "Right or Left",
        icon: "Move",
        describe: |level| format!("Speed {level}"),
    },
    GameTemplate {
        name: "Color vs Word",
        icon: "Paintbrush",
        describe: |level| format!("{} words", level + 5),
    },
    GameTemplate {
        name: "Cross Movements",
        icon: "Activity",
        describe: |level| format!("{} movements", level + 3),
    },
    GameTemplate {
        name: "Mirror Writing",
        icon: "FlipHorizontal2",
        describe: |level| format!("{} letters", level + 3),
    },
    GameTemplate {
        name: "Simultaneous Patterns",
        icon: "Shapes",
        describe: |level| format!("Difficulty {level}"),
    },
    GameTemplate {
        name: "Two-Hand Rhythm",
        icon: "Drum",
        describe: |level| format!("{} bars", level + 2),
    },
    GameTemplate {
        name: "Mirrored Letters",
        icon: "FlipVertical2",
        describe: |level| format!("{} words", level + 4),
    },
    GameTemplate {
        name: "Kinesiology",
        icon: "Hand",
        describe: |level| format!("Set {level}"),
    },
    GameTemplate {
        name: "Neuro Gymnastics",
        icon: "Dumbbell",
        describe: |level| format!("Level {level}"),
    },
];

/// Expand ten templates into the 100 games of one category block.
fn generate_games(templates: &[GameTemplate; 10], start_id: u32) -> Vec<GameDescriptor> {
    (0..BLOCK_SIZE)
        .map(|i| {
            let template: &GameTemplate = &templates[(i % TEMPLATES_PER_BLOCK) as usize];
            let level: u32 = i / TEMPLATES_PER_BLOCK + 1;
            GameDescriptor {
                id: start_id + i,
                name: template.name.to_string(),
                description: (template.describe)(level),
                difficulty: Difficulty::for_level(level),
                icon: template.icon.to_string(),
                level,
                unlocked: i == 0,
                completed: false,
                score: None,
            }
        })
        .collect()
}

/// Build the five catalog categories with their 100 games each.
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "logic",
            name: "Logic",
            icon: "Brain",
            games: generate_games(&LOGIC_TEMPLATES, 1),
        },
        Category {
            id: "memory",
            name: "Memory",
            icon: "BookOpen",
            games: generate_games(&MEMORY_TEMPLATES, 101),
        },
        Category {
            id: "thinking",
            name: "Thinking",
            icon: "Sparkles",
            games: generate_games(&THINKING_TEMPLATES, 201),
        },
        Category {
            id: "reading",
            name: "Speed Reading",
            icon: "BookMarked",
            games: generate_games(&READING_TEMPLATES, 301),
        },
        Category {
            id: "hemispheres",
            name: "Hemisphere Links",
            icon: "GitBranch",
            games: generate_games(&HEMISPHERES_TEMPLATES, 401),
        },
    ]
}

/// Look up one game descriptor by identifier.
pub fn find_game(game_id: u32) -> Option<GameDescriptor> {
    if !(1..=500).contains(&game_id) {
        return None;
    }
    let block: usize = ((game_id - 1) / BLOCK_SIZE) as usize;
    let index: usize = ((game_id - 1) % BLOCK_SIZE) as usize;
    categories()
        .into_iter()
        .nth(block)
        .and_then(|category| category.games.into_iter().nth(index))
}
