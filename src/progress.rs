/*
progress.rs

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

//! Save and restore per-game completion records.
//!
//! The saved object is a flat JSON map of game identifier to
//! [`ProgressEntry`], serialized with [`serde`].

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

/// Completion record for one game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ProgressEntry {
    /// Whether the game was completed at least once.
    pub completed: bool,

    /// Best recorded score.
    pub score: u8,
}

/// Storage for per-game completion records.
pub trait ProgressStore {
    /// Retrieve the record for a game.
    fn get(&self, game_id: u32) -> Option<ProgressEntry>;

    /// Record a completion for a game.
    fn set(&mut self, game_id: u32, completed: bool, score: u8);
}

/// In-memory store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    entries: BTreeMap<u32, ProgressEntry>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn get(&self, game_id: u32) -> Option<ProgressEntry> {
        self.entries.get(&game_id).copied()
    }

    fn set(&mut self, game_id: u32, completed: bool, score: u8) {
        self.entries.insert(game_id, ProgressEntry { completed, score });
    }
}

/// Store backed by a JSON file.
pub struct JsonProgressStore {
    /// Absolute path to the save file.
    save_file: PathBuf,

    entries: BTreeMap<u32, ProgressEntry>,
}

impl JsonProgressStore {
    /// Create a [`JsonProgressStore`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the
    /// progress must be saved. A missing save file means empty progress.
    pub fn new(mut data_dir: PathBuf) -> Result<Self, Box<dyn Error>> {
        data_dir.push("progress.json");
        debug!("Progress file: {data_dir:?}");

        let entries: BTreeMap<u32, ProgressEntry> = match File::open(&data_dir) {
            Ok(file) => {
                let reader: BufReader<File> = BufReader::new(file);
                serde_json::from_reader(reader)?
            }
            Err(error) => match error.kind() {
                ErrorKind::NotFound => BTreeMap::new(),
                _ => return Err(Box::new(error)),
            },
        };

        Ok(Self {
            save_file: data_dir,
            entries,
        })
    }

    /// Save the current records.
    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, &self.entries)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the save file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

impl ProgressStore for JsonProgressStore {
    fn get(&self, game_id: u32) -> Option<ProgressEntry> {
        self.entries.get(&game_id).copied()
    }

    fn set(&mut self, game_id: u32, completed: bool, score: u8) {
        self.entries.insert(game_id, ProgressEntry { completed, score });
        if let Err(error) = self.save() {
            warn!("Cannot save the progress file: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("puzzlebox-test-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("cannot create the test directory");
        dir
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store: MemoryProgressStore = MemoryProgressStore::new();
        assert!(store.get(1).is_none());
        store.set(1, true, 85);
        assert_eq!(
            store.get(1),
            Some(ProgressEntry {
                completed: true,
                score: 85
            })
        );
    }

    #[test]
    fn missing_file_means_empty_progress() {
        let dir: PathBuf = temp_dir("missing");
        let store: JsonProgressStore =
            JsonProgressStore::new(dir.clone()).expect("cannot create the store");
        assert!(store.get(1).is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn records_survive_a_reload() {
        let dir: PathBuf = temp_dir("reload");
        {
            let mut store: JsonProgressStore =
                JsonProgressStore::new(dir.clone()).expect("cannot create the store");
            store.set(7, true, 90);
            store.set(42, true, 60);
        }
        let store: JsonProgressStore =
            JsonProgressStore::new(dir.clone()).expect("cannot reopen the store");
        assert_eq!(
            store.get(7),
            Some(ProgressEntry {
                completed: true,
                score: 90
            })
        );
        assert_eq!(
            store.get(42),
            Some(ProgressEntry {
                completed: true,
                score: 60
            })
        );
        store.delete_save();
        assert!(JsonProgressStore::new(dir.clone())
            .expect("cannot reopen the store")
            .get(7)
            .is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}
