//! The authoritative word list.
//!
//! Words are read one per line; a word's id is its zero-based line index, so
//! ids stay stable as long as the file does. Blank lines are skipped but
//! still consume an id. Every word starts at a random position in the
//! `[0, 1000) x [0, 1000)` field; positions are held in memory only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rand::Rng;
use wire::{MoveIntent, RemoteMove, TileId, Word};

/// Upper bound (exclusive) of initial word coordinates.
pub const FIELD_SIZE: i64 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum WordsError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {0} has no words")]
    Empty(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: BTreeMap<TileId, Word>,
}

impl WordList {
    /// Read and place the words in `path`.
    ///
    /// # Errors
    ///
    /// Returns [`WordsError`] when the file cannot be read or holds no words.
    pub fn load(path: &Path) -> Result<Self, WordsError> {
        let text =
            std::fs::read_to_string(path).map_err(|source| WordsError::Read { path: path.to_path_buf(), source })?;
        let list = Self::parse_with_rng(&text, &mut rand::rng());
        if list.is_empty() {
            return Err(WordsError::Empty(path.to_path_buf()));
        }
        Ok(list)
    }

    /// Parse a word list, placing each word with `rng`.
    pub fn parse_with_rng<R: Rng>(text: &str, rng: &mut R) -> Self {
        let words = text
            .lines()
            .enumerate()
            .filter_map(|(line, raw)| {
                let word = raw.trim();
                if word.is_empty() {
                    return None;
                }
                let id = line as TileId;
                let placed = Word {
                    id,
                    word: word.to_owned(),
                    x: rng.random_range(0..FIELD_SIZE),
                    y: rng.random_range(0..FIELD_SIZE),
                };
                Some((id, placed))
            })
            .collect();
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Word> {
        self.words.get(&id)
    }

    /// Apply a move (last write wins). Returns the move to relay, or `None`
    /// when the id is unknown.
    pub fn apply_move(&mut self, intent: &MoveIntent) -> Option<RemoteMove> {
        let word = self.words.get_mut(&intent.id)?;
        word.x = intent.x;
        word.y = intent.y;
        Some(RemoteMove::from(*intent))
    }

    /// Every word in id order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Word> {
        self.words.values().cloned().collect()
    }
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
