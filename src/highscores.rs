//! High score leaderboard system
//!
//! Top-5 name/score ledger. The game only talks to it through the
//! [`Ledger`] trait; [`FileLedger`] persists to a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// A single high score entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Name typed on the entry screen
    pub name: String,
    /// Aliens killed in the run
    pub score: u32,
}

/// Read/insert access to the best-score list
pub trait Ledger {
    /// Exactly [`MAX_HIGH_SCORES`] rows, best first; missing rows are
    /// empty names with score 0
    fn read(&self) -> Vec<HighScoreEntry>;

    /// Insert at the sorted position, keep the top entries and persist.
    /// Returns the 1-indexed rank, or None if the score fell off the end.
    fn insert(&mut self, score: u32, name: &str) -> Result<Option<usize>, StorageError>;

    /// Score a run has to beat to make the list
    fn fifth_score(&self) -> u32 {
        self.read()
            .get(MAX_HIGH_SCORES - 1)
            .map(|e| e.score)
            .unwrap_or(0)
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would beat the current 5th place
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.fifth_score()
    }

    /// Add a new score. Equal scores go after existing ones.
    /// Returns the rank achieved (1-indexed) or None if it didn't stick.
    pub fn add_score(&mut self, score: u32, name: &str) -> Option<usize> {
        let entry = HighScoreEntry {
            name: name.to_string(),
            score,
        };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let index = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        (index < MAX_HIGH_SCORES).then_some(index + 1)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Rows padded out to the full table
    pub fn rows(&self) -> Vec<HighScoreEntry> {
        let mut rows: Vec<HighScoreEntry> =
            self.entries.iter().take(MAX_HIGH_SCORES).cloned().collect();
        rows.resize(MAX_HIGH_SCORES, HighScoreEntry::default());
        rows
    }
}

impl Ledger for HighScores {
    fn read(&self) -> Vec<HighScoreEntry> {
        self.rows()
    }

    fn insert(&mut self, score: u32, name: &str) -> Result<Option<usize>, StorageError> {
        Ok(self.add_score(score, name))
    }
}

/// Ledger backed by a JSON file, rewritten after every insert
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
    scores: HighScores,
}

impl FileLedger {
    /// Load the ledger at `path`. A missing file starts empty; an
    /// unreadable one is logged and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let scores = match Self::load(&path) {
            Ok(scores) => {
                log::info!("Loaded {} high scores from {}", scores.entries.len(), path.display());
                scores
            }
            Err(e) if e.is_not_found() => {
                log::info!("No high scores at {}, starting fresh", path.display());
                HighScores::new()
            }
            Err(e @ StorageError::Json { .. }) => {
                log::warn!("Ignoring corrupt high score file: {}", e);
                HighScores::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self { path, scores })
    }

    fn load(path: &Path) -> Result<HighScores, StorageError> {
        let json = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        let mut scores: HighScores =
            serde_json::from_str(&json).map_err(|e| StorageError::json(path, e))?;
        // Tolerate hand-edited files
        scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
        scores.entries.truncate(MAX_HIGH_SCORES);
        Ok(scores)
    }

    /// Save high scores to disk
    pub fn save(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.scores)
            .map_err(|e| StorageError::json(&self.path, e))?;
        fs::write(&self.path, json).map_err(|e| StorageError::io(&self.path, e))?;
        log::info!("High scores saved ({} entries)", self.scores.entries.len());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }
}

impl Ledger for FileLedger {
    fn read(&self) -> Vec<HighScoreEntry> {
        self.scores.rows()
    }

    fn insert(&mut self, score: u32, name: &str) -> Result<Option<usize>, StorageError> {
        let rank = self.scores.add_score(score, name);
        self.save()?;
        Ok(rank)
    }
}
