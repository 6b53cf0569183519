//! High-score persistence
//!
//! The record is a single non-negative integer in a plain-text file. Writes
//! are best effort: the session keeps running if one fails, but the failure
//! is always reported to the caller.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the record. A missing file is not an error: the record is
    /// created holding `0` and 0 is returned. Unreadable or non-numeric
    /// contents are errors; the caller decides how to recover.
    pub fn load(&self) -> Result<u32> {
        if !self.path.exists() {
            self.save(0)?;
            return Ok(0);
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read high score from {:?}", self.path))?;

        text.trim()
            .parse::<u32>()
            .with_context(|| format!("Corrupt high score record in {:?}", self.path))
    }

    /// Overwrite the record unconditionally. Creates parent directories if
    /// they don't exist.
    pub fn save(&self, value: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        fs::write(&self.path, value.to_string())
            .with_context(|| format!("Failed to write high score to {:?}", self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_record_is_created_as_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("high_score.txt");
        let store = HighScoreStore::new(&path);

        assert_eq!(store.load().unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "0");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("high_score.txt"));

        store.save(120).unwrap();
        assert_eq!(store.load().unwrap(), 120);

        // Saves overwrite unconditionally, even with a lower value
        store.save(40).unwrap();
        assert_eq!(store.load().unwrap(), 40);
    }

    #[test]
    fn test_load_tolerates_surrounding_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "70\n").unwrap();

        let store = HighScoreStore::new(&path);
        assert_eq!(store.load().unwrap(), 70);
    }

    #[test]
    fn test_corrupt_record_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "twelve").unwrap();

        let store = HighScoreStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/high_score.txt");

        let store = HighScoreStore::new(&path);
        store.save(15).unwrap();
        assert_eq!(store.load().unwrap(), 15);
    }
}
