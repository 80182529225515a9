//! File-backed leaderboard store.
//!
//! Entries are kept in insertion order and persisted as a JSON array. A
//! missing, empty or truncated file loads as an empty leaderboard; anything
//! else that fails to decode is reported as corrupt.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

use crate::leaderboard::{LeaderboardEntry, LeaderboardError};

/// Append-only, per-mode leaderboard backed by one file.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
    entries: Vec<LeaderboardEntry>,
}

impl LeaderboardStore {
    /// Creates an empty store for the given path without touching disk.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn empty(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: Vec::new(),
        }
    }

    /// Loads a leaderboard, creating an empty file if none exists.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError`] with kind `Corrupt` if the file holds
    /// complete but malformed data, or kind `Io` if it cannot be read or
    /// created.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LeaderboardError> {
        let path = path.as_ref();
        debug!("Loading leaderboard");

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Leaderboard file missing, creating empty one");
                fs::File::create(path).map_err(|e| {
                    LeaderboardError::io("load", path, format!("Failed to create file: {}", e))
                })?;
                return Ok(Self::empty(path));
            }
            Err(e) => {
                return Err(LeaderboardError::io(
                    "load",
                    path,
                    format!("Failed to read file: {}", e),
                ));
            }
        };

        let entries = Self::decode(path, &bytes)?;
        info!(count = entries.len(), "Leaderboard loaded");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Decodes file content. Empty or truncated content decodes as no entries.
    fn decode(path: &Path, bytes: &[u8]) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!("Leaderboard file empty");
            return Ok(Vec::new());
        }

        match serde_json::from_slice::<Vec<LeaderboardEntry>>(bytes) {
            Ok(entries) => Ok(entries),
            Err(e) if e.is_eof() => {
                // Half-written file: no scores yet.
                warn!(error = %e, "Leaderboard file truncated, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(LeaderboardError::corrupt(
                "load",
                path,
                format!("Failed to decode leaderboard: {}", e),
            )),
        }
    }

    /// Appends a result. Existing entries are never changed.
    #[instrument(skip(self, name), fields(name = %name.as_ref()))]
    pub fn add(&mut self, name: impl AsRef<str>, score: u32) {
        self.entries
            .push(LeaderboardEntry::new(name.as_ref().to_string(), score));
        debug!(count = self.entries.len(), "Result added");
    }

    /// Entries sorted by score, highest first; ties keep insertion order.
    #[instrument(skip(self))]
    pub fn ranked_view(&self) -> Vec<LeaderboardEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score().cmp(a.score()));
        ranked
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes all entries to the backing file.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError`] with kind `Io` if the file cannot be
    /// written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self) -> Result<(), LeaderboardError> {
        self.save_to(&self.path)
    }

    /// Writes all entries to the given path, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError`] with kind `Io` if the file cannot be
    /// written.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display(), count = self.entries.len()))]
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), LeaderboardError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
            LeaderboardError::io("save", path, format!("Failed to create temp file: {}", e))
        })?;
        serde_json::to_writer_pretty(&mut tmp, &self.entries)
            .map_err(|e| LeaderboardError::io("save", path, format!("Failed to encode: {}", e)))?;
        tmp.flush()
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| LeaderboardError::io("save", path, format!("Failed to flush: {}", e)))?;
        tmp.persist(path).map_err(|e| {
            LeaderboardError::io("save", path, format!("Failed to replace file: {}", e.error))
        })?;

        info!("Leaderboard saved");
        Ok(())
    }
}
