//! High score persistence - a small JSON file under the user's home
//!
//! Loading is forgiving: a missing, unreadable or corrupt file simply
//! means no record yet, so the game always starts. Writing reports
//! errors so the host can decide whether to surface them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

const STORE_DIR: &str = ".blockfall";
const STORE_FILE: &str = "highscore.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// Reads and writes the persistent high score.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `~/.blockfall/highscore.json`, falling back to
    /// the working directory when no home is set.
    pub fn default_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(STORE_DIR).join(STORE_FILE),
            None => PathBuf::from(STORE_DIR).join(STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best score on record, or 0 when there is none.
    pub fn load(&self) -> u32 {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return 0;
        };
        match serde_json::from_str::<HighScoreFile>(&raw) {
            Ok(file) => file.high_score,
            Err(_) => 0,
        }
    }

    /// Persist a new record, creating the parent directory on first use.
    pub fn record(&self, high_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    anyhow!("store: create {} failed: {}", parent.display(), e)
                })?;
            }
        }
        let raw = serde_json::to_string(&HighScoreFile { high_score })
            .map_err(|e| anyhow!("store: encode failed: {}", e))?;
        fs::write(&self.path, raw)
            .map_err(|e| anyhow!("store: write {} failed: {}", self.path.display(), e))
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}
