//! High score persistence backends
//!
//! Features:
//! - Versioned JSON envelope on native (`FileStore`)
//! - Atomic writes (tmp file, then rename over the save)
//! - Corrupt or unknown saves read as zero instead of failing the game
//! - LocalStorage on web (`LocalStorageStore`), same key/format as the browser build

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

/// Current envelope version
pub const SAVE_VERSION: u8 = 1;

/// Persistence failures (logged, never surfaced to the simulation)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed save: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported save version {0}")]
    Version(u8),
}

/// On-disk format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveEnvelope {
    pub version: u8,
    pub high_score: u64,
}

impl SaveEnvelope {
    pub fn new(high_score: u64) -> Self {
        Self {
            version: SAVE_VERSION,
            high_score,
        }
    }

    /// Parse and version-check an envelope
    pub fn decode(text: &str) -> Result<Self, StoreError> {
        let envelope: SaveEnvelope = serde_json::from_str(text)?;
        if envelope.version != SAVE_VERSION {
            return Err(StoreError::Version(envelope.version));
        }
        Ok(envelope)
    }

    pub fn encode(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{SaveEnvelope, StoreError};
    use crate::highscores::HighScoreStore;

    /// High score kept in a JSON file
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
        score: u64,
    }

    impl FileStore {
        /// Open (or start) a save at `path`; unreadable saves count as zero
        pub fn open(path: impl Into<PathBuf>) -> Self {
            let path = path.into();
            let score = match read_envelope(&path) {
                Ok(Some(envelope)) => envelope.high_score,
                Ok(None) => 0,
                Err(err) => {
                    log::warn!("Ignoring high score save {}: {}", path.display(), err);
                    0
                }
            };
            log::info!("High score {} ({})", score, path.display());
            Self { path, score }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn write(&self) -> Result<(), StoreError> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let tmp = self.path.with_extension("tmp");
            fs::write(&tmp, SaveEnvelope::new(self.score).encode()?)?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        }
    }

    fn read_envelope(path: &Path) -> Result<Option<SaveEnvelope>, StoreError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        SaveEnvelope::decode(&text).map(Some)
    }

    impl HighScoreStore for FileStore {
        fn high_score(&self) -> u64 {
            self.score
        }

        fn set_high_score(&mut self, score: u64) {
            self.score = score;
            match self.write() {
                Ok(()) => log::info!("High score saved ({})", score),
                Err(err) => log::warn!("Failed to save high score to {}: {}", self.path.display(), err),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::highscores::HighScoreStore;

    /// High score in the browser's LocalStorage
    #[derive(Debug, Clone, Default)]
    pub struct LocalStorageStore {
        score: u64,
    }

    impl LocalStorageStore {
        const STORAGE_KEY: &'static str = "paperCatcherHighScore";

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
        }

        /// Load the stored score (missing or garbled reads as zero)
        pub fn load() -> Self {
            let score = Self::storage()
                .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(0);
            log::info!("Loaded high score {}", score);
            Self { score }
        }
    }

    impl HighScoreStore for LocalStorageStore {
        fn high_score(&self) -> u64 {
            self.score
        }

        fn set_high_score(&mut self, score: u64) {
            self.score = score;
            if let Some(storage) = Self::storage() {
                let _ = storage.set_item(Self::STORAGE_KEY, &score.to_string());
                log::info!("High score saved ({})", score);
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::highscores::HighScoreStore;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "paper-catcher-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("highscore.json")
    }

    #[test]
    fn test_envelope_rejects_other_versions() {
        assert!(matches!(
            SaveEnvelope::decode(r#"{"version": 2, "high_score": 10}"#),
            Err(StoreError::Version(2))
        ));
        assert!(matches!(
            SaveEnvelope::decode("garbage"),
            Err(StoreError::Parse(_))
        ));
        let ok = SaveEnvelope::decode(r#"{"version": 1, "high_score": 10}"#).unwrap();
        assert_eq!(ok.high_score, 10);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let path = temp_path("persist");
        let mut store = FileStore::open(&path);
        assert_eq!(store.high_score(), 0);
        store.set_high_score(340);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.high_score(), 340);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_corrupt_file_reads_as_zero() {
        let path = temp_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(FileStore::open(&path).high_score(), 0);
    }
}
