//! Storage layer for the manday tracker.
//!
//! The whole [`Ledger`] lives in one pretty-printed JSON document:
//!
//! ```json
//! {
//!   "tasks": { "default": 150, "PROJ-123": 45 },
//!   "activeTask": "PROJ-123"
//! }
//! ```
//!
//! Key order in `tasks` is the ledger's insertion order.
//!
//! # Concurrency
//!
//! There is no locking. Each invocation loads, mutates and saves the full
//! document, so two concurrent writers race and the last one wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use md_core::Ledger;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The ledger file exists but could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The parent directory could not be created.
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The ledger file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file contents are not a valid ledger.
    #[error("invalid ledger data in {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The ledger could not be serialized.
    #[error("failed to serialize ledger")]
    Encode(#[source] serde_json::Error),
}

/// A ledger persisted as a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the ledger.
    ///
    /// A missing or blank file yields an empty ledger with the default task active.
    pub fn load(&self) -> Result<Ledger, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no ledger file, starting empty");
                return Ok(Ledger::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if raw.trim().is_empty() {
            return Ok(Ledger::new());
        }

        let ledger: Ledger = serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), tasks = ledger.len(), "loaded ledger");
        Ok(ledger)
    }

    /// Writes the ledger, creating parent directories as needed.
    pub fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(ledger).map_err(StoreError::Encode)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), tasks = ledger.len(), "saved ledger");
        Ok(())
    }
}
