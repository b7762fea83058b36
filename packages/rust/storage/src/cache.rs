//! Persisted name→gender cache.
//!
//! A JSON object mapping an exact name string to its previously resolved
//! `{gender, accuracy}` pair. Updated entries are written through to disk
//! immediately so an aborted run keeps everything already resolved.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, info};

use gendercite_shared::{GenderGuess, GenderciteError, Result};

/// In-memory cache bound to its backing file. Owned by the caller for the
/// duration of a run; there are no concurrent writers.
#[derive(Debug)]
pub struct NameCache {
    path: PathBuf,
    entries: HashMap<String, GenderGuess>,
}

impl NameCache {
    /// Load the cache from `path`. A missing file yields an empty cache.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            info!(?path, "no name cache found, starting empty");
            return Ok(Self {
                path,
                entries: HashMap::new(),
            });
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| GenderciteError::io(&path, e))?;
        let entries: HashMap<String, GenderGuess> = serde_json::from_str(&content)
            .map_err(|e| GenderciteError::Storage(format!("{}: {e}", path.display())))?;

        debug!(?path, names = entries.len(), "loaded name cache");
        Ok(Self { path, entries })
    }

    /// Look up a previously resolved guess for the exact name string.
    pub fn get(&self, name: &str) -> Option<GenderGuess> {
        self.entries.get(name).copied()
    }

    /// Insert a guess and write the cache through to disk.
    pub fn put(&mut self, name: impl Into<String>, guess: GenderGuess) -> Result<()> {
        self.entries.insert(name.into(), guess);
        self.persist()
    }

    /// Serialize the cache to its backing file.
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| GenderciteError::io(parent, e))?;
            }
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| GenderciteError::Storage(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| GenderciteError::io(&self.path, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
