//! Durable key-value slots.
//!
//! The calculator persists a single string value under one key. This module
//! provides the [`KeyValueStore`] seam plus a file-backed implementation that
//! keeps every key in one JSON object, and an in-memory one.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// String key-value storage.
///
/// Implementations may fail on both reads and writes; callers decide whether
/// a failure matters.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Key-value storage kept in a single JSON file.
///
/// # File format
///
/// ```json
/// { "ergodesk_state_v3": "{\"height\":170.0,...}" }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read storage file: {}",
            self.path.display()
        ))?;

        serde_json::from_str(&content).context(format!(
            "Failed to parse storage file: {}",
            self.path.display()
        ))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    /// Writes atomically using the temp file + rename pattern.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future write
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create storage directory: {}",
                parent.display()
            ))?;
        }

        let content =
            serde_json::to_string_pretty(&entries).context("Failed to serialize storage")?;
        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp storage file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp storage file to: {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

/// Volatile storage, used when no file is wanted and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
