//! File-backed key/value preference store.
//!
//! Remembers front-end choices (e.g., the last policy used) between runs.
//! The store is an explicitly constructed value: open it, read and write
//! keys, then `flush` before dropping it.
//!
//! # File Format
//! A single JSON object. Writes go to a sibling temp file that is then
//! renamed over the original.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ScheduleError;

/// JSON-backed preference store.
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    values: Map<String, Value>,
    dirty: bool,
}

impl Preferences {
    /// Opens the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                Map::new()
            } else {
                serde_json::from_str(&text)?
            }
        } else {
            Map::new()
        };
        debug!(path = %path.display(), keys = values.len(), "opened preferences");
        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `key` is stored.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Reads and decodes a value. Returns `Ok(None)` if the key is absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ScheduleError> {
        match self.values.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Stores a value, replacing any previous one.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> Result<(), ScheduleError> {
        let value = serde_json::to_value(value)?;
        let key = key.into();
        if self.values.get(&key) != Some(&value) {
            self.values.insert(key, value);
            self.dirty = true;
        }
        Ok(())
    }

    /// Removes a key. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.values.remove(key).is_some();
        self.dirty |= removed;
        removed
    }

    /// Stored keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Whether there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes pending changes to disk.
    pub fn flush(&mut self) -> Result<(), ScheduleError> {
        if !self.dirty {
            return Ok(());
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_string_pretty(&self.values)?)?;
        fs::rename(&tmp, &self.path)?;
        self.dirty = false;
        debug!(path = %self.path.display(), keys = self.values.len(), "flushed preferences");
        Ok(())
    }
}
