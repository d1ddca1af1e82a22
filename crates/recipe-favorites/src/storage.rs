//! Key-value storage backends.
//!
//! Storage is modelled on browser local storage: string values in named
//! slots, read at startup and overwritten wholesale. Every [`Storage::write`]
//! is complete when it returns.
//!
//! # Backends
//!
//! - [`MemoryStorage`]: in-process map, counts writes (useful in tests)
//! - [`FileStorage`]: a single JSON object file in a directory

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Durable key-value slot storage.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the slot `key` with `value`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Backend name for diagnostics.
    fn name(&self) -> &str;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// MemoryStorage
// ============================================================================

/// In-memory storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with one pre-populated slot.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Make subsequent writes fail (simulates a full or read-only store).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Peek at a slot without going through the trait.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::storage("memory storage is read-only"));
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// FileStorage
// ============================================================================

/// File name of the slot file inside the storage directory.
pub const STORAGE_FILE: &str = "storage.json";

/// Storage backed by one JSON object file (`{ "key": "value", ... }`).
///
/// Writes go to a sibling temp file which is then renamed over the slot
/// file, so a reader never sees a half-written file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot file.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the slot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(STORAGE_FILE)
    }

    fn read_slots(&self) -> Result<BTreeMap<String, String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Write `bytes` to `path` and flush them to disk before returning.
fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| Error::io_with_path(e, path))?;
    file.write_all(bytes)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io_with_path(e, path))
}

/// Persist a rename in `dir`. Not every platform can open a directory for
/// syncing, so failures are only logged.
fn sync_dir(dir: &Path) {
    if let Err(e) = fs::File::open(dir).and_then(|d| d.sync_all()) {
        log::debug!("Could not sync directory {}: {e}", dir.display());
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_slots()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut slots = match self.read_slots() {
            Ok(slots) => slots,
            Err(e) => {
                log::warn!(
                    "Discarding unreadable storage file {}: {e}",
                    self.path().display()
                );
                BTreeMap::new()
            }
        };
        slots.insert(key.to_string(), value.to_string());

        fs::create_dir_all(&self.dir).map_err(|e| Error::io_with_path(e, &self.dir))?;
        let path = self.path();
        let tmp = self.dir.join(format!("{STORAGE_FILE}.tmp"));
        let body = serde_json::to_string_pretty(&slots)?;
        write_synced(&tmp, body.as_bytes())?;
        fs::rename(&tmp, &path).map_err(|e| Error::io_with_path(e, &path))?;
        sync_dir(&self.dir);

        log::debug!("Wrote storage slot '{key}' to {}", path.display());
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

// ============================================================================
// Tests
// ============================================================================
