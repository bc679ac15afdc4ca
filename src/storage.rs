//! Note Persistence
//!
//! The whole board is one JSON array under a single key in a synchronous
//! key-value store. Failures never reach the user: reads fall back to an
//! empty board and writes are logged and dropped.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::Note;

/// Key holding the serialized board
pub const STORAGE_KEY: &str = "quillforge-notes";

/// Storage-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No storage area available (private mode, blocked by settings)
    Unavailable(String),
    Read(String),
    Write(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Write failed: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Synchronous string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Throws QuotaExceededError when full
        self.storage.set_item(key, value).map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-process store; shares its contents between clones.
///
/// Used by tests and when the browser refuses access to localStorage.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `set` fail, as a full quota would
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage used by the running app: localStorage when the browser allows
/// it, otherwise an in-memory map that lasts for the session.
#[derive(Clone)]
pub enum BoardStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl BoardStorage {
    pub fn open() -> Self {
        match BrowserStorage::open() {
            Ok(storage) => BoardStorage::Browser(storage),
            Err(e) => {
                log::warn!("[STORAGE] {}; notes will not survive a reload", e);
                BoardStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStore for BoardStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BoardStorage::Browser(s) => s.get(key),
            BoardStorage::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BoardStorage::Browser(s) => s.set(key, value),
            BoardStorage::Memory(s) => s.set(key, value),
        }
    }
}

/// Load/save of the full note collection
pub struct NoteStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> NoteStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved notes, or an empty board when nothing usable is stored
    pub fn load(&self) -> Vec<Note> {
        match self.try_load() {
            Ok(notes) => notes,
            Err(e) => {
                log::warn!("[STORAGE] Error loading notes, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Write the full collection; failures are logged only
    pub fn save(&self, notes: &[Note]) {
        if let Err(e) = self.try_save(notes) {
            log::error!("[STORAGE] Error saving notes: {}", e);
        }
    }

    fn try_load(&self) -> Result<Vec<Note>, StorageError> {
        match self.store.get(STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StorageError::Serialize(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn try_save(&self, notes: &[Note]) -> Result<(), StorageError> {
        let json = serde_json::to_string(notes).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.set(STORAGE_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, TodoItem};
    use chrono::Utc;

    fn note(id: &str) -> Note {
        let now = Utc::now();
        Note {
            id: id.to_string(),
            title: "T".to_string(),
            color: "#c9ffcc".to_string(),
            position: Position::new(1.0, 2.0),
            todos: vec![TodoItem::new(format!("{}-todo", id), "x".to_string(), now)],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let storage = NoteStorage::new(MemoryStorage::new());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_garbage_loads_empty() {
        let kv = MemoryStorage::new();
        kv.set(STORAGE_KEY, "{not json").unwrap();
        assert!(NoteStorage::new(kv.clone()).load().is_empty());

        kv.set(STORAGE_KEY, r#"{"version":2,"notes":[]}"#).unwrap();
        assert!(NoteStorage::new(kv).load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let kv = MemoryStorage::new();
        let storage = NoteStorage::new(kv.clone());
        let notes = vec![note("a"), note("b")];
        storage.save(&notes);
        assert_eq!(storage.load(), notes);
        assert!(kv.raw(STORAGE_KEY).unwrap().starts_with('['));
    }

    #[test]
    fn test_failed_save_keeps_previous_blob() {
        let kv = MemoryStorage::new();
        let storage = NoteStorage::new(kv.clone());
        storage.save(&[note("a")]);

        kv.set_fail_writes(true);
        storage.save(&[note("a"), note("b")]);

        assert_eq!(storage.load().len(), 1);
    }
}
