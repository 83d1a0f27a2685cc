//! Persistence boundary for UI preferences.
//!
//! In the browser this is `localStorage`; tests and non-browser contexts use the
//! in-memory or unavailable stores below.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Slot holding the user's preferred sample dialect.
pub const LANGUAGE_SLOT: &str = "language";

/// Label used when nothing has been stored yet.
pub const DEFAULT_LANGUAGE: &str = "ES6";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    #[error("preference storage is not available")]
    Unavailable,
    #[error("preference storage rejected the write: {0}")]
    Rejected(String),
}

/// String-keyed persistent storage shared by the whole session.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, slot: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, slot: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store. Clones share the same map, so a clone handed to a second
/// widget behaves like the same browser session after a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one slot.
    pub fn with_slot(slot: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(slot, value);
        store
    }

    fn insert(&self, slot: &str, value: &str) {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(slot.to_string(), value.to_string());
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, slot: &str) -> Result<Option<String>, PreferenceError> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), PreferenceError> {
        self.insert(slot, value);
        Ok(())
    }
}

/// Store for contexts without persistent storage (server rendering, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailablePreferenceStore;

impl PreferenceStore for UnavailablePreferenceStore {
    fn get(&self, _slot: &str) -> Result<Option<String>, PreferenceError> {
        Err(PreferenceError::Unavailable)
    }

    fn set(&self, _slot: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_slots() {
        let store = MemoryPreferenceStore::new();
        let reloaded = store.clone();

        assert_eq!(store.get(LANGUAGE_SLOT), Ok(None));
        store.set(LANGUAGE_SLOT, "ES5").unwrap();
        assert_eq!(reloaded.get(LANGUAGE_SLOT), Ok(Some("ES5".to_string())));
    }

    #[test]
    fn test_unavailable_store_errors() {
        let store = UnavailablePreferenceStore;
        assert_eq!(store.get(LANGUAGE_SLOT), Err(PreferenceError::Unavailable));
        assert_eq!(
            store.set(LANGUAGE_SLOT, "ES5"),
            Err(PreferenceError::Unavailable)
        );
    }
}
