//! In-memory key-value store, used as a test double and for ephemeral
//! sessions.

use super::{KvResult, KvStore};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryKvStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot pre-populated.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Raw value currently held under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> KvResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> KvResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
