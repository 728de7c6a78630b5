//! In-memory key-value store for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;
use crate::traits::KeyValueStore;

/// In-memory [`KeyValueStore`].
///
/// Clones share the same backing map, so a test can keep a handle and
/// inspect what the code under test persisted.
///
/// # Example
///
/// ```ignore
/// use hubdeck::adapters::mock::InMemoryStore;
/// use hubdeck::traits::{keys, KeyValueStore};
///
/// let store = InMemoryStore::new();
/// store.set(keys::USER, "admin")?;
/// assert_eq!(store.get(keys::USER)?, Some("admin".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    get_should_fail: Arc<Mutex<bool>>,
    set_should_fail: Arc<Mutex<bool>>,
    remove_should_fail: Arc<Mutex<bool>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut values = lock(&store.values);
            for (k, v) in entries {
                values.insert(k.to_string(), v.to_string());
            }
        }
        store
    }

    /// Configure whether get should fail.
    pub fn set_get_should_fail(&self, should_fail: bool) {
        *lock(&self.get_should_fail) = should_fail;
    }

    /// Configure whether set should fail.
    pub fn set_set_should_fail(&self, should_fail: bool) {
        *lock(&self.set_should_fail) = should_fail;
    }

    /// Configure whether remove should fail.
    pub fn set_remove_should_fail(&self, should_fail: bool) {
        *lock(&self.remove_should_fail) = should_fail;
    }

    /// Read a value without going through the trait or failure flags.
    pub fn peek(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if *lock(&self.get_should_fail) {
            return Err(StoreError::Other("Mock get failure".to_string()));
        }
        Ok(lock(&self.values).get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if *lock(&self.set_should_fail) {
            return Err(StoreError::Other("Mock set failure".to_string()));
        }
        lock(&self.values).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if *lock(&self.remove_should_fail) {
            return Err(StoreError::Other("Mock remove failure".to_string()));
        }
        lock(&self.values).remove(key);
        Ok(())
    }
}
