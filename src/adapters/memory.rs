// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory backing store.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::BackingStore;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A backing store that keeps every entry in a map guarded by a `RwLock`.
///
/// Values are kept exactly as written, so a number set through the typed
/// layer is read back as a native number. Keys enumerate in sorted order.
///
/// # Examples
///
/// ```rust
/// use typedcfg::adapters::MemoryStore;
/// use typedcfg::ports::BackingStore;
///
/// let store = MemoryStore::new()
///     .with_value("storage.backend", "cassandra")
///     .with_value("storage.port", 9160i32);
///
/// assert!(store.contains_key("storage.port").unwrap());
/// assert_eq!(store.get_string("storage.backend").unwrap().as_deref(), Some("cassandra"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<BTreeMap<String, ConfigValue>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given entries.
    pub fn from_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        let values = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }

    /// Adds an entry, builder style.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.write().insert(key.into(), value.into());
        self
    }

    /// Replaces every entry with `values`.
    pub fn replace_all(&self, values: HashMap<String, ConfigValue>) {
        let mut guard = self.write();
        guard.clear();
        guard.extend(values);
    }

    /// Returns a copy of all entries.
    pub fn snapshot(&self) -> Result<BTreeMap<String, ConfigValue>> {
        Ok(self.read()?.clone())
    }

    /// Number of entries.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` if the store has no entries.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, ConfigValue>>> {
        self.values.read().map_err(|_| ConfigError::SourceError {
            source_name: "memory".to_string(),
            message: "lock poisoned".to_string(),
            source: None,
        })
    }

    // Writers recover from poisoning so that set/clear stay infallible.
    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, ConfigValue>> {
        self.values
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        let values = match self.values.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        Self {
            values: RwLock::new(values),
        }
    }
}

impl BackingStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.read()?.contains_key(key))
    }

    fn get_property(&self, key: &str) -> Result<Option<ConfigValue>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn get_keys(&self) -> Result<Box<dyn Iterator<Item = ConfigKey> + '_>> {
        // Collected up front so no lock is held while the caller iterates
        let keys: Vec<ConfigKey> = self.read()?.keys().map(|k| ConfigKey::from(k.as_str())).collect();
        Ok(Box::new(keys.into_iter()))
    }

    fn set_property(&self, key: &str, value: ConfigValue) {
        self.write().insert(key.to_string(), value);
    }

    fn clear_property(&self, key: &str) {
        self.write().remove(key);
    }

    fn duplicate(&self) -> Result<Box<dyn BackingStore>> {
        Ok(Box::new(MemoryStore {
            values: RwLock::new(self.snapshot()?),
        }))
    }
}
