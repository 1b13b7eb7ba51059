// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations for testing.
//!
//! This module provides a mock backing store with its own key-scoping rule
//! and resource tracking, and checks that the typed layer delegates to it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use typedcfg::domain::{ConfigError, ConfigKey, ConfigValue, Result, TypedValue, ValueType};
use typedcfg::ports::BackingStore;
use typedcfg::service::TypedConfigStore;

/// A mock backing store for testing.
///
/// Keys are namespaced with `/` rather than `.`, values are held as strings
/// only, and `close` calls are counted.
#[derive(Debug, Default)]
pub struct MockBackingStore {
    values: Mutex<HashMap<String, String>>,
    closes: Arc<AtomicUsize>,
    should_fail_duplicate: bool,
}

impl MockBackingStore {
    /// Creates an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to the mock store.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.lock().unwrap().insert(key.into(), value.into());
        self
    }

    /// Sets whether duplicate should fail.
    pub fn with_failing_duplicate(mut self, should_fail: bool) -> Self {
        self.should_fail_duplicate = should_fail;
        self
    }

    /// Returns a handle to the close counter.
    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.closes)
    }
}

impl BackingStore for MockBackingStore {
    fn name(&self) -> &str {
        "mock"
    }

    fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.values.lock().unwrap().contains_key(key))
    }

    fn get_property(&self, key: &str) -> Result<Option<ConfigValue>> {
        Ok(self
            .values
            .lock()
            .unwrap()
            .get(key)
            .map(|v| ConfigValue::from(v.as_str())))
    }

    fn get_keys(&self) -> Result<Box<dyn Iterator<Item = ConfigKey> + '_>> {
        let keys: Vec<ConfigKey> = self
            .values
            .lock()
            .unwrap()
            .keys()
            .map(|k| ConfigKey::from(k.as_str()))
            .collect();
        Ok(Box::new(keys.into_iter()))
    }

    fn get_keys_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> Result<Box<dyn Iterator<Item = ConfigKey> + 'a>> {
        let scope = format!("{}/", prefix);
        let keys = self.get_keys()?;
        Ok(Box::new(keys.filter(move |k| k.as_str().starts_with(&scope))))
    }

    fn set_property(&self, key: &str, value: ConfigValue) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn clear_property(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }

    fn duplicate(&self) -> Result<Box<dyn BackingStore>> {
        if self.should_fail_duplicate {
            return Err(ConfigError::SourceError {
                source_name: "mock".to_string(),
                message: "Mock duplicate failure".to_string(),
                source: None,
            });
        }
        Ok(Box::new(MockBackingStore {
            values: Mutex::new(self.values.lock().unwrap().clone()),
            closes: Arc::new(AtomicUsize::new(0)),
            should_fail_duplicate: false,
        }))
    }

    fn close(&self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn test_prefix_scoping_is_delegated_to_backing_store() {
    let store = TypedConfigStore::from_store(
        MockBackingStore::new()
            .with_value("storage/backend", "cql")
            .with_value("storage/port", "9042")
            .with_value("storage.legacy", "x")
            .with_value("index/search", "es"),
    );

    let mut keys: Vec<String> = store
        .get_keys(Some("storage"))
        .unwrap()
        .into_iter()
        .map(ConfigKey::into_string)
        .collect();
    keys.sort();
    assert_eq!(keys, vec!["storage/backend", "storage/port"]);
    assert_eq!(store.get_keys(Some("")).unwrap().len(), 4);
}

#[test]
fn test_string_only_store_still_coerces() {
    let store = TypedConfigStore::from_store(MockBackingStore::new());
    store.set_value("port", 9042i32);
    store.set_value("enabled", true);

    assert_eq!(store.get_as::<i32>("port").unwrap(), Some(9042));
    assert_eq!(store.get_as::<bool>("enabled").unwrap(), Some(true));
    assert_eq!(
        store.get("port", &ValueType::Any).unwrap(),
        Some(TypedValue::Raw(ConfigValue::from("9042")))
    );
}

#[test]
fn test_close_reaches_backing_store_each_time() {
    let mock = MockBackingStore::new();
    let closes = mock.close_counter();
    let store = TypedConfigStore::from_store(mock);

    store.close().unwrap();
    store.close().unwrap();
    assert_eq!(closes.load(Ordering::SeqCst), 2);
}

#[test]
fn test_copy_failure_is_reported() {
    let store = TypedConfigStore::from_store(MockBackingStore::new().with_failing_duplicate(true));
    let err = store.copy().unwrap_err();
    assert!(matches!(err, ConfigError::SourceError { .. }));
}

#[test]
fn test_copy_uses_backing_duplicate() {
    let store = TypedConfigStore::from_store(MockBackingStore::new().with_value("a/b", "1"));
    let copy = store.copy().unwrap();

    assert_eq!(copy.backing().name(), "mock");
    store.remove("a/b");
    assert_eq!(copy.get_as::<u8>("a/b").unwrap(), Some(1));
    assert_eq!(store.get_as::<u8>("a/b").unwrap(), None);
}

#[test]
fn test_shared_backing_store() {
    let backing: Arc<dyn BackingStore> = Arc::new(MockBackingStore::new());
    let first = TypedConfigStore::new(Arc::clone(&backing));
    let second = TypedConfigStore::new(backing);

    first.set_value("shared", "yes");
    assert_eq!(second.get_as::<String>("shared").unwrap().as_deref(), Some("yes"));
}
