// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration traits.
//!
//! `ReadConfiguration` and `WriteConfiguration` are the interface callers use
//! to read and write configuration by key and requested type. The crate's
//! implementation is `service::TypedConfigStore`.

use crate::domain::{ConfigKey, ConfigValue, Result, TypedValue, ValueType};

/// Read access to typed configuration.
pub trait ReadConfiguration {
    /// Reads `key` coerced to `value_type`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - The key is set and was coerced
    /// * `Ok(None)` - The key is not set
    /// * `Err(ConfigError)` - The key is set but cannot be read as `value_type`
    fn get(&self, key: &str, value_type: &ValueType) -> Result<Option<TypedValue>>;

    /// Lists the keys scoped under `prefix`, or every key when `prefix` is
    /// `None` or blank.
    fn get_keys(&self, prefix: Option<&str>) -> Result<Vec<ConfigKey>>;

    /// Releases resources held by the configuration. Safe to call repeatedly.
    fn close(&self) -> Result<()>;
}

/// Read and write access to typed configuration.
pub trait WriteConfiguration: ReadConfiguration {
    /// Stores `value` under `key`; `None` removes the key.
    fn set(&self, key: &str, value: Option<ConfigValue>);

    /// Removes `key`. Removing an absent key does nothing.
    fn remove(&self, key: &str);

    /// Creates an independent copy of this configuration.
    fn copy(&self) -> Result<Box<dyn WriteConfiguration>>;
}
