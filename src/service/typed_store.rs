// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration store.
//!
//! This module provides `TypedConfigStore`, which reads values out of a
//! [`BackingStore`] coerced to the type the caller asks for, and writes
//! values back untouched.

use crate::adapters::MemoryStore;
use crate::domain::coercion::{coerce_duration, coerce_enum, coerce_numeric};
use crate::domain::{
    ConfigEnum, ConfigError, ConfigKey, ConfigValue, EnumType, FromTypedValue, ReadConfiguration,
    Result, TypedValue, ValueType, WriteConfiguration,
};
use crate::ports::BackingStore;
use std::fmt;
use std::sync::Arc;

/// Typed access to an untyped key/value store.
///
/// The store holds a shared handle to its backing store and adds no locking
/// of its own. Reads of an unset key return `Ok(None)`; reads of a set key
/// that cannot be coerced return an error naming the key, the stored value
/// and the requested type.
///
/// # Examples
///
/// ```rust
/// use typedcfg::domain::{Duration, TimeUnit, ValueType, TypedValue};
/// use typedcfg::service::TypedConfigStore;
///
/// # fn main() -> typedcfg::domain::Result<()> {
/// let store = TypedConfigStore::in_memory();
/// store.set_value("storage.port", "8182");
/// store.set_value("storage.timeout", "10 s");
///
/// assert_eq!(store.get_as::<u16>("storage.port")?, Some(8182));
/// assert_eq!(
///     store.get("storage.timeout", &ValueType::Duration)?,
///     Some(TypedValue::Duration(Duration::new(10, TimeUnit::Seconds)))
/// );
/// assert_eq!(store.get_as::<String>("storage.hostname")?, None);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TypedConfigStore {
    backing: Arc<dyn BackingStore>,
}

impl TypedConfigStore {
    /// Creates a typed store over a shared backing store.
    pub fn new(backing: Arc<dyn BackingStore>) -> Self {
        Self { backing }
    }

    /// Creates a typed store that owns `backing`.
    pub fn from_store<B: BackingStore + 'static>(backing: B) -> Self {
        Self::new(Arc::new(backing))
    }

    /// Creates a typed store over an empty [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::from_store(MemoryStore::new())
    }

    /// Returns the backing store.
    pub fn backing(&self) -> &Arc<dyn BackingStore> {
        &self.backing
    }

    /// Returns `true` if `key` is set.
    pub fn contains_key(&self, key: &str) -> Result<bool> {
        self.backing.contains_key(key)
    }

    /// Reads `key` coerced to `value_type`.
    ///
    /// # Errors
    ///
    /// * `ConfigError::UnsupportedType` for arrays of anything but strings
    /// * `ConfigError::CoercionError` if the stored value cannot be read as
    ///   `value_type`
    /// * `ConfigError::InvariantViolation` for an enum type without constants
    pub fn get(&self, key: &str, value_type: &ValueType) -> Result<Option<TypedValue>> {
        if !self.backing.contains_key(key)? {
            return Ok(None);
        }

        tracing::trace!(key = key, requested = %value_type, store = self.backing.name(), "get");

        let value = match value_type {
            ValueType::Array(element) => match element.as_ref() {
                ValueType::Text => self
                    .backing
                    .get_string_array(key)?
                    .map(TypedValue::TextList),
                _ => {
                    return Err(ConfigError::UnsupportedType {
                        key: key.to_string(),
                        requested: value_type.to_string(),
                    })
                }
            },
            ValueType::Numeric(kind) => self
                .backing
                .get_property(key)?
                .map(|raw| coerce_numeric(key, &raw, *kind))
                .transpose()?
                .map(TypedValue::Number),
            ValueType::Bool => self.backing.get_boolean(key)?.map(TypedValue::Bool),
            ValueType::Text => self.backing.get_string(key)?.map(TypedValue::Text),
            ValueType::Enum(enum_type) => self
                .backing
                .get_property(key)?
                .map(|raw| coerce_enum(key, &raw, enum_type))
                .transpose()?
                .map(TypedValue::Enum),
            ValueType::Any => self.backing.get_property(key)?.map(TypedValue::Raw),
            ValueType::Duration => self
                .backing
                .get_property(key)?
                .map(|raw| coerce_duration(key, &raw))
                .transpose()?
                .map(TypedValue::Duration),
        };

        Ok(value)
    }

    /// Reads `key` as the Rust type `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typedcfg::service::TypedConfigStore;
    ///
    /// let store = TypedConfigStore::in_memory();
    /// store.set_value("cache.enabled", "on");
    /// assert_eq!(store.get_as::<bool>("cache.enabled").unwrap(), Some(true));
    /// ```
    pub fn get_as<T: FromTypedValue>(&self, key: &str) -> Result<Option<T>> {
        let value_type = T::value_type();
        match self.get(key, &value_type)? {
            None => Ok(None),
            Some(value) => T::from_typed(value).map(Some).ok_or_else(|| {
                ConfigError::UnsupportedType {
                    key: key.to_string(),
                    requested: value_type.to_string(),
                }
            }),
        }
    }

    /// Reads `key` as `T`, falling back to `default` when the key is unset.
    ///
    /// Coercion failures are still returned as errors.
    pub fn get_or<T: FromTypedValue>(&self, key: &str, default: T) -> Result<T> {
        Ok(self.get_as(key)?.unwrap_or(default))
    }

    /// Reads `key` as a constant of the Rust enum `E`, matched by label.
    pub fn get_enum<E: ConfigEnum>(&self, key: &str) -> Result<Option<E>> {
        let enum_type = EnumType::of::<E>();
        match self.get(key, &ValueType::Enum(enum_type))? {
            Some(TypedValue::Enum(constant)) => Ok(E::variants().get(constant.ordinal).copied()),
            _ => Ok(None),
        }
    }

    /// Stores `value` under `key` as-is; `None` removes the key.
    pub fn set(&self, key: &str, value: Option<ConfigValue>) {
        match value {
            None => self.remove(key),
            Some(value) => {
                tracing::debug!(key = key, kind = value.kind_name(), "set");
                self.backing.set_property(key, value);
            }
        }
    }

    /// Stores anything convertible into a [`ConfigValue`] under `key`.
    pub fn set_value(&self, key: &str, value: impl Into<ConfigValue>) {
        self.set(key, Some(value.into()));
    }

    /// Removes `key`. Removing an unset key does nothing.
    pub fn remove(&self, key: &str) {
        tracing::debug!(key = key, "remove");
        self.backing.clear_property(key);
    }

    /// Lists the keys scoped under `prefix`, or all keys when `prefix` is
    /// `None` or blank.
    ///
    /// Ordering follows the backing store.
    pub fn get_keys(&self, prefix: Option<&str>) -> Result<Vec<ConfigKey>> {
        let keys: Vec<ConfigKey> = match prefix.filter(|p| !p.trim().is_empty()) {
            Some(prefix) => self.backing.get_keys_with_prefix(prefix)?.collect(),
            None => self.backing.get_keys()?.collect(),
        };
        Ok(keys)
    }

    /// Creates an independent store over a duplicate of the backing store.
    ///
    /// Later writes to either store are not visible in the other.
    pub fn copy(&self) -> Result<TypedConfigStore> {
        let duplicate = self.backing.duplicate()?;
        tracing::debug!(store = self.backing.name(), "copied configuration store");
        Ok(Self::new(Arc::from(duplicate)))
    }

    /// Releases resources held by the backing store.
    pub fn close(&self) -> Result<()> {
        tracing::debug!(store = self.backing.name(), "close");
        self.backing.close()
    }
}

impl Default for TypedConfigStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for TypedConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedConfigStore")
            .field("backing", &self.backing.name())
            .finish()
    }
}

impl ReadConfiguration for TypedConfigStore {
    fn get(&self, key: &str, value_type: &ValueType) -> Result<Option<TypedValue>> {
        TypedConfigStore::get(self, key, value_type)
    }

    fn get_keys(&self, prefix: Option<&str>) -> Result<Vec<ConfigKey>> {
        TypedConfigStore::get_keys(self, prefix)
    }

    fn close(&self) -> Result<()> {
        TypedConfigStore::close(self)
    }
}

impl WriteConfiguration for TypedConfigStore {
    fn set(&self, key: &str, value: Option<ConfigValue>) {
        TypedConfigStore::set(self, key, value)
    }

    fn remove(&self, key: &str) {
        TypedConfigStore::remove(self, key)
    }

    fn copy(&self) -> Result<Box<dyn WriteConfiguration>> {
        Ok(Box::new(TypedConfigStore::copy(self)?))
    }
}
