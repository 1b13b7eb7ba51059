// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backing store trait definition.
//!
//! This module defines the `BackingStore` trait, the port through which the
//! typed layer reaches the untyped key/value map underneath it. Any storage
//! (an in-memory map, a loaded file, a remote service) can sit behind this
//! trait.

use crate::domain::coercion::{parse_boolean, split_list};
use crate::domain::{ConfigKey, ConfigValue, Result};

/// An untyped key/value map.
///
/// Every method takes `&self`. Implementations that allow mutation provide
/// their own synchronization, and a `TypedConfigStore` is exactly as
/// thread-safe as the store behind it.
///
/// Only the required methods touch storage. The string, list and boolean
/// accessors have defaults derived from [`BackingStore::get_property`] that a
/// store may override when it has a native representation.
///
/// # Examples
///
/// ```rust
/// use typedcfg::ports::BackingStore;
/// use typedcfg::domain::{ConfigKey, ConfigValue, Result};
///
/// /// A store with a single fixed entry.
/// struct Fixed;
///
/// impl BackingStore for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn contains_key(&self, key: &str) -> Result<bool> {
///         Ok(key == "answer")
///     }
///
///     fn get_property(&self, key: &str) -> Result<Option<ConfigValue>> {
///         Ok((key == "answer").then(|| ConfigValue::from(42i32)))
///     }
///
///     fn get_keys(&self) -> Result<Box<dyn Iterator<Item = ConfigKey> + '_>> {
///         Ok(Box::new(std::iter::once(ConfigKey::from("answer"))))
///     }
///
///     fn set_property(&self, _key: &str, _value: ConfigValue) {}
///
///     fn clear_property(&self, _key: &str) {}
///
///     fn duplicate(&self) -> Result<Box<dyn BackingStore>> {
///         Ok(Box::new(Fixed))
///     }
/// }
///
/// assert_eq!(Fixed.get_string("answer").unwrap().as_deref(), Some("42"));
/// ```
pub trait BackingStore: Send + Sync {
    /// Returns the name of this store, used in logs and error messages.
    fn name(&self) -> &str;

    /// Returns `true` if the store holds a value for `key`.
    fn contains_key(&self, key: &str) -> Result<bool>;

    /// Returns the value stored for `key` as-is.
    fn get_property(&self, key: &str) -> Result<Option<ConfigValue>>;

    /// Returns every key in the store.
    ///
    /// The order is defined by the implementation.
    fn get_keys(&self) -> Result<Box<dyn Iterator<Item = ConfigKey> + '_>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_property(&self, key: &str, value: ConfigValue);

    /// Removes the value stored under `key`, if any.
    fn clear_property(&self, key: &str);

    /// Creates an independent store of the same kind holding a copy of every
    /// entry.
    fn duplicate(&self) -> Result<Box<dyn BackingStore>>;

    /// Returns the keys scoped under `prefix`.
    ///
    /// The default keeps the keys that equal `prefix` or continue it with a
    /// `.` separator.
    fn get_keys_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> Result<Box<dyn Iterator<Item = ConfigKey> + 'a>> {
        let keys = self.get_keys()?;
        Ok(Box::new(keys.filter(move |key| key.is_scoped_under(prefix))))
    }

    /// Returns the string form of the value stored for `key`.
    ///
    /// A list yields its first element.
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get_property(key)?.map(|value| match value {
            ConfigValue::TextList(items) => items.into_iter().next().unwrap_or_default(),
            other => other.to_string(),
        }))
    }

    /// Returns the value stored for `key` as a list of strings.
    ///
    /// A single text value is split on `,`.
    fn get_string_array(&self, key: &str) -> Result<Option<Vec<String>>> {
        Ok(self.get_property(key)?.map(|value| match value {
            ConfigValue::TextList(items) => items,
            ConfigValue::Text(s) => split_list(&s),
            other => vec![other.to_string()],
        }))
    }

    /// Returns the value stored for `key` as a boolean.
    fn get_boolean(&self, key: &str) -> Result<Option<bool>> {
        match self.get_property(key)? {
            None => Ok(None),
            Some(ConfigValue::Bool(b)) => Ok(Some(b)),
            Some(other) => parse_boolean(key, &other.to_string()).map(Some),
        }
    }

    /// Releases resources held by the store.
    ///
    /// Must be safe to call more than once. The default does nothing.
    fn close(&self) -> Result<()> {
        Ok(())
    }
}
