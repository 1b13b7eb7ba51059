// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype.
//!
//! Keys are dot-separated paths such as `storage.backend.hostname`. The
//! segment structure only matters for prefix scoping, see
//! [`ConfigKey::is_scoped_under`].

use std::borrow::Borrow;
use std::fmt;

/// Separator between the segments of a hierarchical key.
pub const KEY_SEPARATOR: char = '.';

/// A type-safe wrapper for configuration keys.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("storage.backend");
/// assert_eq!(key.as_str(), "storage.backend");
/// assert!(key.is_scoped_under("storage"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if this key lives under `prefix`.
    ///
    /// A key is scoped under a prefix when it is the prefix itself or when it
    /// continues the prefix with a separator. `storage.port` is scoped under
    /// `storage`, while `storagex` is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use typedcfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("storage.backend.port");
    /// assert!(key.is_scoped_under("storage"));
    /// assert!(key.is_scoped_under("storage.backend"));
    /// assert!(!key.is_scoped_under("stor"));
    /// ```
    pub fn is_scoped_under(&self, prefix: &str) -> bool {
        match self.0.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with(KEY_SEPARATOR),
            None => false,
        }
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
