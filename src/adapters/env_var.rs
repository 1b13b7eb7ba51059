// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable loader.
//!
//! This module seeds a [`MemoryStore`] from environment variables.

use crate::adapters::MemoryStore;
use crate::domain::ConfigValue;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Reads environment variables into configuration entries.
///
/// Supports optional prefix filtering (e.g., only read variables starting
/// with "APP_"), lowercasing and turning underscores into dots, so that
/// `APP_STORAGE_PORT` can become `storage.port`. Every value is loaded as
/// `Text`.
///
/// # Examples
///
/// ```rust
/// use typedcfg::adapters::EnvVarLoader;
/// use typedcfg::service::TypedConfigStore;
///
/// let store = TypedConfigStore::from_store(
///     EnvVarLoader::with_prefix("MYAPP_").lowercase_keys(true).into_store(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarLoader {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Whether to convert keys to lowercase
    lowercase_keys: bool,
    /// Whether to replace underscores with dots
    replace_underscores: bool,
    /// Injected variables used instead of the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarLoader {
    /// Creates a loader reading every environment variable.
    pub fn new() -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            replace_underscores: true,
            values: None,
        }
    }

    /// Creates a loader reading only variables that start with `prefix`.
    ///
    /// The prefix is stripped from the resulting keys.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::new()
        }
    }

    /// Creates a loader over the given variables instead of the process
    /// environment.
    ///
    /// **Note**: This is primarily intended for tests.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Some(values),
            ..Self::new()
        }
    }

    /// Sets whether to convert keys to lowercase.
    pub fn lowercase_keys(mut self, enabled: bool) -> Self {
        self.lowercase_keys = enabled;
        self
    }

    /// Sets whether to replace underscores with dots in keys (default: on).
    pub fn replace_underscores(mut self, enabled: bool) -> Self {
        self.replace_underscores = enabled;
        self
    }

    /// Reads the variables and applies the key transformations.
    pub fn load(&self) -> HashMap<String, ConfigValue> {
        let vars: Box<dyn Iterator<Item = (String, String)>> = match &self.values {
            Some(values) => Box::new(values.clone().into_iter()),
            None => Box::new(env::vars_os().filter_map(|(key, value)| {
                let name = key.to_string_lossy().into_owned();
                match (key.into_string(), value.into_string()) {
                    (Ok(key), Ok(value)) => Some((key, value)),
                    _ => {
                        tracing::debug!(
                            "Skipping environment variable with non-UTF-8 key or value: {}",
                            name
                        );
                        None
                    }
                }
            })),
        };

        let mut loaded = HashMap::new();
        for (key, value) in vars {
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            let key = match &self.prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(stripped) => stripped.to_string(),
                    None => continue,
                },
                None => key,
            };

            let mut transformed_key = key;
            if self.lowercase_keys {
                transformed_key = transformed_key.to_lowercase();
            }
            if self.replace_underscores {
                transformed_key = transformed_key.replace('_', ".");
            }

            loaded.insert(transformed_key, ConfigValue::Text(value));
        }

        tracing::debug!(
            "Loaded {} environment variables (prefix={:?}, lowercase={}, replace_underscores={})",
            loaded.len(),
            self.prefix,
            self.lowercase_keys,
            self.replace_underscores
        );

        loaded
    }

    /// Loads the variables into a new [`MemoryStore`].
    pub fn into_store(self) -> MemoryStore {
        MemoryStore::from_values(self.load())
    }
}

impl Default for EnvVarLoader {
    fn default() -> Self {
        Self::new()
    }
}
