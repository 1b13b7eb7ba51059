// SPDX-License-Identifier: MIT OR Apache-2.0

//! Untyped configuration values.
//!
//! This module provides the `ConfigValue` type, the value a backing store
//! holds for a key. Depending on where it came from a value may already be a
//! native number, boolean or duration, or it may be plain text that still has
//! to be coerced by the typed layer.

use crate::domain::duration::Duration;
use crate::domain::number::Number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when a list is rendered as, or split from, a single string.
pub const LIST_DELIMITER: char = ',';

/// A value as stored by a backing store.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("5000");
/// assert_eq!(value.to_string(), "5000");
///
/// let value = ConfigValue::from(5000i32);
/// assert_eq!(value.to_string(), "5000");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A boolean
    Bool(bool),
    /// A number
    Number(Number),
    /// A duration with its unit
    Duration(Duration),
    /// A list of strings
    TextList(Vec<String>),
    /// Text that has not been interpreted
    Text(String),
}

impl ConfigValue {
    /// Returns the text if this value is `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// A short name of the stored representation, for log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Number(_) => "number",
            ConfigValue::Duration(_) => "duration",
            ConfigValue::TextList(_) => "list",
            ConfigValue::Text(_) => "text",
        }
    }
}

/// Renders the string form of the value.
///
/// Lists are joined with [`LIST_DELIMITER`] so that splitting the result
/// yields the original elements back.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Number(n) => write!(f, "{}", n),
            ConfigValue::Duration(d) => write!(f, "{}", d),
            ConfigValue::TextList(items) => {
                let delimiter = LIST_DELIMITER.to_string();
                f.write_str(&items.join(delimiter.as_str()))
            }
            ConfigValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<Duration> for ConfigValue {
    fn from(d: Duration) -> Self {
        ConfigValue::Duration(d)
    }
}

impl From<Number> for ConfigValue {
    fn from(n: Number) -> Self {
        ConfigValue::Number(n)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        ConfigValue::TextList(items)
    }
}

impl From<&[&str]> for ConfigValue {
    fn from(items: &[&str]) -> Self {
        ConfigValue::TextList(items.iter().map(|s| s.to_string()).collect())
    }
}

macro_rules! config_value_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ConfigValue {
                fn from(n: $ty) -> Self {
                    ConfigValue::Number(Number::from(n))
                }
            }
        )*
    };
}

config_value_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
