// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML configuration parser.

use crate::domain::{ConfigError, ConfigValue, Number, Result};
use crate::ports::ConfigParser;
use std::collections::HashMap;

/// YAML parser implementation.
///
/// Nested mappings are flattened into dot-notation keys. Scalars keep their
/// YAML type: integers become `Number::I64` (or `Number::U64` when too large),
/// floats `Number::F64` and booleans `Bool`. A sequence of scalars becomes a
/// single `TextList` entry; a sequence holding mappings or nested sequences
/// is flattened with indexed keys such as `hosts.0.name`. The document root
/// must be a mapping; an empty document yields no entries.
///
/// # Examples
///
/// ```rust
/// use typedcfg::adapters::YamlParser;
/// use typedcfg::domain::ConfigValue;
/// use typedcfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "storage:\n  hostname: localhost\n  port: 5432";
/// let result = parser.parse(yaml_content).unwrap();
/// assert_eq!(result.get("storage.hostname"), Some(&ConfigValue::from("localhost")));
/// assert_eq!(result.get("storage.port"), Some(&ConfigValue::from(5432i64)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn scalar(value: &serde_yaml::Value) -> Option<ConfigValue> {
        match value {
            serde_yaml::Value::String(s) => Some(ConfigValue::Text(s.clone())),
            serde_yaml::Value::Bool(b) => Some(ConfigValue::Bool(*b)),
            serde_yaml::Value::Null => Some(ConfigValue::Text(String::new())),
            serde_yaml::Value::Number(n) => {
                let number = if let Some(i) = n.as_i64() {
                    Number::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Number::U64(u)
                } else {
                    Number::F64(n.as_f64()?)
                };
                Some(ConfigValue::Number(number))
            }
            _ => None,
        }
    }

    /// Flattens a YAML value into a flat map with dot notation keys.
    fn flatten_yaml(
        value: &serde_yaml::Value,
        prefix: &str,
        result: &mut HashMap<String, ConfigValue>,
    ) {
        match value {
            serde_yaml::Value::Mapping(map) => {
                for (key, val) in map {
                    if let Some(key_str) = key.as_str() {
                        let new_prefix = if prefix.is_empty() {
                            key_str.to_string()
                        } else {
                            format!("{}.{}", prefix, key_str)
                        };
                        Self::flatten_yaml(val, &new_prefix, result);
                    }
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                let scalars: Option<Vec<String>> = seq
                    .iter()
                    .map(|item| Self::scalar(item).map(|v| v.to_string()))
                    .collect();
                match scalars {
                    Some(items) => {
                        result.insert(prefix.to_string(), ConfigValue::TextList(items));
                    }
                    None => {
                        for (i, val) in seq.iter().enumerate() {
                            let new_prefix = format!("{}.{}", prefix, i);
                            Self::flatten_yaml(val, &new_prefix, result);
                        }
                    }
                }
            }
            serde_yaml::Value::Tagged(tagged) => Self::flatten_yaml(&tagged.value, prefix, result),
            // a scalar under an empty mapping key
            _ if prefix.is_empty() => {}
            scalar => {
                if let Some(value) = Self::scalar(scalar) {
                    result.insert(prefix.to_string(), value);
                }
            }
        }
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, ConfigValue>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        let root = match value {
            serde_yaml::Value::Tagged(tagged) => tagged.value,
            other => other,
        };

        let mut result = HashMap::new();
        match &root {
            serde_yaml::Value::Mapping(_) => Self::flatten_yaml(&root, "", &mut result),
            serde_yaml::Value::Null => {}
            other => {
                let found = match other {
                    serde_yaml::Value::Sequence(_) => "a sequence",
                    _ => "a scalar",
                };
                return Err(ConfigError::ParseError {
                    message: format!("YAML document root must be a mapping, found {}", found),
                    source: None,
                });
            }
        }
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
