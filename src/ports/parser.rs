// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! turning configuration files of some format into the flat key/value entries a
//! backing store holds.

use crate::domain::{ConfigValue, Result};
use std::collections::HashMap;
use std::fmt;

/// A trait for parsing configuration files.
///
/// # Key Format
///
/// Parsers should flatten nested structures using dot notation. For example,
/// a YAML structure like:
///
/// ```yaml
/// storage:
///   hostname: localhost
///   port: 5432
/// ```
///
/// Should be parsed into:
/// - `storage.hostname` -> `Text("localhost")`
/// - `storage.port` -> `Number(I64(5432))`
///
/// Formats that carry native types should keep them; formats that don't
/// produce `ConfigValue::Text` and leave coercion to the typed layer.
///
/// # Examples
///
/// ```rust
/// use typedcfg::ports::ConfigParser;
/// use typedcfg::domain::{ConfigValue, Result};
/// use std::collections::HashMap;
///
/// struct LineParser;
///
/// impl ConfigParser for LineParser {
///     fn parse(&self, content: &str) -> Result<HashMap<String, ConfigValue>> {
///         Ok(content
///             .lines()
///             .enumerate()
///             .map(|(i, line)| (format!("line.{}", i), ConfigValue::from(line)))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["txt"]
///     }
/// }
///
/// let parsed = LineParser.parse("a\nb").unwrap();
/// assert_eq!(parsed.len(), 2);
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses configuration content into a flat key/value map.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the content is not valid for
    /// this format.
    fn parse(&self, content: &str) -> Result<HashMap<String, ConfigValue>>;

    /// Returns the file extensions this parser handles, without the dot.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if this parser handles files with `extension`.
    ///
    /// The comparison ignores ASCII case.
    fn supports_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

impl fmt::Debug for dyn ConfigParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigParser")
            .field("extensions", &self.supported_extensions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestParser;

    impl ConfigParser for TestParser {
        fn parse(&self, content: &str) -> Result<HashMap<String, ConfigValue>> {
            let mut result = HashMap::new();
            result.insert("content".to_string(), ConfigValue::from(content));
            Ok(result)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let result = TestParser.parse("hello").unwrap();
        assert_eq!(result.get("content"), Some(&ConfigValue::from("hello")));
    }

    #[test]
    fn test_supports_extension_ignores_case() {
        assert!(TestParser.supports_extension("TST"));
        assert!(TestParser.supports_extension("test"));
        assert!(!TestParser.supports_extension("yaml"));
    }
}
