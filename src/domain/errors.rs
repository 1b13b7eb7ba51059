// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! A missing key is never an error in this crate: lookups report absence with
//! `Ok(None)`. The variants below cover requests that cannot be answered and
//! failures of the stores and files that back them.

use thiserror::Error;

/// The boxed error type carried as the cause of a conversion or source failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::errors::ConfigError;
///
/// let error = ConfigError::UnsupportedType {
///     key: "storage.hosts".to_string(),
///     requested: "[i32]".to_string(),
/// };
/// assert!(error.to_string().contains("storage.hosts"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested type is not one the typed layer can produce.
    #[error("Unsupported data type {requested} requested for key '{key}'")]
    UnsupportedType {
        /// The key being read
        key: String,
        /// The name of the requested type
        requested: String,
    },

    /// The stored value could not be converted to the requested type.
    #[error(
        "Failed to convert value \"{raw}\" for key '{key}' to type {target_type}: {reason}"
    )]
    CoercionError {
        /// The key being read
        key: String,
        /// The string form of the stored value
        raw: String,
        /// The target type name
        target_type: String,
        /// Why the conversion failed
        reason: String,
        /// The underlying conversion error, if any
        #[source]
        source: Option<BoxError>,
    },

    /// A type declaration is unusable, independent of any stored data.
    #[error("Invariant violated for key '{key}': {message}")]
    InvariantViolation {
        /// The key being read
        key: String,
        /// Description of the violated invariant
        message: String,
    },

    /// An error occurred in a backing store.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the store that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<BoxError>,
    },

    /// Failed to parse a configuration file.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<BoxError>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `CoercionError` that has no underlying cause.
    pub fn coercion(
        key: impl Into<String>,
        raw: impl Into<String>,
        target_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::CoercionError {
            key: key.into(),
            raw: raw.into(),
            target_type: target_type.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Creates a `CoercionError` wrapping the error that caused it.
    ///
    /// The cause's message doubles as the reason.
    pub fn coercion_caused_by<E>(
        key: impl Into<String>,
        raw: impl Into<String>,
        target_type: impl Into<String>,
        cause: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::CoercionError {
            key: key.into(),
            raw: raw.into(),
            target_type: target_type.into(),
            reason: cause.to_string(),
            source: Some(Box::new(cause)),
        }
    }

    /// Returns `true` if this is a conversion failure of a stored value.
    pub fn is_coercion(&self) -> bool {
        matches!(self, ConfigError::CoercionError { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unsupported_type_error() {
        let error = ConfigError::UnsupportedType {
            key: "test.key".to_string(),
            requested: "[bool]".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unsupported data type [bool] requested for key 'test.key'"
        );
    }

    #[test]
    fn test_coercion_error_mentions_key_raw_and_target() {
        let error = ConfigError::coercion("test.key", "abc", "i32", "not a number");
        let message = error.to_string();
        assert!(message.contains("test.key"));
        assert!(message.contains("\"abc\""));
        assert!(message.contains("i32"));
        assert!(error.is_coercion());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_coercion_caused_by_keeps_source() {
        let cause = "abc".parse::<i32>().unwrap_err();
        let error = ConfigError::coercion_caused_by("test.key", "abc", "i32", cause);
        assert!(error.source().is_some());
        assert!(error.to_string().contains("invalid digit"));
    }

    #[test]
    fn test_invariant_violation_error() {
        let error = ConfigError::InvariantViolation {
            key: "test.key".to_string(),
            message: "zero-length enum".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invariant violated for key 'test.key': zero-length enum"
        );
        assert!(!error.is_coercion());
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "memory".to_string(),
            message: "lock poisoned".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'memory' error: lock poisoned"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "Invalid YAML".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid YAML"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }
}
