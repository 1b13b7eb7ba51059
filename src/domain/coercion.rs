// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rules for turning stored values into typed ones.
//!
//! Every function takes the key being read so that failures can name it.

use crate::domain::config_value::{ConfigValue, LIST_DELIMITER};
use crate::domain::duration::{Duration, TimeUnit};
use crate::domain::errors::{ConfigError, Result};
use crate::domain::number::{Number, NumericKind};
use crate::domain::value_type::{EnumConstant, EnumType, ValueType};

/// Reads a stored value as a number of the given kind.
///
/// A stored number of exactly that kind is returned unchanged. Anything else
/// is parsed from its string form.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::coercion::coerce_numeric;
/// use typedcfg::domain::{ConfigValue, Number, NumericKind};
///
/// let n = coerce_numeric("port", &ConfigValue::from("42"), NumericKind::I32).unwrap();
/// assert_eq!(n, Number::I32(42));
/// ```
pub fn coerce_numeric(key: &str, raw: &ConfigValue, kind: NumericKind) -> Result<Number> {
    if let ConfigValue::Number(n) = raw {
        if n.kind() == kind {
            return Ok(*n);
        }
    }

    let s = raw.to_string();
    kind.parse(&s).map_err(|e| {
        tracing::error!(
            key = key,
            value = %s,
            requested = %kind,
            "Failed to parse configuration string into numeric type: {}",
            e
        );
        ConfigError::CoercionError {
            key: key.to_string(),
            reason: e.to_string(),
            raw: s,
            target_type: kind.to_string(),
            source: Some(e),
        }
    })
}

/// Reads a stored value as one constant of `enum_type`.
///
/// The string form of the value is compared against each label in order and
/// the first exact match wins.
pub fn coerce_enum(key: &str, raw: &ConfigValue, enum_type: &EnumType) -> Result<EnumConstant> {
    if enum_type.labels().is_empty() {
        return Err(ConfigError::InvariantViolation {
            key: key.to_string(),
            message: format!("zero-length enum {}", enum_type.name()),
        });
    }

    let s = raw.to_string();
    enum_type.lookup(&s).ok_or_else(|| {
        let reason = format!("no match for string \"{}\" in enum {}", s, enum_type.name());
        ConfigError::coercion(key, s, ValueType::Enum(enum_type.clone()).to_string(), reason)
    })
}

/// Reads a stored value as a duration.
///
/// A stored duration is returned unchanged. Otherwise the string form must be
/// a whole number, optionally followed by a unit name: `"250"` is 250
/// milliseconds and `"5 s"` is five seconds. Runs of whitespace separate the
/// two tokens.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::coercion::coerce_duration;
/// use typedcfg::domain::{ConfigValue, Duration, TimeUnit};
///
/// let d = coerce_duration("timeout", &ConfigValue::from("5 s")).unwrap();
/// assert_eq!(d, Duration::new(5, TimeUnit::Seconds));
///
/// assert!(coerce_duration("timeout", &ConfigValue::from("")).is_err());
/// ```
pub fn coerce_duration(key: &str, raw: &ConfigValue) -> Result<Duration> {
    if let ConfigValue::Duration(d) = raw {
        return Ok(*d);
    }

    let s = raw.to_string();
    let target = ValueType::Duration.to_string();
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let (magnitude, unit) = match tokens.as_slice() {
        [magnitude] => (*magnitude, TimeUnit::Milliseconds),
        [magnitude, unit] => match unit.parse::<TimeUnit>() {
            Ok(unit) => (*magnitude, unit),
            Err(e) => return Err(ConfigError::coercion_caused_by(key, s.as_str(), target, e)),
        },
        _ => {
            let reason = format!("cannot parse time duration from \"{}\"", s);
            return Err(ConfigError::coercion(key, s.as_str(), target, reason));
        }
    };

    match magnitude.parse::<i64>() {
        Ok(magnitude) => Ok(Duration::new(magnitude, unit)),
        Err(e) => Err(ConfigError::coercion_caused_by(key, s.as_str(), target, e)),
    }
}

/// Parses a boolean token.
///
/// Recognizes the following values (case-insensitive):
/// - `true`: "true", "yes", "1", "on"
/// - `false`: "false", "no", "0", "off"
pub fn parse_boolean(key: &str, s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(ConfigError::coercion(
            key,
            s,
            ValueType::Bool.to_string(),
            "expected one of true/false, yes/no, on/off, 1/0",
        )),
    }
}

/// Splits a delimited string into trimmed, non-empty elements.
///
/// ```
/// use typedcfg::domain::coercion::split_list;
///
/// assert_eq!(split_list("a, b,,c "), vec!["a", "b", "c"]);
/// assert!(split_list("").is_empty());
/// ```
pub fn split_list(s: &str) -> Vec<String> {
    s.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
