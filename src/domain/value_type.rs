// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type tokens and coerced results.
//!
//! A [`ValueType`] names the type a caller wants a stored value read as, and
//! a [`TypedValue`] is what the typed layer hands back. The
//! [`FromTypedValue`] and [`ConfigEnum`] traits connect both to ordinary Rust
//! types so callers can write `store.get_as::<u32>("port")`.

use crate::domain::config_value::ConfigValue;
use crate::domain::duration::Duration;
use crate::domain::number::{Number, NumericKind};
use std::fmt;

/// The type a stored value should be coerced to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueType {
    /// The string form of the value
    Text,
    /// An array of the given element type; only `Text` elements are supported
    Array(Box<ValueType>),
    /// A boolean
    Bool,
    /// A number of the given kind
    Numeric(NumericKind),
    /// One constant of the given enumeration
    Enum(EnumType),
    /// A duration
    Duration,
    /// The stored value itself, without coercion
    Any,
}

impl ValueType {
    /// The string array type.
    pub fn string_array() -> Self {
        ValueType::Array(Box::new(ValueType::Text))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Text => f.write_str("String"),
            ValueType::Array(element) => write!(f, "[{}]", element),
            ValueType::Bool => f.write_str("bool"),
            ValueType::Numeric(kind) => write!(f, "{}", kind),
            ValueType::Enum(enum_type) => write!(f, "enum {}", enum_type.name()),
            ValueType::Duration => f.write_str("Duration"),
            ValueType::Any => f.write_str("any"),
        }
    }
}

/// Describes an enumeration: its name and its constants in declaration order.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::value_type::EnumType;
///
/// let color = EnumType::new("Color", ["RED", "GREEN", "BLUE"]);
/// assert_eq!(color.labels().len(), 3);
/// assert_eq!(color.lookup("GREEN").map(|c| c.ordinal), Some(1));
/// assert!(color.lookup("PURPLE").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumType {
    name: String,
    labels: Vec<String>,
}

impl EnumType {
    /// Creates a descriptor from a name and the constant labels.
    pub fn new<I, S>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds the descriptor of a Rust enum implementing [`ConfigEnum`].
    pub fn of<E: ConfigEnum>() -> Self {
        Self::new(E::TYPE_NAME, E::variants().iter().map(|v| v.label()))
    }

    /// The enumeration's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The constant labels in declaration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Finds the first constant whose label equals `s` exactly.
    pub fn lookup(&self, s: &str) -> Option<EnumConstant> {
        self.labels
            .iter()
            .position(|label| label == s)
            .map(|ordinal| EnumConstant {
                ordinal,
                label: self.labels[ordinal].clone(),
            })
    }
}

/// One constant of an enumeration, as produced by coercion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumConstant {
    /// Position of the constant in its enumeration
    pub ordinal: usize,
    /// The constant's label
    pub label: String,
}

/// A Rust enum that can be read from configuration by label.
///
/// # Examples
///
/// ```
/// use typedcfg::domain::value_type::{ConfigEnum, EnumType};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Backend { Memory, Disk }
///
/// impl ConfigEnum for Backend {
///     const TYPE_NAME: &'static str = "Backend";
///
///     fn variants() -> &'static [Self] {
///         &[Backend::Memory, Backend::Disk]
///     }
///
///     fn label(&self) -> &'static str {
///         match self {
///             Backend::Memory => "memory",
///             Backend::Disk => "disk",
///         }
///     }
/// }
///
/// assert_eq!(EnumType::of::<Backend>().labels(), ["memory", "disk"]);
/// ```
pub trait ConfigEnum: Sized + Copy + 'static {
    /// The name used in error messages.
    const TYPE_NAME: &'static str;

    /// All constants in declaration order.
    fn variants() -> &'static [Self];

    /// The canonical string form of this constant.
    fn label(&self) -> &'static str;
}

/// A value coerced to a requested [`ValueType`].
#[derive(Clone, Debug, PartialEq)]
pub enum TypedValue {
    /// Result of a `Text` request
    Text(String),
    /// Result of a string array request
    TextList(Vec<String>),
    /// Result of a `Bool` request
    Bool(bool),
    /// Result of a `Numeric` request
    Number(Number),
    /// Result of an `Enum` request
    Enum(EnumConstant),
    /// Result of a `Duration` request
    Duration(Duration),
    /// Result of an `Any` request
    Raw(ConfigValue),
}

/// Rust types that can be produced by the typed layer.
pub trait FromTypedValue: Sized {
    /// The type token to request.
    fn value_type() -> ValueType;

    /// Extracts `Self` from a value coerced to [`Self::value_type`].
    ///
    /// Returns `None` if the value has a different shape.
    fn from_typed(value: TypedValue) -> Option<Self>;
}

impl FromTypedValue for String {
    fn value_type() -> ValueType {
        ValueType::Text
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl FromTypedValue for Vec<String> {
    fn value_type() -> ValueType {
        ValueType::string_array()
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::TextList(items) => Some(items),
            _ => None,
        }
    }
}

impl FromTypedValue for bool {
    fn value_type() -> ValueType {
        ValueType::Bool
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FromTypedValue for Duration {
    fn value_type() -> ValueType {
        ValueType::Duration
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::Duration(d) => Some(d),
            _ => None,
        }
    }
}

impl FromTypedValue for ConfigValue {
    fn value_type() -> ValueType {
        ValueType::Any
    }

    fn from_typed(value: TypedValue) -> Option<Self> {
        match value {
            TypedValue::Raw(raw) => Some(raw),
            _ => None,
        }
    }
}

macro_rules! from_typed_number {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromTypedValue for $ty {
                fn value_type() -> ValueType {
                    ValueType::Numeric(NumericKind::$variant)
                }

                fn from_typed(value: TypedValue) -> Option<Self> {
                    match value {
                        TypedValue::Number(Number::$variant(n)) => Some(n),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_typed_number! {
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    f32 => F32, f64 => F64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Color {
        Red,
        Green,
    }

    impl ConfigEnum for Color {
        const TYPE_NAME: &'static str = "Color";

        fn variants() -> &'static [Self] {
            &[Color::Red, Color::Green]
        }

        fn label(&self) -> &'static str {
            match self {
                Color::Red => "RED",
                Color::Green => "GREEN",
            }
        }
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::Text.to_string(), "String");
        assert_eq!(ValueType::string_array().to_string(), "[String]");
        assert_eq!(
            ValueType::Array(Box::new(ValueType::Numeric(NumericKind::I32))).to_string(),
            "[i32]"
        );
        assert_eq!(ValueType::Enum(EnumType::of::<Color>()).to_string(), "enum Color");
    }

    #[test]
    fn test_enum_type_of_rust_enum() {
        let enum_type = EnumType::of::<Color>();
        assert_eq!(enum_type.name(), "Color");
        assert_eq!(enum_type.labels(), ["RED", "GREEN"]);
    }

    #[test]
    fn test_enum_lookup_first_match_wins() {
        let enum_type = EnumType::new("Dup", ["A", "B", "A"]);
        assert_eq!(
            enum_type.lookup("A"),
            Some(EnumConstant {
                ordinal: 0,
                label: "A".to_string()
            })
        );
    }

    #[test]
    fn test_enum_lookup_is_case_sensitive() {
        let enum_type = EnumType::of::<Color>();
        assert!(enum_type.lookup("green").is_none());
    }

    #[test]
    fn test_from_typed_matches_shape() {
        assert_eq!(u16::from_typed(TypedValue::Number(Number::U16(9))), Some(9));
        assert_eq!(u16::from_typed(TypedValue::Number(Number::U32(9))), None);
        assert_eq!(bool::from_typed(TypedValue::Text("true".into())), None);
        assert_eq!(
            String::from_typed(TypedValue::Text("x".into())),
            Some("x".to_string())
        );
    }
}
