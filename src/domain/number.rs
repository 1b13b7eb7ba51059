// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric values and the table of string parsers for each numeric kind.

use crate::domain::errors::BoxError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The numeric types a configuration value can be read as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl NumericKind {
    /// The Rust name of the primitive type.
    pub fn type_name(&self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
        }
    }

    /// Parses `s` into a number of this kind.
    ///
    /// The parser is looked up in [`NUMERIC_PARSERS`]; supporting another kind
    /// means adding a row there.
    pub fn parse(&self, s: &str) -> std::result::Result<Number, BoxError> {
        let (_, parse) = NUMERIC_PARSERS
            .iter()
            .find(|(kind, _)| kind == self)
            .ok_or_else(|| BoxError::from(format!("no parser registered for {}", self)))?;
        parse(s)
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A function turning a string into a [`Number`].
pub type NumericParser = fn(&str) -> std::result::Result<Number, BoxError>;

/// Parse functions for every supported numeric kind.
pub static NUMERIC_PARSERS: &[(NumericKind, NumericParser)] = &[
    (NumericKind::I8, |s| Ok(Number::I8(s.parse()?))),
    (NumericKind::I16, |s| Ok(Number::I16(s.parse()?))),
    (NumericKind::I32, |s| Ok(Number::I32(s.parse()?))),
    (NumericKind::I64, |s| Ok(Number::I64(s.parse()?))),
    (NumericKind::U8, |s| Ok(Number::U8(s.parse()?))),
    (NumericKind::U16, |s| Ok(Number::U16(s.parse()?))),
    (NumericKind::U32, |s| Ok(Number::U32(s.parse()?))),
    (NumericKind::U64, |s| Ok(Number::U64(s.parse()?))),
    (NumericKind::F32, |s| Ok(Number::F32(s.parse()?))),
    (NumericKind::F64, |s| Ok(Number::F64(s.parse()?))),
];

/// A number held natively by a backing store or produced by coercion.
///
/// Serialized with its kind next to the value, as `{kind: I32, value: 5000}`,
/// so deserializing restores the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Number {
    /// An `i8`
    I8(i8),
    /// An `i16`
    I16(i16),
    /// An `i32`
    I32(i32),
    /// An `i64`
    I64(i64),
    /// A `u8`
    U8(u8),
    /// A `u16`
    U16(u16),
    /// A `u32`
    U32(u32),
    /// A `u64`
    U64(u64),
    /// An `f32`
    F32(f32),
    /// An `f64`
    F64(f64),
}

impl Number {
    /// The kind of this number.
    pub fn kind(&self) -> NumericKind {
        match self {
            Number::I8(_) => NumericKind::I8,
            Number::I16(_) => NumericKind::I16,
            Number::I32(_) => NumericKind::I32,
            Number::I64(_) => NumericKind::I64,
            Number::U8(_) => NumericKind::U8,
            Number::U16(_) => NumericKind::U16,
            Number::U32(_) => NumericKind::U32,
            Number::U64(_) => NumericKind::U64,
            Number::F32(_) => NumericKind::F32,
            Number::F64(_) => NumericKind::F64,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(n) => write!(f, "{}", n),
            Number::I16(n) => write!(f, "{}", n),
            Number::I32(n) => write!(f, "{}", n),
            Number::I64(n) => write!(f, "{}", n),
            Number::U8(n) => write!(f, "{}", n),
            Number::U16(n) => write!(f, "{}", n),
            Number::U32(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F32(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n)
                }
            }
        )*
    };
}

number_from! {
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    f32 => F32, f64 => F64,
}
