// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module holds the value model, the type tokens, the coercion rules and
//! the error type. It is independent of any particular backing store.

pub mod coercion;
pub mod config_key;
pub mod config_value;
pub mod duration;
pub mod errors;
pub mod number;
pub mod service;
pub mod value_type;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use duration::{Duration, TimeUnit};
pub use errors::{ConfigError, Result};
pub use number::{Number, NumericKind};
pub use service::{ReadConfiguration, WriteConfiguration};
pub use value_type::{ConfigEnum, EnumConstant, EnumType, FromTypedValue, TypedValue, ValueType};
