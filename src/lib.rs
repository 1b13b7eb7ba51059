// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed access to untyped key/value configuration stores.
//!
//! Configuration often arrives as strings: a properties file, environment
//! variables, a flattened YAML document. This crate reads such values by key
//! and coerces them to the type the caller asks for, or fails with an error
//! naming the key, the stored value and the requested type. An unset key is
//! not an error; it reads as `None` so callers can apply their own default.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: values, type tokens, coercion rules and errors
//!   (`ConfigValue`, `ValueType`, `Duration`, `ConfigError`)
//! - **Ports**: the `BackingStore` and `ConfigParser` traits
//! - **Adapters**: an in-memory store, a file-loaded store with YAML and
//!   `.properties` parsers, and an environment variable loader
//! - **Service**: `TypedConfigStore`, the typed read/write layer
//!
//! # Coercion
//!
//! | Requested type      | Accepted stored values                                 |
//! |---------------------|--------------------------------------------------------|
//! | `Text`              | anything, in its string form                           |
//! | string array        | a list, or text split on `,`                           |
//! | `Bool`              | a boolean, or `true/false`, `yes/no`, `on/off`, `1/0`  |
//! | `Numeric(kind)`     | a number of that kind, or text parsed as that kind     |
//! | `Enum(type)`        | text equal to one of the enum's labels                 |
//! | `Duration`          | a duration, `"<n>"` (milliseconds) or `"<n> <unit>"`   |
//! | `Any`               | anything, returned as stored                           |
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML parser (default)
//! - `properties`: Enable the `.properties` parser (default)
//! - `env`: Enable the environment variable loader (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use typedcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let store = TypedConfigStore::from_store(
//!     MemoryStore::new()
//!         .with_value("storage.backend", "berkeleyje")
//!         .with_value("storage.lock.wait-time", "300 ms")
//!         .with_value("ids.block-size", "10000"),
//! );
//!
//! let block_size: u32 = store.get_or("ids.block-size", 1000)?;
//! let wait = store.get_as::<Duration>("storage.lock.wait-time")?;
//!
//! assert_eq!(block_size, 10000);
//! assert_eq!(wait, Some(Duration::new(300, TimeUnit::Milliseconds)));
//! assert_eq!(store.get_keys(Some("storage"))?.len(), 2);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{FileStore, MemoryStore};
    pub use crate::domain::{
        ConfigEnum, ConfigError, ConfigKey, ConfigValue, Duration, EnumType, Number, NumericKind,
        ReadConfiguration, Result, TimeUnit, TypedValue, ValueType, WriteConfiguration,
    };
    pub use crate::ports::{BackingStore, ConfigParser};
    pub use crate::service::TypedConfigStore;

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarLoader;
    #[cfg(feature = "properties")]
    pub use crate::adapters::PropertiesParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
