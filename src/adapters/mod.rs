// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing backing store and parser implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: backing stores that hold configuration entries, the parsers
//! that feed file-loaded stores, and a loader for environment variables.

#[cfg(feature = "env")]
pub mod env_var;
pub mod file_store;
pub mod memory;
#[cfg(feature = "properties")]
pub mod properties;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarLoader;
pub use file_store::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "properties")]
pub use properties::PropertiesParser;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
