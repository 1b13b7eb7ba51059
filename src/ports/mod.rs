// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits the typed layer depends on. They are
//! implemented by the adapters in the adapters layer or by callers bringing
//! their own storage.

pub mod backing;
pub mod parser;

// Re-export commonly used types
pub use backing::BackingStore;
pub use parser::ConfigParser;
