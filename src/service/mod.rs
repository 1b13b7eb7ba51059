// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the typed configuration store.
//!
//! `TypedConfigStore` implements the `ReadConfiguration` and
//! `WriteConfiguration` traits over any backing store.

pub mod typed_store;

// Re-export commonly used types
pub use typed_store::TypedConfigStore;
