// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for typedcfg.
//!
//! This example demonstrates:
//! - Loading environment variables into a typed store
//! - Reading values as strings, numbers, booleans and durations
//! - Using default values for missing keys
//! - Copying a store before making local changes
//!
//! To run this example:
//! ```bash
//! export GRAPH_STORAGE_BACKEND="cql"
//! export GRAPH_STORAGE_PORT="9042"
//! export GRAPH_STORAGE_READ_ONLY="false"
//! export GRAPH_CACHE_TIME="10 s"
//!
//! cargo run --example basic_usage
//! ```

use typedcfg::prelude::*;

#[derive(Clone, Copy, Debug)]
enum Consistency {
    One,
    Quorum,
    All,
}

impl ConfigEnum for Consistency {
    const TYPE_NAME: &'static str = "Consistency";

    fn variants() -> &'static [Self] {
        &[Consistency::One, Consistency::Quorum, Consistency::All]
    }

    fn label(&self) -> &'static str {
        match self {
            Consistency::One => "ONE",
            Consistency::Quorum => "QUORUM",
            Consistency::All => "ALL",
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== typedcfg: Basic Usage ===\n");

    // GRAPH_STORAGE_PORT becomes storage.port
    let store = TypedConfigStore::from_store(
        EnvVarLoader::with_prefix("GRAPH_")
            .lowercase_keys(true)
            .into_store(),
    );

    println!("--- Strings ---");
    let backend: String = store.get_or("storage.backend", "inmemory".to_string())?;
    println!("storage.backend = {}", backend);

    println!("\n--- Numbers and booleans ---");
    let port: u16 = store.get_or("storage.port", 8182)?;
    let read_only: bool = store.get_or("storage.read.only", false)?;
    println!("storage.port = {}", port);
    println!("storage.read.only = {}", read_only);

    println!("\n--- Durations ---");
    let cache_time = store.get_or("cache.time", Duration::from_millis(10_000))?;
    println!("cache.time = {} ({:?})", cache_time, cache_time.to_std());

    println!("\n--- Enums ---");
    let consistency = store
        .get_enum::<Consistency>("storage.consistency")?
        .unwrap_or(Consistency::Quorum);
    println!("storage.consistency = {}", consistency.label());

    println!("\n--- Coercion errors ---");
    store.set_value("ids.block-size", "lots");
    match store.get_as::<u32>("ids.block-size") {
        Ok(v) => println!("ids.block-size = {:?}", v),
        Err(e) => println!("error: {}", e),
    }

    println!("\n--- Copies ---");
    let local = store.copy()?;
    local.set_value("storage.backend", "berkeleyje");
    println!(
        "original: {:?}, copy: {:?}",
        store.get_as::<String>("storage.backend")?,
        local.get_as::<String>("storage.backend")?
    );

    println!("\n--- Keys under \"storage\" ---");
    for key in store.get_keys(Some("storage"))? {
        println!("  {}", key);
    }

    store.close()?;
    Ok(())
}
