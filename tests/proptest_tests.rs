// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check that typed reads and writes behave consistently over
//! arbitrary keys and values.

use proptest::prelude::*;
use typedcfg::domain::{ConfigKey, ConfigValue, Duration, NumericKind, TimeUnit, ValueType};
use typedcfg::service::TypedConfigStore;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(\\.[a-z][a-z0-9-]{0,7}){0,3}"
}

fn unit_strategy() -> impl Strategy<Value = TimeUnit> {
    prop::sample::select(TimeUnit::ALL.to_vec())
}

// An unset key is absent for every requested type
proptest! {
    #[test]
    fn test_unset_key_reads_as_none(key in key_strategy()) {
        let store = TypedConfigStore::in_memory();
        let types = [
            ValueType::Text,
            ValueType::string_array(),
            ValueType::Bool,
            ValueType::Numeric(NumericKind::I64),
            ValueType::Duration,
            ValueType::Any,
        ];
        for value_type in &types {
            prop_assert_eq!(store.get(&key, value_type).unwrap(), None);
        }
    }
}

// Text written is text read back
proptest! {
    #[test]
    fn test_text_round_trip(key in key_strategy(), s in "\\PC*") {
        let store = TypedConfigStore::in_memory();
        store.set_value(&key, s.as_str());
        prop_assert_eq!(store.get_as::<String>(&key).unwrap(), Some(s));
    }
}

// Integers stored as text parse back to the same value
proptest! {
    #[test]
    fn test_integer_text_parses(key in key_strategy(), n in any::<i64>(), m in any::<u64>()) {
        let store = TypedConfigStore::in_memory();
        store.set_value(&key, n.to_string());
        prop_assert_eq!(store.get_as::<i64>(&key).unwrap(), Some(n));

        store.set_value(&key, m.to_string());
        prop_assert_eq!(store.get_as::<u64>(&key).unwrap(), Some(m));
    }
}

// Out of range text fails with a coercion error instead of wrapping
proptest! {
    #[test]
    fn test_out_of_range_is_coercion_error(n in 128i64..100_000) {
        let store = TypedConfigStore::in_memory();
        store.set_value("n", n.to_string());
        let err = store.get_as::<i8>("n").unwrap_err();
        prop_assert!(err.is_coercion());
    }
}

// Native values come back unchanged
proptest! {
    #[test]
    fn test_native_round_trip(b in any::<bool>(), i in any::<i32>(), magnitude in any::<i64>(), unit in unit_strategy()) {
        let store = TypedConfigStore::in_memory();
        let duration = Duration::new(magnitude, unit);
        store.set_value("b", b);
        store.set_value("i", i);
        store.set_value("d", duration);

        prop_assert_eq!(store.get_as::<bool>("b").unwrap(), Some(b));
        prop_assert_eq!(store.get_as::<i32>("i").unwrap(), Some(i));
        prop_assert_eq!(store.get_as::<Duration>("d").unwrap(), Some(duration));
    }
}

// A bare number is a count of milliseconds
proptest! {
    #[test]
    fn test_bare_duration_is_millis(n in any::<i64>(), pad in "[ \t]{0,3}") {
        let store = TypedConfigStore::in_memory();
        store.set_value("t", format!("{}{}{}", pad, n, pad));
        prop_assert_eq!(store.get_as::<Duration>("t").unwrap(), Some(Duration::from_millis(n)));
    }
}

// A number and a unit name parse to that unit
proptest! {
    #[test]
    fn test_duration_with_unit(n in 0i64..1_000_000, unit in unit_strategy(), gap in "[ \t]{1,3}") {
        let store = TypedConfigStore::in_memory();
        store.set_value("t", format!("{}{}{}", n, gap, unit.abbreviation().to_uppercase()));
        prop_assert_eq!(store.get_as::<Duration>("t").unwrap(), Some(Duration::new(n, unit)));
    }
}

// The display form of a duration parses back to the same duration
proptest! {
    #[test]
    fn test_duration_display_parses_back(n in any::<i64>(), unit in unit_strategy()) {
        let duration = Duration::new(n, unit);
        let store = TypedConfigStore::in_memory();
        store.set_value("t", duration.to_string());
        prop_assert_eq!(store.get_as::<Duration>("t").unwrap(), Some(duration));
    }
}

// Writes after a copy never leak across
proptest! {
    #[test]
    fn test_copy_isolation(
        entries in prop::collection::btree_map(key_strategy(), "[a-z0-9]{0,8}", 0..16),
        key in key_strategy(),
        value in "[a-z0-9]{1,8}",
    ) {
        let original = TypedConfigStore::in_memory();
        for (k, v) in &entries {
            original.set_value(k, v.as_str());
        }
        let copy = original.copy().unwrap();

        copy.set_value(&key, value.as_str());
        prop_assert_eq!(
            original.get_as::<String>(&key).unwrap(),
            entries.get(&key).cloned()
        );

        original.remove(&key);
        prop_assert_eq!(copy.get_as::<String>(&key).unwrap(), Some(value));
        prop_assert!(copy.get_keys(None).unwrap().len() >= entries.len());
    }
}

// Every key listed under a prefix is scoped under it, and no scoped key is missed
proptest! {
    #[test]
    fn test_get_keys_prefix_scoping(
        keys in prop::collection::btree_set(key_strategy(), 0..24),
        prefix in "[a-z]{1,3}",
    ) {
        let store = TypedConfigStore::in_memory();
        for k in &keys {
            store.set_value(k, ConfigValue::from(true));
        }

        let listed = store.get_keys(Some(prefix.as_str())).unwrap();
        let expected: Vec<ConfigKey> = keys
            .iter()
            .filter(|k| k.as_str() == prefix || k.starts_with(&format!("{}.", prefix)))
            .map(|k| ConfigKey::from(k.as_str()))
            .collect();

        let mut listed = listed;
        listed.sort();
        prop_assert_eq!(listed, expected);
        prop_assert_eq!(store.get_keys(None).unwrap().len(), keys.len());
    }
}

// Remove is idempotent
proptest! {
    #[test]
    fn test_remove_idempotent(key in key_strategy(), times in 1usize..4) {
        let store = TypedConfigStore::in_memory();
        store.set_value(&key, "x");
        for _ in 0..times {
            store.remove(&key);
        }
        prop_assert_eq!(store.get(&key, &ValueType::Any).unwrap(), None);
    }
}
