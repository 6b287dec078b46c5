//! Property-based tests covering the core round-trip guarantees across
//! generated inputs.

use indexmap::IndexMap;
use proptest::prelude::*;
use tagform::{escape, unescape, ContentType};

fn roundtrip<T: ContentType + PartialEq + std::fmt::Debug>(value: &T) -> bool {
    match tagform::to_string("root", value) {
        Ok(serialized) => match tagform::from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("deserialize failed: {e}");
                eprintln!("serialized was: {serialized}");
                false
            }
        },
        Err(e) => {
            eprintln!("serialize failed: {e}");
            false
        }
    }
}

proptest! {
    #[test]
    fn prop_bool(v in any::<bool>()) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_i8(v in any::<i8>()) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_u16(v in any::<u16>()) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_i32(v in any::<i32>()) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_i64(v in any::<i64>()) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_u64(v in any::<u64>()) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_f64(v in -1.0e12f64..1.0e12) {
        prop_assert!(roundtrip(&v));
    }

    // Strings, including the escape-worthy characters and embedded
    // whitespace.
    #[test]
    fn prop_string(v in ".*") {
        prop_assert!(roundtrip(&v.to_string()));
    }

    #[test]
    fn prop_bracket_heavy_string(v in r"[\[\]\\a ]*") {
        prop_assert!(roundtrip(&v.to_string()));
    }

    #[test]
    fn prop_escape_idempotence(v in ".*") {
        prop_assert_eq!(unescape(&escape(&v)).unwrap(), v);
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_vec_string(v in prop::collection::vec(".*", 0..10)) {
        let v: Vec<String> = v.into_iter().map(String::from).collect();
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_nested_vec(v in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..5), 0..5)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_dictionary(entries in prop::collection::btree_map(any::<i32>(), ".*", 0..10)) {
        let map: IndexMap<i32, String> = entries.into_iter().collect();
        prop_assert!(roundtrip(&map));
    }

    #[test]
    fn prop_dictionary_of_lists(
        entries in prop::collection::btree_map(any::<u16>(), prop::collection::vec(any::<i64>(), 0..5), 0..8)
    ) {
        let map: IndexMap<u16, Vec<i64>> = entries.into_iter().collect();
        prop_assert!(roundtrip(&map));
    }
}
