//! Tests for the `content!` value-construction macro.

use tagform::{content, read_document, write_document, Value};

#[test]
fn test_macro_primitives() {
    assert_eq!(content!(true), Value::Bool(true));
    assert_eq!(content!(42i32), Value::I32(42));
    assert_eq!(content!(7u64), Value::U64(7));
    assert_eq!(content!(2.5f32), Value::F32(2.5));
    assert_eq!(content!("hello"), Value::String("hello".to_string()));
}

#[test]
fn test_macro_empty_object() {
    let value = content!({});
    assert!(value.as_object().unwrap().fields().is_empty());
}

#[test]
fn test_macro_list_element_type() {
    let value = content!([1i16, 2i16]);
    let list = value.as_list().unwrap();
    assert_eq!(list.element().render(), "INT16");
    assert_eq!(list.items(), &[Value::I16(1), Value::I16(2)]);
}

#[test]
fn test_macro_object_fields_in_order() {
    let value = content!({
        "first": 1i32,
        "second": 2i32,
        "third": 3i32,
    });
    let keys: Vec<_> = value
        .as_object()
        .unwrap()
        .fields()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["first", "second", "third"]);
}

#[test]
fn test_macro_nested_structure_round_trips() {
    let value = content!({
        "scene": "intro",
        "actors": ["hero".to_string(), "villain".to_string()],
        "settings": {
            "volume": 0.8f64,
            "fullscreen": false,
        },
    });

    let text = write_document("config", &value).unwrap();
    let (key, back) = read_document(&text).unwrap();
    assert_eq!(key, "config");
    assert_eq!(back, value);
}
