//! # tagform
//!
//! A human-readable bracket-tag content serialization format with a
//! pluggable type registry.
//!
//! ## The format
//!
//! Every value is framed by a start tag carrying a field key and a type
//! annotation, and a matching end tag. Containers declare their element
//! types once and their exact element count as a parenthesized dimension:
//!
//! ```text
//! [items:LIST<STRING>(2)]
//!     [:]a[/]
//!     [:]b[/]
//! [/items]
//! ```
//!
//! See the [`spec`] module for the complete grammar.
//!
//! ## Key Features
//!
//! - **Self-describing tags**: every tag carries its declared type;
//!   documents parse without an external schema
//! - **Pluggable dispatch**: a frozen [`Registry`] maps type names to
//!   handlers; custom handlers participate like the built-ins
//! - **Structural fallback**: types with no handler serialize field by
//!   field through the [`ContentType`] contract
//! - **Type safe**: conversion, format and structure errors are distinct
//!   and carry the offending text
//! - **No unsafe code**
//!
//! ## Quick Start
//!
//! ```rust
//! let text = tagform::to_string("items", &vec!["a".to_string(), "b".to_string()]).unwrap();
//! assert_eq!(
//!     text,
//!     "[items:LIST<STRING>(2)]\n\t[:]a[/]\n\t[:]b[/]\n[/items]\n"
//! );
//!
//! let back: Vec<String> = tagform::from_str(&text).unwrap();
//! assert_eq!(back, vec!["a".to_string(), "b".to_string()]);
//! ```
//!
//! ## Custom types
//!
//! Structs implement [`ContentType`] by hand — a small "describe my
//! fields" contract in place of runtime reflection. See [`content`] for a
//! worked example.
//!
//! ## Registries
//!
//! All dispatch runs through an explicitly constructed, frozen
//! [`Registry`]. The convenience functions below build a built-in
//! registry per call; anything involving enums or custom handlers goes
//! through [`Serializer`] and [`Deserializer`] with a caller-built
//! registry:
//!
//! ```rust
//! use tagform::{Deserializer, Registry};
//!
//! let registry = Registry::builder()
//!     .register_enum("WEEKDAY", &["Monday", "Tuesday"])
//!     .build();
//!
//! let (key, value) = Deserializer::new(&registry)
//!     .from_str("[day:ENUM<WEEKDAY>]Monday[/day]")
//!     .unwrap();
//! assert_eq!(key, "day");
//! assert_eq!(value.as_enum().unwrap().variant(), "Monday");
//! ```
//!
//! Registration must complete before any read or write begins; a frozen
//! registry is safe to share across threads. Reads and writes are
//! single-threaded, synchronous and fail fast — the first error ends the
//! current pass.

pub mod content;
pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod reader;
pub mod registry;
pub mod ser;
pub mod spec;
pub mod typeinfo;
pub mod types;
pub mod value;

pub use content::{ContentType, KeyScalar};
pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::FieldMap;
pub use options::{Options, Trailing};
pub use reader::{StartTag, Tag, TagReader};
pub use registry::{Registry, RegistryBuilder};
pub use ser::{IoSink, LineSink, Serializer, TagWriter};
pub use typeinfo::{TypeInfo, TypeKind};
pub use types::{
    escape, unescape, DictionaryHandler, EnumHandler, ListHandler, Primitive, StringHandler,
    TypeHandler,
};
pub use value::{DictValue, EnumValue, ListValue, ObjectValue, Scalar, Value};

use std::io;

/// Serializes a typed value under the given root key.
///
/// Uses a built-in registry and default options. Enums and custom
/// handlers need a caller-built registry; use [`to_string_with`] or
/// [`Serializer`] directly.
///
/// # Errors
///
/// Returns an error if the value cannot be represented (e.g. a
/// dictionary key containing tag delimiters).
pub fn to_string<T: ContentType>(key: &str, value: &T) -> Result<String> {
    let registry = Registry::with_builtins();
    Serializer::new(&registry).to_string(key, &value.to_value())
}

/// Serializes a typed value with an explicit registry and options.
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
pub fn to_string_with<T: ContentType>(
    key: &str,
    value: &T,
    registry: &Registry,
    options: Options,
) -> Result<String> {
    Serializer::with_options(registry, options).to_string(key, &value.to_value())
}

/// Deserializes a typed value from tagged text, ignoring the root key.
///
/// # Errors
///
/// Returns an error if the input is malformed or does not match `T`'s
/// shape.
pub fn from_str<T: ContentType>(input: &str) -> Result<T> {
    let registry = Registry::with_builtins();
    let (_, value) = Deserializer::new(&registry).from_str(input)?;
    T::from_value(value)
}

/// Deserializes a typed value with an explicit registry and options.
///
/// # Errors
///
/// Returns an error if the input is malformed or does not match `T`'s
/// shape.
pub fn from_str_with<T: ContentType>(
    input: &str,
    registry: &Registry,
    options: Options,
) -> Result<T> {
    let (_, value) = Deserializer::with_options(registry, options).from_str(input)?;
    T::from_value(value)
}

/// Reads a document into the dynamic value model: the root key and its
/// reconstructed value.
///
/// # Errors
///
/// Returns an error if the input is malformed.
pub fn read_document(input: &str) -> Result<(String, Value)> {
    let registry = Registry::with_builtins();
    Deserializer::new(&registry).from_str(input)
}

/// Writes a dynamic value under the given root key.
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
pub fn write_document(key: &str, value: &Value) -> Result<String> {
    let registry = Registry::with_builtins();
    Serializer::new(&registry).to_string(key, value)
}

/// Converts a typed value into the dynamic value model.
pub fn to_value<T: ContentType>(value: &T) -> Value {
    value.to_value()
}

/// Reconstructs a typed value from the dynamic value model.
///
/// # Errors
///
/// Returns an error if the value's shape does not match `T`.
pub fn from_value<T: ContentType>(value: Value) -> Result<T> {
    T::from_value(value)
}

/// Serializes a typed value into any [`io::Write`] destination.
///
/// # Errors
///
/// Returns an error if serialization fails or the destination reports a
/// write failure.
pub fn to_writer<W: io::Write, T: ContentType>(writer: W, key: &str, value: &T) -> Result<()> {
    let registry = Registry::with_builtins();
    let mut sink = IoSink(writer);
    Serializer::new(&registry).write(&mut sink, key, &value.to_value())
}

/// Deserializes a typed value from any [`io::Read`] source.
///
/// # Errors
///
/// Returns an error if reading fails, the input is malformed or the data
/// does not match `T`'s shape.
pub fn from_reader<R: io::Read, T: ContentType>(mut reader: R) -> Result<T> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io(e.to_string()))?;
    from_str(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_scalar_round_trip() {
        let text = to_string("hp", &100i32).unwrap();
        assert_eq!(text, "[hp:INT32]100[/hp]\n");
        assert_eq!(from_str::<i32>(&text).unwrap(), 100);
    }

    #[test]
    fn test_string_round_trip_with_escapes() {
        let original = r"weird \ [content]".to_string();
        let text = to_string("s", &original).unwrap();
        assert_eq!(from_str::<String>(&text).unwrap(), original);
    }

    #[test]
    fn test_list_round_trip() {
        let items = vec![1i64, -2, 3];
        let text = to_string("items", &items).unwrap();
        assert_eq!(from_str::<Vec<i64>>(&text).unwrap(), items);
    }

    #[test]
    fn test_dictionary_round_trip() {
        let mut map = IndexMap::new();
        map.insert(1u32, vec!["a".to_string()]);
        map.insert(2u32, vec!["b".to_string(), "c".to_string()]);
        let text = to_string("map", &map).unwrap();
        assert_eq!(from_str::<IndexMap<u32, Vec<String>>>(&text).unwrap(), map);
    }

    #[test]
    fn test_dynamic_document() {
        let value = crate::content!({
            "name": "Alice",
            "hp": 100i32,
        });
        let text = write_document("player", &value).unwrap();
        let (key, back) = read_document(&text).unwrap();
        assert_eq!(key, "player");
        assert_eq!(back, value);
    }

    #[test]
    fn test_writer_reader_round_trip() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, "hp", &7u8).unwrap();
        let back: u8 = from_reader(buffer.as_slice()).unwrap();
        assert_eq!(back, 7);
    }

    #[test]
    fn test_strict_trailing_content() {
        let registry = Registry::with_builtins();
        let input = "[hp:INT32]1[/hp] leftover";
        assert!(from_str::<i32>(input).is_ok());
        let strict = from_str_with::<i32>(input, &registry, Options::strict());
        assert!(matches!(strict, Err(Error::Format { .. })));
    }
}
