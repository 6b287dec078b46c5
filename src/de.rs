//! Reading tagged text back into values.
//!
//! The read side tokenizes the input with a [`TagReader`], resolves each
//! tag's declared type through the registry, and delegates to the matching
//! handler, which recursively reads nested content. Tags whose type name
//! is not registered are read through the structural object path: fields
//! accumulate until the matching end tag closes the object.
//!
//! Every opened tag must be closed before the stream is considered
//! complete. What happens to content *after* the root end tag is
//! configurable: [`Trailing::Lenient`](crate::Trailing) ignores it,
//! [`Trailing::Strict`](crate::Trailing) rejects anything but whitespace.
//!
//! ## Examples
//!
//! ```rust
//! use tagform::{Deserializer, Registry, Value};
//!
//! let registry = Registry::with_builtins();
//! let deserializer = Deserializer::new(&registry);
//! let (key, value) = deserializer.from_str("[hp:INT32]100[/hp]").unwrap();
//! assert_eq!(key, "hp");
//! assert_eq!(value, Value::I32(100));
//! ```

use crate::error::Result;
use crate::options::{Options, Trailing};
use crate::reader::{StartTag, Tag, TagReader};
use crate::registry::Registry;
use crate::typeinfo::split_generic;
use crate::value::{ObjectValue, Value};

/// Reads the value of a start tag, dispatching by the tag's declared
/// type-info.
pub(crate) fn read_tagged(
    reader: &mut TagReader<'_>,
    tag: &StartTag,
    registry: &Registry,
) -> Result<Value> {
    let (base, inner) = split_generic(&tag.type_info);
    match registry.resolve(&base) {
        Some(handler) => handler.read(reader, &tag.key, &inner, tag.dimension, registry),
        None => read_object_body(reader, &tag.key, &base, registry),
    }
}

/// Reads object fields until the end tag matching `end_key` closes the
/// object. The opening tag has already been consumed.
pub(crate) fn read_object_body(
    reader: &mut TagReader<'_>,
    end_key: &str,
    name: &str,
    registry: &Registry,
) -> Result<Value> {
    let mut object = if name.is_empty() {
        ObjectValue::anonymous()
    } else {
        ObjectValue::new(name)
    };
    loop {
        match reader.read_tag()? {
            Tag::End(key) => {
                if key == end_key {
                    return Ok(Value::Object(object));
                }
                return Err(reader.format_error(format!(
                    "mismatched end tag '[/{key}]', expected '[/{end_key}]'"
                )));
            }
            Tag::Start(field) => {
                let value = read_tagged(reader, &field, registry)?;
                object.insert(field.key, value);
            }
        }
    }
}

/// The read orchestrator.
///
/// Borrows a frozen [`Registry`]; construct one deserializer per
/// configuration and reuse it across read passes.
pub struct Deserializer<'r> {
    registry: &'r Registry,
    options: Options,
}

impl<'r> Deserializer<'r> {
    /// A deserializer with default options.
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Deserializer {
            registry,
            options: Options::default(),
        }
    }

    /// A deserializer with explicit options.
    #[must_use]
    pub fn with_options(registry: &'r Registry, options: Options) -> Self {
        Deserializer { registry, options }
    }

    /// Reads one document: the root tag's key and its reconstructed
    /// value.
    ///
    /// # Errors
    ///
    /// Propagates the first handler error encountered. With
    /// [`Trailing::Strict`](crate::Trailing), non-whitespace content
    /// after the root end tag is a format error.
    pub fn from_str(&self, input: &str) -> Result<(String, Value)> {
        let mut reader = TagReader::new(input);
        let tag = reader.read_start_tag()?;
        let value = read_tagged(&mut reader, &tag, self.registry)?;
        if self.options.trailing == Trailing::Strict && !reader.remainder_is_blank() {
            return Err(reader.format_error("trailing content after the root end tag"));
        }
        Ok((tag.key, value))
    }
}
