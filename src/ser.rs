//! Writing values as tagged text.
//!
//! The write side walks an in-memory [`Value`], resolves a handler for
//! each piece through the registry, and lets every handler emit one or
//! more tagged lines through a [`TagWriter`]. Types with no registered
//! handler fall back to the structural object path: each field is written
//! as a nested tag keyed by the field's name.
//!
//! Output goes through a [`LineSink`] — the caller decides whether lines
//! land in a `String`, a file or any other [`std::io::Write`]
//! destination. Indentation is cosmetic: each line is prefixed with the
//! configured tab space repeated per nesting level.
//!
//! ## Examples
//!
//! ```rust
//! use tagform::{Registry, Serializer, Value};
//!
//! let registry = Registry::with_builtins();
//! let serializer = Serializer::new(&registry);
//! let text = serializer.to_string("hp", &Value::from(100i32)).unwrap();
//! assert_eq!(text, "[hp:INT32]100[/hp]\n");
//! ```

use crate::error::{Error, Result};
use crate::options::Options;
use crate::registry::Registry;
use crate::value::{ObjectValue, Value};
use std::io;

/// A line-emission sink: receives the indentation prefix and the line
/// text separately so a destination may re-indent or discard cosmetics.
pub trait LineSink {
    /// Emits one line of output.
    ///
    /// # Errors
    ///
    /// Implementations report their destination's failures as
    /// [`Error::Io`].
    fn emit(&mut self, indent: &str, text: &str) -> Result<()>;
}

impl LineSink for String {
    fn emit(&mut self, indent: &str, text: &str) -> Result<()> {
        self.push_str(indent);
        self.push_str(text);
        self.push('\n');
        Ok(())
    }
}

/// Adapts any [`io::Write`] into a [`LineSink`].
pub struct IoSink<W: io::Write>(pub W);

impl<W: io::Write> LineSink for IoSink<W> {
    fn emit(&mut self, indent: &str, text: &str) -> Result<()> {
        self.0
            .write_all(indent.as_bytes())
            .and_then(|()| self.0.write_all(text.as_bytes()))
            .and_then(|()| self.0.write_all(b"\n"))
            .map_err(|e| Error::io(e.to_string()))
    }
}

/// The handler-facing writer: a sink plus the configured tab space.
pub struct TagWriter<'a> {
    sink: &'a mut dyn LineSink,
    tab_space: &'a str,
}

impl<'a> TagWriter<'a> {
    #[must_use]
    pub fn new(sink: &'a mut dyn LineSink, tab_space: &'a str) -> Self {
        TagWriter { sink, tab_space }
    }

    /// Emits one line at the given nesting depth.
    pub fn line(&mut self, depth: usize, text: &str) -> Result<()> {
        self.sink.emit(&self.tab_space.repeat(depth), text)
    }
}

/// Writes one keyed value, dispatching by its own type descriptor.
pub(crate) fn write_tagged(
    writer: &mut TagWriter<'_>,
    depth: usize,
    key: &str,
    value: &Value,
    registry: &Registry,
) -> Result<()> {
    let info = value.type_info();
    match registry.resolve(info.handler_name()) {
        Some(handler) => handler.write(writer, depth, key, value, true, registry),
        None => match value {
            Value::Object(object) => {
                writer.line(
                    depth,
                    &format!("[{key}:{}]", object.name().unwrap_or_default()),
                )?;
                write_object_body(writer, depth + 1, object, registry)?;
                writer.line(depth, &format!("[/{key}]"))
            }
            _ => Err(Error::not_supported(format!(
                "no handler registered for '{}'",
                info.render()
            ))),
        },
    }
}

/// Writes every field of an object as a nested tag keyed by field name.
pub(crate) fn write_object_body(
    writer: &mut TagWriter<'_>,
    depth: usize,
    object: &ObjectValue,
    registry: &Registry,
) -> Result<()> {
    for (name, field) in object.fields().iter() {
        write_tagged(writer, depth, name, field, registry)?;
    }
    Ok(())
}

/// The write orchestrator.
///
/// Borrows a frozen [`Registry`]; construct one serializer per
/// configuration and reuse it across write passes.
pub struct Serializer<'r> {
    registry: &'r Registry,
    options: Options,
}

impl<'r> Serializer<'r> {
    /// A serializer with default options.
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Serializer {
            registry,
            options: Options::default(),
        }
    }

    /// A serializer with explicit options.
    #[must_use]
    pub fn with_options(registry: &'r Registry, options: Options) -> Self {
        Serializer { registry, options }
    }

    /// Writes a value under the given root key into a fresh string.
    ///
    /// # Errors
    ///
    /// Fails if the value's type has no registered handler and is not an
    /// object, or if a handler rejects the value.
    pub fn to_string(&self, key: &str, value: &Value) -> Result<String> {
        let mut out = String::new();
        self.write(&mut out, key, value)?;
        Ok(out)
    }

    /// Writes a value under the given root key into any sink.
    pub fn write(&self, sink: &mut dyn LineSink, key: &str, value: &Value) -> Result<()> {
        let mut writer = TagWriter::new(sink, &self.options.tab_space);
        write_tagged(&mut writer, 0, key, value, self.registry)
    }

    /// Writes a value dispatched under an explicitly declared type
    /// instead of the value's own descriptor. This routes values through
    /// custom registered handlers.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotSupported`] if the declared type resolves
    /// to no handler and the value is not an object.
    pub fn to_string_as(
        &self,
        key: &str,
        value: &Value,
        declared: &crate::TypeInfo,
    ) -> Result<String> {
        let mut out = String::new();
        let mut writer = TagWriter::new(&mut out, &self.options.tab_space);
        match self.registry.resolve(declared.handler_name()) {
            Some(handler) => handler.write(&mut writer, 0, key, value, true, self.registry)?,
            None => write_tagged(&mut writer, 0, key, value, self.registry)?,
        }
        Ok(out)
    }
}
