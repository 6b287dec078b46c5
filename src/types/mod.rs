//! The type handler family.
//!
//! One handler per structural category: primitive scalars, strings, enums,
//! lists and dictionaries. Each handler knows how to parse its own
//! type-info grammar, construct a [`TypeInfo`] descriptor, read its
//! content from the tag stream and write a value back to tagged text.
//!
//! Handlers are dispatched through the [`Registry`](crate::Registry) by
//! canonical type name. The set is open: a caller may register a custom
//! handler for a domain type before any read or write occurs, and it
//! participates in dispatch exactly like the built-ins.

use crate::error::Result;
use crate::reader::TagReader;
use crate::registry::Registry;
use crate::ser::TagWriter;
use crate::typeinfo::TypeInfo;
use crate::value::Value;

mod dictionary;
mod enumeration;
mod list;
mod primitive;
mod string;

pub use dictionary::DictionaryHandler;
pub use enumeration::EnumHandler;
pub use list::ListHandler;
pub use primitive::Primitive;
pub use string::{escape, unescape, StringHandler};

/// The capability shared by all type handlers.
///
/// `read` is handed the stream positioned directly after the start tag's
/// `]` and must consume everything up to and including the matching end
/// tag. `write` emits the complete tagged representation of `value`,
/// recursing for compound content.
///
/// When `use_type_info` is false the tag is written without its type
/// annotation and with an anonymous end tag (`[key:]content[/]`), the form
/// used for list elements and dictionary entries whose type is declared by
/// the enclosing container.
pub trait TypeHandler: Send + Sync {
    /// The canonical type name this handler registers under.
    fn type_name(&self) -> &str;

    /// Whether values of this category are legal dictionary keys.
    fn is_primitive(&self) -> bool;

    /// Builds a type descriptor from the raw generic parameter text of a
    /// type-info (empty for simple types).
    fn build_type_info(&self, generics: &str, registry: &Registry) -> Result<TypeInfo>;

    /// Reads one value of this category from the stream.
    fn read(
        &self,
        reader: &mut TagReader<'_>,
        key: &str,
        generics: &str,
        dimension: Option<usize>,
        registry: &Registry,
    ) -> Result<Value>;

    /// Writes one value of this category as tagged text.
    fn write(
        &self,
        writer: &mut TagWriter<'_>,
        depth: usize,
        key: &str,
        value: &Value,
        use_type_info: bool,
        registry: &Registry,
    ) -> Result<()>;
}
