//! Type descriptors for the tag format.
//!
//! A [`TypeInfo`] identifies a serializable shape: a base category, an
//! uppercase canonical name, and up to two nested descriptors (the element
//! type of a list, the key and value types of a dictionary). The textual
//! encoding is the `typeinfo` part of a start tag:
//!
//! ```text
//! INT32                       simple type
//! LIST<STRING>                one nested type
//! DICTIONARY<INT32, STRING>   two nested types
//! ENUM<WEEKDAY>               enum with its underlying type name
//! ```
//!
//! Type names are case-insensitive on input and canonicalized to upper
//! case. Dictionary keys must resolve to a primitive-category descriptor;
//! [`TypeInfo::dictionary`] enforces this before any read or write is
//! attempted.
//!
//! ## Examples
//!
//! ```rust
//! use tagform::{TypeInfo, TypeKind};
//!
//! let list = TypeInfo::list(TypeInfo::string());
//! assert_eq!(list.render(), "LIST<STRING>");
//! assert_eq!(list.kind(), TypeKind::List);
//!
//! // A list is not a legal dictionary key.
//! let nested = TypeInfo::dictionary(list, TypeInfo::primitive("INT32"));
//! assert!(nested.is_err());
//! ```

use crate::error::{Error, Result};
use crate::registry::Registry;

/// The structural category of a serializable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A fixed-width number or boolean.
    Primitive,
    /// UTF-8 text with escape processing.
    String,
    /// A named symbol out of a registered symbol set.
    Enum,
    /// A homogeneous ordered sequence.
    List,
    /// Primitive-keyed key/value entries.
    Dictionary,
    /// A compound value read and written field by field.
    Object,
}

/// A parsed type descriptor.
///
/// Constructed either programmatically through the constructors below or
/// from tag text via [`TypeInfo::parse`]. Compound values carry their
/// descriptors with them (see [`crate::ListValue`] and
/// [`crate::DictValue`]) so that empty containers still serialize with
/// complete type annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    kind: TypeKind,
    name: String,
    args: Vec<TypeInfo>,
}

impl TypeInfo {
    /// A primitive scalar descriptor, e.g. `INT32` or `BOOLEAN`.
    #[must_use]
    pub fn primitive(name: &str) -> Self {
        TypeInfo {
            kind: TypeKind::Primitive,
            name: name.to_ascii_uppercase(),
            args: Vec::new(),
        }
    }

    /// The string descriptor.
    #[must_use]
    pub fn string() -> Self {
        TypeInfo {
            kind: TypeKind::String,
            name: "STRING".to_string(),
            args: Vec::new(),
        }
    }

    /// An enum descriptor carrying the underlying enum's name.
    #[must_use]
    pub fn enumeration(name: &str) -> Self {
        TypeInfo {
            kind: TypeKind::Enum,
            name: name.to_ascii_uppercase(),
            args: Vec::new(),
        }
    }

    /// A list descriptor with the given element type.
    #[must_use]
    pub fn list(element: TypeInfo) -> Self {
        TypeInfo {
            kind: TypeKind::List,
            name: "LIST".to_string(),
            args: vec![element],
        }
    }

    /// A dictionary descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] if `key` does not resolve to a
    /// primitive-category descriptor. This is checked here, before any
    /// read or write is attempted.
    pub fn dictionary(key: TypeInfo, value: TypeInfo) -> Result<Self> {
        if !key.is_primitive() {
            return Err(Error::not_supported(format!(
                "invalid dictionary key type '{}'",
                key.render()
            )));
        }
        Ok(Self::dictionary_unchecked(key, value))
    }

    /// A dictionary descriptor whose key is already known to be primitive.
    pub(crate) fn dictionary_unchecked(key: TypeInfo, value: TypeInfo) -> Self {
        TypeInfo {
            kind: TypeKind::Dictionary,
            name: "DICTIONARY".to_string(),
            args: vec![key, value],
        }
    }

    /// An object descriptor. An empty name denotes an anonymous object,
    /// written as `[:]` inside lists and dictionaries.
    #[must_use]
    pub fn object(name: &str) -> Self {
        TypeInfo {
            kind: TypeKind::Object,
            name: name.to_ascii_uppercase(),
            args: Vec::new(),
        }
    }

    /// Parses a textual type-info, resolving the base name through the
    /// registry. Unregistered names produce an object descriptor, the
    /// structural fallback for compound custom types.
    ///
    /// # Errors
    ///
    /// Propagates the resolved handler's grammar errors, e.g. a missing
    /// generic parameter on `LIST` or a non-primitive dictionary key.
    pub fn parse(text: &str, registry: &Registry) -> Result<Self> {
        let (base, inner) = split_generic(text);
        match registry.resolve(&base) {
            Some(handler) => handler.build_type_info(&inner, registry),
            None => Ok(TypeInfo::object(&base)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The uppercase canonical name of this shape. For lists and
    /// dictionaries this is the container name; for enums the underlying
    /// enum's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn args(&self) -> &[TypeInfo] {
        &self.args
    }

    /// The element descriptor of a list.
    #[must_use]
    pub fn element(&self) -> Option<&TypeInfo> {
        match self.kind {
            TypeKind::List => self.args.first(),
            _ => None,
        }
    }

    /// The key descriptor of a dictionary.
    #[must_use]
    pub fn key(&self) -> Option<&TypeInfo> {
        match self.kind {
            TypeKind::Dictionary => self.args.first(),
            _ => None,
        }
    }

    /// The value descriptor of a dictionary.
    #[must_use]
    pub fn value(&self) -> Option<&TypeInfo> {
        match self.kind {
            TypeKind::Dictionary => self.args.get(1),
            _ => None,
        }
    }

    /// Whether this descriptor is legal as a dictionary key.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive | TypeKind::String)
    }

    /// Renders the descriptor back to its textual encoding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagform::TypeInfo;
    ///
    /// let info = TypeInfo::dictionary(
    ///     TypeInfo::primitive("INT32"),
    ///     TypeInfo::list(TypeInfo::string()),
    /// )
    /// .unwrap();
    /// assert_eq!(info.render(), "DICTIONARY<INT32, LIST<STRING>>");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        match self.kind {
            TypeKind::Primitive | TypeKind::String | TypeKind::Object => self.name.clone(),
            TypeKind::Enum => format!("ENUM<{}>", self.name),
            TypeKind::List => format!("LIST<{}>", self.args[0].render()),
            TypeKind::Dictionary => format!(
                "DICTIONARY<{}, {}>",
                self.args[0].render(),
                self.args[1].render()
            ),
        }
    }

    /// The registry name this descriptor dispatches through: the container
    /// category for lists, dictionaries and enums, the canonical name for
    /// everything else.
    #[must_use]
    pub fn handler_name(&self) -> &str {
        match self.kind {
            TypeKind::Enum => "ENUM",
            TypeKind::List => "LIST",
            TypeKind::Dictionary => "DICTIONARY",
            _ => &self.name,
        }
    }
}

/// Splits a textual type-info into its uppercase base name and the raw
/// inner text of the outermost generic parameter.
///
/// `"LIST<LIST<INT32>>"` becomes `("LIST", "LIST<INT32>")`; a name with
/// no parameter yields an empty inner string.
pub(crate) fn split_generic(type_info: &str) -> (String, String) {
    let trimmed = type_info.trim();
    match trimmed.find('<') {
        Some(start) => {
            let base = trimmed[..start].trim().to_ascii_uppercase();
            let rest = &trimmed[start + 1..];
            let inner = match rest.rfind('>') {
                Some(end) => &rest[..end],
                None => rest,
            };
            (base, inner.trim().to_string())
        }
        None => (trimmed.to_ascii_uppercase(), String::new()),
    }
}

/// Splits the inner text of a two-parameter type-info at its top-level
/// comma: `"INT32, LIST<STRING>"` becomes `("INT32", "LIST<STRING>")`.
pub(crate) fn split_pair(inner: &str) -> Result<(String, String)> {
    let mut depth = 0usize;
    for (index, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let key = inner[..index].trim().to_string();
                let value = inner[index + 1..].trim().to_string();
                return Ok((key, value));
            }
            _ => {}
        }
    }
    Err(Error::invalid_type_info(format!(
        "expected two type parameters in '{inner}'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_generic() {
        assert_eq!(
            split_generic("list<string>"),
            ("LIST".to_string(), "string".to_string())
        );
        assert_eq!(
            split_generic("LIST<LIST<INT32>>"),
            ("LIST".to_string(), "LIST<INT32>".to_string())
        );
        assert_eq!(split_generic("int32"), ("INT32".to_string(), String::new()));
        assert_eq!(split_generic(""), (String::new(), String::new()));
    }

    #[test]
    fn test_split_pair() {
        let (key, value) = split_pair("INT32, LIST<STRING>").unwrap();
        assert_eq!(key, "INT32");
        assert_eq!(value, "LIST<STRING>");

        let (key, value) = split_pair("STRING, DICTIONARY<INT32, STRING>").unwrap();
        assert_eq!(key, "STRING");
        assert_eq!(value, "DICTIONARY<INT32, STRING>");

        assert!(split_pair("INT32").is_err());
    }

    #[test]
    fn test_render_round_trip() {
        let info = TypeInfo::list(TypeInfo::list(TypeInfo::primitive("int32")));
        assert_eq!(info.render(), "LIST<LIST<INT32>>");
    }

    #[test]
    fn test_dictionary_key_must_be_primitive() {
        let err = TypeInfo::dictionary(TypeInfo::list(TypeInfo::string()), TypeInfo::string());
        assert!(matches!(err, Err(Error::NotSupported(_))));

        let string_key = TypeInfo::dictionary(TypeInfo::string(), TypeInfo::string());
        assert!(string_key.is_ok());
    }
}
