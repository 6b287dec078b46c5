//! Dynamic value representation for tagged content.
//!
//! [`Value`] represents any value the tag format can carry: one variant per
//! fixed-width scalar, strings, enum symbols, lists, dictionaries and
//! objects. It is the interchange type between the parsing core and the
//! typed [`ContentType`](crate::ContentType) layer.
//!
//! Compound variants carry the [`TypeInfo`] of their element, key and value
//! types. This replaces the runtime generics the original dispatch relied
//! on: an empty list still knows it is a `LIST<STRING>` and serializes with
//! a complete type annotation.
//!
//! ## Examples
//!
//! ```rust
//! use tagform::{ListValue, TypeInfo, Value};
//!
//! let list = ListValue::with_items(
//!     TypeInfo::string(),
//!     vec![Value::from("a"), Value::from("b")],
//! );
//! let value = Value::List(list);
//!
//! assert!(value.is_list());
//! assert_eq!(value.type_info().render(), "LIST<STRING>");
//! ```

use crate::content::ContentType;
use crate::error::{Error, Result};
use crate::map::FieldMap;
use crate::typeinfo::{TypeInfo, TypeKind};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A dynamically-typed representation of any serializable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Enum(EnumValue),
    List(ListValue),
    Dictionary(DictValue),
    Object(ObjectValue),
}

/// An enum symbol together with the name of its enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    name: String,
    variant: String,
}

impl EnumValue {
    /// Creates a symbol of the named enum. The enum name is canonicalized
    /// to upper case; the symbol keeps its display form.
    #[must_use]
    pub fn new(name: &str, variant: &str) -> Self {
        EnumValue {
            name: name.to_ascii_uppercase(),
            variant: variant.to_string(),
        }
    }

    /// The uppercase canonical name of the enum type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbol's display name, written verbatim to the stream.
    #[must_use]
    pub fn variant(&self) -> &str {
        &self.variant
    }
}

/// A homogeneous ordered sequence with a declared element type.
#[derive(Debug, Clone, PartialEq)]
pub struct ListValue {
    element: TypeInfo,
    items: Vec<Value>,
}

impl ListValue {
    /// Creates an empty list of the given element type.
    #[must_use]
    pub fn new(element: TypeInfo) -> Self {
        ListValue {
            element,
            items: Vec::new(),
        }
    }

    /// Creates a list from pre-built items.
    #[must_use]
    pub fn with_items(element: TypeInfo, items: Vec<Value>) -> Self {
        ListValue { element, items }
    }

    #[must_use]
    pub fn element(&self) -> &TypeInfo {
        &self.element
    }

    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    pub fn push(&mut self, item: impl Into<Value>) {
        self.items.push(item.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Primitive-keyed entries with declared key and value types.
///
/// Keys are stored in their canonical text form, exactly as they appear in
/// entry tags. Duplicate keys overwrite silently, last write wins. String
/// keys must not contain `[`, `]` or `:`; the writer rejects such keys
/// because the reader could not tokenize them back.
#[derive(Debug, Clone, PartialEq)]
pub struct DictValue {
    key: TypeInfo,
    value: TypeInfo,
    entries: FieldMap,
}

impl DictValue {
    /// Creates an empty dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] if `key` is not a
    /// primitive-category descriptor.
    pub fn new(key: TypeInfo, value: TypeInfo) -> Result<Self> {
        let info = TypeInfo::dictionary(key, value)?;
        Ok(Self::from_info(info, FieldMap::new()))
    }

    pub(crate) fn from_info(info: TypeInfo, entries: FieldMap) -> Self {
        let mut args = info.args().to_vec();
        let value = args.pop().unwrap_or_else(TypeInfo::string);
        let key = args.pop().unwrap_or_else(TypeInfo::string);
        DictValue {
            key,
            value,
            entries,
        }
    }

    pub(crate) fn from_parts(key: TypeInfo, value: TypeInfo, entries: FieldMap) -> Self {
        DictValue {
            key,
            value,
            entries,
        }
    }

    #[must_use]
    pub fn key_type(&self) -> &TypeInfo {
        &self.key
    }

    #[must_use]
    pub fn value_type(&self) -> &TypeInfo {
        &self.value
    }

    #[must_use]
    pub fn entries(&self) -> &FieldMap {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> FieldMap {
        self.entries
    }

    /// Inserts an entry under the key's text form, overwriting any
    /// previous value for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A compound value read and written field by field.
///
/// Objects are the structural fallback for types with no registered
/// handler: each serializable field becomes a nested tag keyed by the
/// field's name. The name is the object's type name, empty for the
/// anonymous elements of lists and dictionaries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectValue {
    name: Option<String>,
    fields: FieldMap,
}

impl ObjectValue {
    /// Creates an empty object with the given type name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        ObjectValue {
            name: Some(name.to_ascii_uppercase()),
            fields: FieldMap::new(),
        }
    }

    /// Creates an empty anonymous object.
    #[must_use]
    pub fn anonymous() -> Self {
        ObjectValue {
            name: None,
            fields: FieldMap::new(),
        }
    }

    /// Adds a field, builder style.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagform::ObjectValue;
    ///
    /// let v = ObjectValue::new("VECTOR3")
    ///     .with("X", 1.0f32)
    ///     .with("Y", 2.0f32)
    ///     .with("Z", 3.0f32);
    /// assert_eq!(v.fields().len(), 3);
    /// ```
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, key: String, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key, value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Typed field access.
    ///
    /// # Errors
    ///
    /// [`Error::MissingField`] if the key is absent, or a conversion error
    /// if the field cannot be converted to `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagform::ObjectValue;
    ///
    /// let v = ObjectValue::new("POINT").with("x", 3i32);
    /// assert_eq!(v.field::<i32>("x").unwrap(), 3);
    /// assert!(v.field::<i32>("y").is_err());
    /// ```
    pub fn field<T: ContentType>(&self, key: &str) -> Result<T> {
        let value = self
            .fields
            .get(key)
            .cloned()
            .ok_or_else(|| Error::missing_field(key))?;
        T::from_value(value)
    }

    /// The uppercase canonical type name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> FieldMap {
        self.fields
    }
}

impl Value {
    /// The structural category of this value.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        match self {
            Value::Bool(_)
            | Value::I8(_)
            | Value::U8(_)
            | Value::I16(_)
            | Value::U16(_)
            | Value::I32(_)
            | Value::U32(_)
            | Value::I64(_)
            | Value::U64(_)
            | Value::F32(_)
            | Value::F64(_) => TypeKind::Primitive,
            Value::String(_) => TypeKind::String,
            Value::Enum(_) => TypeKind::Enum,
            Value::List(_) => TypeKind::List,
            Value::Dictionary(_) => TypeKind::Dictionary,
            Value::Object(_) => TypeKind::Object,
        }
    }

    /// The type descriptor this value serializes under.
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        match self {
            Value::Bool(_) => TypeInfo::primitive(bool::NAME),
            Value::I8(_) => TypeInfo::primitive(i8::NAME),
            Value::U8(_) => TypeInfo::primitive(u8::NAME),
            Value::I16(_) => TypeInfo::primitive(i16::NAME),
            Value::U16(_) => TypeInfo::primitive(u16::NAME),
            Value::I32(_) => TypeInfo::primitive(i32::NAME),
            Value::U32(_) => TypeInfo::primitive(u32::NAME),
            Value::I64(_) => TypeInfo::primitive(i64::NAME),
            Value::U64(_) => TypeInfo::primitive(u64::NAME),
            Value::F32(_) => TypeInfo::primitive(f32::NAME),
            Value::F64(_) => TypeInfo::primitive(f64::NAME),
            Value::String(_) => TypeInfo::string(),
            Value::Enum(e) => TypeInfo::enumeration(e.name()),
            Value::List(l) => TypeInfo::list(l.element().clone()),
            Value::Dictionary(d) => {
                TypeInfo::dictionary_unchecked(d.key_type().clone(), d.value_type().clone())
            }
            Value::Object(o) => TypeInfo::object(o.name().unwrap_or("")),
        }
    }

    /// The canonical text form of a scalar value, `None` for strings and
    /// compound values.
    #[must_use]
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Value::Bool(v) => Some(v.to_string()),
            Value::I8(v) => Some(v.to_string()),
            Value::U8(v) => Some(v.to_string()),
            Value::I16(v) => Some(v.to_string()),
            Value::U16(v) => Some(v.to_string()),
            Value::I32(v) => Some(v.to_string()),
            Value::U32(v) => Some(v.to_string()),
            Value::I64(v) => Some(v.to_string()),
            Value::U64(v) => Some(v.to_string()),
            Value::F32(v) => Some(v.to_string()),
            Value::F64(v) => Some(v.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[must_use]
    pub fn is_enum(&self) -> bool {
        matches!(self, Value::Enum(_))
    }

    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[must_use]
    pub fn is_dictionary(&self) -> bool {
        matches!(self, Value::Dictionary(_))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Widening view of any signed or unsigned integer variant that fits
    /// in an `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I8(v) => Some(i64::from(*v)),
            Value::U8(v) => Some(i64::from(*v)),
            Value::I16(v) => Some(i64::from(*v)),
            Value::U16(v) => Some(i64::from(*v)),
            Value::I32(v) => Some(i64::from(*v)),
            Value::U32(v) => Some(i64::from(*v)),
            Value::I64(v) => Some(*v),
            Value::U64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Widening view of any numeric variant.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            other => other.as_i64().map(|v| v as f64),
        }
    }

    #[must_use]
    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Value::Enum(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_dictionary(&self) -> Option<&DictValue> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// A fixed-width number or boolean, the content of a primitive tag.
///
/// Implemented for `bool`, the signed and unsigned integers up to 64 bits,
/// `f32` and `f64`. `NAME` is the uppercase canonical type name used in
/// tag annotations.
pub trait Scalar: Copy + fmt::Display + FromStr + Send + Sync + 'static {
    const NAME: &'static str;

    fn into_value(self) -> Value;
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident, $name:literal;)*) => {
        $(
            impl Scalar for $ty {
                const NAME: &'static str = $name;

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Bool, "BOOLEAN";
    i8 => I8, "SBYTE";
    u8 => U8, "BYTE";
    i16 => I16, "INT16";
    u16 => U16, "UINT16";
    i32 => I32, "INT32";
    u32 => U32, "UINT32";
    i64 => I64, "INT64";
    u64 => U64, "UINT64";
    f32 => F32, "SINGLE";
    f64 => F64, "DOUBLE";
}

/// Parses scalar content against a canonical primitive type name.
///
/// Returns `None` for names that are not built-in scalars so that custom
/// primitive handlers keep their own text forms.
pub(crate) fn parse_scalar_text(name: &str, text: &str) -> Option<Result<Value>> {
    fn parse<T: Scalar>(text: &str) -> Result<Value> {
        text.trim()
            .parse::<T>()
            .map(Scalar::into_value)
            .map_err(|_| Error::conversion(text, T::NAME))
    }

    let parsed = match name {
        "BOOLEAN" => parse::<bool>(text),
        "SBYTE" => parse::<i8>(text),
        "BYTE" => parse::<u8>(text),
        "INT16" => parse::<i16>(text),
        "UINT16" => parse::<u16>(text),
        "INT32" => parse::<i32>(text),
        "UINT32" => parse::<u32>(text),
        "INT64" => parse::<i64>(text),
        "UINT64" => parse::<u64>(text),
        "SINGLE" => parse::<f32>(text),
        "DOUBLE" => parse::<f64>(text),
        _ => return None,
    };
    Some(parsed)
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        Value::Enum(value)
    }
}

impl From<ListValue> for Value {
    fn from(value: ListValue) -> Self {
        Value::List(value)
    }
}

impl From<DictValue> for Value {
    fn from(value: DictValue) -> Self {
        Value::Dictionary(value)
    }
}

impl From<ObjectValue> for Value {
    fn from(value: ObjectValue) -> Self {
        Value::Object(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Enum(e) => write!(f, "{}", e.variant()),
            Value::List(l) => write!(f, "{}({})", l.element().render(), l.len()),
            Value::Dictionary(d) => write!(
                f,
                "{}({})",
                TypeInfo::dictionary_unchecked(d.key_type().clone(), d.value_type().clone())
                    .render(),
                d.len()
            ),
            Value::Object(o) => write!(f, "{}{{{}}}", o.name().unwrap_or(""), o.fields().len()),
            scalar => match scalar.scalar_text() {
                Some(text) => write!(f, "{text}"),
                None => Ok(()),
            },
        }
    }
}

// Serde export: lets a parsed document be handed to any serde-ecosystem
// format (JSON for tooling, diagnostics). The tag format itself is read
// and written by this crate's own reader and writer.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::I8(v) => serializer.serialize_i8(*v),
            Value::U8(v) => serializer.serialize_u8(*v),
            Value::I16(v) => serializer.serialize_i16(*v),
            Value::U16(v) => serializer.serialize_u16(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::F32(v) => serializer.serialize_f32(*v),
            Value::F64(v) => serializer.serialize_f64(*v),
            Value::String(s) => serializer.serialize_str(s),
            Value::Enum(e) => serializer.serialize_str(e.variant()),
            Value::List(l) => {
                let mut seq = serializer.serialize_seq(Some(l.len()))?;
                for item in l.items() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Dictionary(d) => {
                let mut map = serializer.serialize_map(Some(d.len()))?;
                for (k, v) in d.entries().iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Object(o) => {
                let mut map = serializer.serialize_map(Some(o.fields().len()))?;
                for (k, v) in o.fields().iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_round_trip_through_value() {
        let value = Scalar::into_value(42i32);
        assert_eq!(<i32 as Scalar>::from_value(&value), Some(42));
        assert_eq!(<i64 as Scalar>::from_value(&value), None);
    }

    #[test]
    fn test_type_info_of_values() {
        assert_eq!(Value::from(true).type_info().render(), "BOOLEAN");
        assert_eq!(Value::from(1u64).type_info().render(), "UINT64");
        assert_eq!(Value::from("x").type_info().render(), "STRING");
        assert_eq!(
            Value::Enum(EnumValue::new("Weekday", "Monday"))
                .type_info()
                .render(),
            "ENUM<WEEKDAY>"
        );
    }

    #[test]
    fn test_parse_scalar_text() {
        assert_eq!(
            parse_scalar_text("INT32", "7").unwrap().unwrap(),
            Value::I32(7)
        );
        assert!(parse_scalar_text("INT32", "abc").unwrap().is_err());
        assert!(parse_scalar_text("GUID", "x").is_none());
    }

    #[test]
    fn test_as_i64_widening() {
        assert_eq!(Value::from(7u8).as_i64(), Some(7));
        assert_eq!(Value::from(u64::MAX).as_i64(), None);
        assert_eq!(Value::from(1.5f64).as_i64(), None);
    }

    #[test]
    fn test_object_field_access() {
        let v = ObjectValue::new("Point").with("x", 3i32).with("y", "hi");
        assert_eq!(v.name(), Some("POINT"));
        assert_eq!(v.field::<i32>("x").unwrap(), 3);
        assert_eq!(v.field::<String>("y").unwrap(), "hi");
        assert!(matches!(
            v.field::<i32>("missing"),
            Err(Error::MissingField(_))
        ));
    }

    #[test]
    fn test_dictionary_last_write_wins() {
        let mut d = DictValue::new(TypeInfo::primitive("INT32"), TypeInfo::string()).unwrap();
        d.insert("1", "first");
        d.insert("2", "second");
        d.insert("1", "third");
        assert_eq!(d.len(), 2);
        assert_eq!(d.get("1").and_then(Value::as_str), Some("third"));
        let keys: Vec<_> = d.entries().keys().cloned().collect();
        assert_eq!(keys, vec!["1", "2"]);
    }
}
