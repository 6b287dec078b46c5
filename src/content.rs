//! The typed content layer.
//!
//! There is no runtime member enumeration in Rust, so the generic object
//! fallback is driven by a small "describe my fields" contract instead:
//! a type that wants to ride through the serializer implements
//! [`ContentType`], naming its shape and converting itself to and from
//! the dynamic [`Value`] model.
//!
//! Implementations for all scalars, `String`, `Vec<T>` and
//! [`IndexMap<K, V>`] are provided. Structs implement the trait by hand,
//! building an [`ObjectValue`](crate::ObjectValue) field by field and
//! reading fields back with
//! [`ObjectValue::field`](crate::ObjectValue::field):
//!
//! ```rust
//! use tagform::{ContentType, ObjectValue, Result, TypeInfo, Value};
//!
//! #[derive(Debug, PartialEq)]
//! struct Vector3 {
//!     x: f32,
//!     y: f32,
//!     z: f32,
//! }
//!
//! impl ContentType for Vector3 {
//!     fn type_info() -> TypeInfo {
//!         TypeInfo::object("VECTOR3")
//!     }
//!
//!     fn to_value(&self) -> Value {
//!         ObjectValue::new("VECTOR3")
//!             .with("X", self.x)
//!             .with("Y", self.y)
//!             .with("Z", self.z)
//!             .into()
//!     }
//!
//!     fn from_value(value: Value) -> Result<Self> {
//!         let object = value.as_object().ok_or_else(|| {
//!             tagform::Error::conversion(value.type_info().render(), "VECTOR3")
//!         })?;
//!         Ok(Vector3 {
//!             x: object.field("X")?,
//!             y: object.field("Y")?,
//!             z: object.field("Z")?,
//!         })
//!     }
//! }
//!
//! let v = Vector3 { x: 1.0, y: 2.0, z: 3.0 };
//! let text = tagform::to_string("position", &v).unwrap();
//! let back: Vector3 = tagform::from_str(&text).unwrap();
//! assert_eq!(v, back);
//! ```

use crate::error::{Error, Result};
use crate::map::FieldMap;
use crate::typeinfo::TypeInfo;
use crate::value::{DictValue, ListValue, Scalar, Value};
use indexmap::IndexMap;
use std::hash::Hash;

/// The contract between a Rust type and the tag format.
pub trait ContentType: Sized {
    /// The type descriptor this type serializes under.
    fn type_info() -> TypeInfo;

    /// Converts to the dynamic value model.
    fn to_value(&self) -> Value;

    /// Reconstructs from the dynamic value model.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the value's shape does not match,
    /// or [`Error::MissingField`] for absent object fields.
    fn from_value(value: Value) -> Result<Self>;
}

macro_rules! impl_content_scalar {
    ($($ty:ty),*) => {
        $(
            impl ContentType for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::primitive(<$ty as Scalar>::NAME)
                }

                fn to_value(&self) -> Value {
                    Scalar::into_value(*self)
                }

                fn from_value(value: Value) -> Result<Self> {
                    <$ty as Scalar>::from_value(&value).ok_or_else(|| {
                        Error::conversion(value.type_info().render(), <$ty as Scalar>::NAME)
                    })
                }
            }
        )*
    };
}

impl_content_scalar!(bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl ContentType for String {
    fn type_info() -> TypeInfo {
        TypeInfo::string()
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::conversion(other.type_info().render(), "STRING")),
        }
    }
}

impl<T: ContentType> ContentType for Vec<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::list(T::type_info())
    }

    fn to_value(&self) -> Value {
        let items = self.iter().map(ContentType::to_value).collect();
        Value::List(ListValue::with_items(T::type_info(), items))
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(list) => list.into_items().into_iter().map(T::from_value).collect(),
            other => Err(Error::conversion(other.type_info().render(), "LIST")),
        }
    }
}

/// A type usable as a dictionary key: its text form is the entry tag's
/// key.
///
/// Implementations must describe a primitive-category shape — that is the
/// dictionary key invariant. Floating point scalars are deliberately not
/// key types here because they are not `Eq`; the dynamic layer still
/// accepts them through their text form.
pub trait KeyScalar: ContentType + Eq + Hash {
    /// The canonical text form written into the entry tag.
    fn to_key_text(&self) -> String;

    /// Converts entry-tag text back to the key type.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the text is not a valid literal.
    fn from_key_text(text: &str) -> Result<Self>;
}

macro_rules! impl_key_scalar {
    ($($ty:ty),*) => {
        $(
            impl KeyScalar for $ty {
                fn to_key_text(&self) -> String {
                    self.to_string()
                }

                fn from_key_text(text: &str) -> Result<Self> {
                    text.trim()
                        .parse::<$ty>()
                        .map_err(|_| Error::conversion(text, <$ty as Scalar>::NAME))
                }
            }
        )*
    };
}

impl_key_scalar!(bool, i8, u8, i16, u16, i32, u32, i64, u64);

impl KeyScalar for String {
    fn to_key_text(&self) -> String {
        self.clone()
    }

    fn from_key_text(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

impl<K: KeyScalar, V: ContentType> ContentType for IndexMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::dictionary_unchecked(K::type_info(), V::type_info())
    }

    fn to_value(&self) -> Value {
        let mut entries = FieldMap::with_capacity(self.len());
        for (key, value) in self {
            entries.insert(key.to_key_text(), value.to_value());
        }
        Value::Dictionary(DictValue::from_parts(
            K::type_info(),
            V::type_info(),
            entries,
        ))
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Dictionary(dictionary) => {
                let mut map = IndexMap::with_capacity(dictionary.len());
                for (key, value) in dictionary.into_entries() {
                    map.insert(K::from_key_text(&key)?, V::from_value(value)?);
                }
                Ok(map)
            }
            other => Err(Error::conversion(other.type_info().render(), "DICTIONARY")),
        }
    }
}

impl<T: ContentType> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        value.to_value()
    }
}

impl<K: KeyScalar, V: ContentType> From<IndexMap<K, V>> for Value {
    fn from(value: IndexMap<K, V>) -> Self {
        value.to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_round_trip() {
        let items = vec![1i32, 2, 3];
        let value = items.to_value();
        assert_eq!(value.type_info().render(), "LIST<INT32>");
        assert_eq!(Vec::<i32>::from_value(value).unwrap(), items);
    }

    #[test]
    fn test_empty_vec_keeps_element_type() {
        let value = Vec::<String>::new().to_value();
        assert_eq!(value.type_info().render(), "LIST<STRING>");
    }

    #[test]
    fn test_index_map_round_trip() {
        let mut map = IndexMap::new();
        map.insert(1i32, "x".to_string());
        map.insert(2i32, "y".to_string());
        let value = map.to_value();
        assert_eq!(value.type_info().render(), "DICTIONARY<INT32, STRING>");
        assert_eq!(IndexMap::<i32, String>::from_value(value).unwrap(), map);
    }

    #[test]
    fn test_shape_mismatch() {
        assert!(matches!(
            <i32 as ContentType>::from_value(Value::from("7")),
            Err(Error::Conversion { .. })
        ));
        assert!(matches!(
            Vec::<i32>::from_value(Value::from(7i32)),
            Err(Error::Conversion { .. })
        ));
    }
}
