//! Handler for fixed-width scalar content.

use crate::error::{Error, Result};
use crate::reader::TagReader;
use crate::registry::Registry;
use crate::ser::TagWriter;
use crate::typeinfo::TypeInfo;
use crate::types::TypeHandler;
use crate::value::{Scalar, Value};
use std::marker::PhantomData;

/// The handler for one scalar type.
///
/// One instance per fixed-width number or boolean; the built-in registry
/// carries all eleven. Content is accumulated up to the unescaped `[` of
/// the end tag and converted with the scalar's `FromStr`; embedded `]`,
/// tab, carriage return or newline characters are a format error.
pub struct Primitive<T: Scalar> {
    marker: PhantomData<T>,
}

impl<T: Scalar> Primitive<T> {
    #[must_use]
    pub fn new() -> Self {
        Primitive {
            marker: PhantomData,
        }
    }
}

impl<T: Scalar> Default for Primitive<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> TypeHandler for Primitive<T> {
    fn type_name(&self) -> &str {
        T::NAME
    }

    fn is_primitive(&self) -> bool {
        true
    }

    fn build_type_info(&self, _generics: &str, _registry: &Registry) -> Result<TypeInfo> {
        Ok(TypeInfo::primitive(T::NAME))
    }

    fn read(
        &self,
        reader: &mut TagReader<'_>,
        key: &str,
        _generics: &str,
        _dimension: Option<usize>,
        _registry: &Registry,
    ) -> Result<Value> {
        let mut content = String::new();
        loop {
            match reader.next_char() {
                Some('[') => {
                    reader.read_end_tag_body(key)?;
                    return content
                        .trim()
                        .parse::<T>()
                        .map(Scalar::into_value)
                        .map_err(|_| Error::conversion(content.trim(), T::NAME));
                }
                Some(c @ (']' | '\r' | '\n' | '\t')) => {
                    return Err(reader.format_error(format!(
                        "invalid character {c:?} in {} content '{content}'",
                        T::NAME
                    )));
                }
                Some(c) => content.push(c),
                None => return Err(reader.eof_error(format!("end tag '[/{key}]'"))),
            }
        }
    }

    fn write(
        &self,
        writer: &mut TagWriter<'_>,
        depth: usize,
        key: &str,
        value: &Value,
        use_type_info: bool,
        _registry: &Registry,
    ) -> Result<()> {
        let scalar = T::from_value(value)
            .ok_or_else(|| Error::conversion(value.type_info().render(), T::NAME))?;
        let type_info = if use_type_info { T::NAME } else { "" };
        let end_key = if use_type_info { key } else { "" };
        writer.line(depth, &format!("[{key}:{type_info}]{scalar}[/{end_key}]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_i32(input: &str, key: &str) -> Result<Value> {
        let registry = Registry::with_builtins();
        let mut reader = TagReader::new(input);
        Primitive::<i32>::new().read(&mut reader, key, "", None, &registry)
    }

    #[test]
    fn test_read_scalar_content() {
        assert_eq!(read_i32("42[/x]", "x").unwrap(), Value::I32(42));
        assert_eq!(read_i32("-7[/]", "").unwrap(), Value::I32(-7));
    }

    #[test]
    fn test_bad_literal_is_conversion_error() {
        assert!(matches!(
            read_i32("forty[/x]", "x"),
            Err(Error::Conversion { .. })
        ));
    }

    #[test]
    fn test_embedded_bracket_is_format_error() {
        assert!(matches!(read_i32("4]2[/x]", "x"), Err(Error::Format { .. })));
    }

    #[test]
    fn test_embedded_newline_is_format_error() {
        assert!(matches!(read_i32("4\n2[/x]", "x"), Err(Error::Format { .. })));
    }

    #[test]
    fn test_truncated_stream() {
        assert!(matches!(
            read_i32("42", "x"),
            Err(Error::UnexpectedEof { .. })
        ));
    }
}
