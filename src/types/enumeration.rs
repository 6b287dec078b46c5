//! Handler for enum symbols.

use crate::error::{Error, Result};
use crate::reader::TagReader;
use crate::registry::Registry;
use crate::ser::TagWriter;
use crate::typeinfo::{split_generic, TypeInfo};
use crate::types::TypeHandler;
use crate::value::{EnumValue, Value};

/// The handler for enum content.
///
/// The type-info must name exactly one underlying enum,
/// `ENUM<WEEKDAY>`; a nested generic parameter on the enum is not
/// supported. Content is the symbol's display name, resolved against the
/// enum's registered symbol set with exact matching.
pub struct EnumHandler;

impl EnumHandler {
    fn enum_name(generics: &str) -> Result<String> {
        let (name, inner) = split_generic(generics);
        if name.is_empty() {
            return Err(Error::invalid_type_info(
                "expected ENUM<ENUM_TYPE_NAME>, found no type name",
            ));
        }
        if !inner.is_empty() {
            return Err(Error::not_supported(format!(
                "an enum cannot carry a generic parameter: ENUM<{generics}>"
            )));
        }
        Ok(name)
    }
}

impl TypeHandler for EnumHandler {
    fn type_name(&self) -> &str {
        "ENUM"
    }

    fn is_primitive(&self) -> bool {
        false
    }

    fn build_type_info(&self, generics: &str, _registry: &Registry) -> Result<TypeInfo> {
        Ok(TypeInfo::enumeration(&Self::enum_name(generics)?))
    }

    fn read(
        &self,
        reader: &mut TagReader<'_>,
        key: &str,
        generics: &str,
        _dimension: Option<usize>,
        registry: &Registry,
    ) -> Result<Value> {
        let name = Self::enum_name(generics)?;
        let symbols = registry.enum_symbols(&name).ok_or_else(|| {
            Error::not_supported(format!("no symbol set registered for enum '{name}'"))
        })?;

        let mut content = String::new();
        loop {
            match reader.next_char() {
                Some('[') => {
                    reader.read_end_tag_body(key)?;
                    return match symbols.iter().find(|s| **s == content) {
                        Some(symbol) => Ok(Value::Enum(EnumValue::new(&name, symbol))),
                        None => Err(Error::conversion(content, format!("enum {name}"))),
                    };
                }
                Some(']') => {
                    return Err(
                        reader.format_error(format!("unescaped ']' in enum content '{content}'"))
                    );
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
        let symbol = value
            .as_enum()
            .ok_or_else(|| Error::conversion(value.type_info().render(), "ENUM"))?;
        let type_info = if use_type_info {
            format!("ENUM<{}>", symbol.name())
        } else {
            String::new()
        };
        let end_key = if use_type_info { key } else { "" };
        writer.line(
            depth,
            &format!("[{key}:{type_info}]{}[/{end_key}]", symbol.variant()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekday_registry() -> Registry {
        Registry::builder()
            .register_enum("WEEKDAY", &["Monday", "Tuesday", "Wednesday"])
            .build()
    }

    fn read_enum(input: &str, generics: &str) -> Result<Value> {
        let registry = weekday_registry();
        let mut reader = TagReader::new(input);
        EnumHandler.read(&mut reader, "day", generics, None, &registry)
    }

    #[test]
    fn test_read_symbol() {
        let value = read_enum("Tuesday[/day]", "WEEKDAY").unwrap();
        assert_eq!(value, Value::Enum(EnumValue::new("WEEKDAY", "Tuesday")));
    }

    #[test]
    fn test_unknown_symbol_is_conversion_error() {
        assert!(matches!(
            read_enum("Caturday[/day]", "WEEKDAY"),
            Err(Error::Conversion { .. })
        ));
    }

    #[test]
    fn test_generic_parameter_is_not_supported() {
        assert!(matches!(
            read_enum("Monday[/day]", "WEEKDAY<INT32>"),
            Err(Error::NotSupported(_))
        ));
    }

    #[test]
    fn test_unregistered_enum_is_not_supported() {
        assert!(matches!(
            read_enum("January[/day]", "MONTH"),
            Err(Error::NotSupported(_))
        ));
    }

    #[test]
    fn test_symbol_matching_is_exact() {
        assert!(read_enum("monday[/day]", "WEEKDAY").is_err());
    }
}
