//! Handler for primitive-keyed key/value entries.

use crate::de;
use crate::error::{Error, Result};
use crate::map::FieldMap;
use crate::reader::TagReader;
use crate::registry::Registry;
use crate::ser::{write_object_body, TagWriter};
use crate::typeinfo::{split_generic, split_pair, TypeInfo, TypeKind};
use crate::types::TypeHandler;
use crate::value::{parse_scalar_text, DictValue, Value};

/// The handler for `DICTIONARY<KEY_TYPE, VALUE_TYPE>(count)` content.
///
/// The key type must resolve to a primitive-category handler. Each entry
/// is one nested tag whose key text carries the entry key and whose
/// content carries the value; the key text is converted to the key type
/// before insertion. Duplicate keys overwrite silently in insertion
/// order, last write wins.
pub struct DictionaryHandler;

impl DictionaryHandler {
    fn key_value_infos(generics: &str, registry: &Registry) -> Result<(TypeInfo, TypeInfo)> {
        let (key_text, value_text) = split_pair(generics)?;
        let key_info = TypeInfo::parse(&key_text, registry)?;
        let primitive_key = registry
            .resolve(key_info.handler_name())
            .map_or(false, |handler| handler.is_primitive());
        if !primitive_key {
            return Err(Error::not_supported(format!(
                "invalid key type found in '{generics}'"
            )));
        }
        let value_info = TypeInfo::parse(&value_text, registry)?;
        Ok((key_info, value_info))
    }

    /// Converts entry-key text to the key type's canonical form.
    fn canonical_key(key_info: &TypeInfo, text: &str) -> Result<String> {
        if key_info.kind() == TypeKind::String {
            return Ok(text.to_string());
        }
        match parse_scalar_text(key_info.name(), text) {
            Some(parsed) => Ok(parsed?.scalar_text().unwrap_or_else(|| text.to_string())),
            // A custom primitive handler owns its own text form.
            None => Ok(text.to_string()),
        }
    }
}

impl TypeHandler for DictionaryHandler {
    fn type_name(&self) -> &str {
        "DICTIONARY"
    }

    fn is_primitive(&self) -> bool {
        false
    }

    fn build_type_info(&self, generics: &str, registry: &Registry) -> Result<TypeInfo> {
        if generics.is_empty() {
            return Err(Error::invalid_type_info(
                "no key/value types defined, expected DICTIONARY<KEY_TYPE, VALUE_TYPE>",
            ));
        }
        let (key_info, value_info) = Self::key_value_infos(generics, registry)?;
        TypeInfo::dictionary(key_info, value_info)
    }

    fn read(
        &self,
        reader: &mut TagReader<'_>,
        key: &str,
        generics: &str,
        dimension: Option<usize>,
        registry: &Registry,
    ) -> Result<Value> {
        let count = dimension.ok_or_else(|| {
            reader.format_error(format!(
                "no dimension info found, expected DICTIONARY<KEY_TYPE, VALUE_TYPE>(count) -> DICTIONARY<{generics}>"
            ))
        })?;
        if generics.is_empty() {
            return Err(reader.format_error(
                "no key/value types defined, expected DICTIONARY<KEY_TYPE, VALUE_TYPE>",
            ));
        }

        let (key_info, value_info) = Self::key_value_infos(generics, registry)?;
        let (_, value_text) = split_pair(generics)?;
        let (value_base, value_inner) = split_generic(&value_text);
        let value_handler = registry.resolve(&value_base);

        let mut entries = FieldMap::with_capacity(count);
        for _ in 0..count {
            let tag = reader.read_start_tag()?;
            let entry_key = Self::canonical_key(&key_info, &tag.key)?;
            let value = match value_handler {
                Some(handler) => handler.read(reader, "", &value_inner, tag.dimension, registry)?,
                None => de::read_object_body(reader, "", &value_base, registry)?,
            };
            entries.insert(entry_key, value);
        }
        reader.read_end_tag(key)?;
        Ok(Value::Dictionary(DictValue::from_parts(
            key_info, value_info, entries,
        )))
    }

    fn write(
        &self,
        writer: &mut TagWriter<'_>,
        depth: usize,
        key: &str,
        value: &Value,
        use_type_info: bool,
        registry: &Registry,
    ) -> Result<()> {
        let dictionary = value
            .as_dictionary()
            .ok_or_else(|| Error::conversion(value.type_info().render(), "DICTIONARY"))?;
        let type_info = if use_type_info {
            TypeInfo::dictionary_unchecked(
                dictionary.key_type().clone(),
                dictionary.value_type().clone(),
            )
            .render()
        } else {
            String::new()
        };
        writer.line(depth, &format!("[{key}:{type_info}({})]", dictionary.len()))?;

        for (entry_key, entry) in dictionary.entries().iter() {
            if entry_key.contains(|c| matches!(c, '[' | ']' | ':' | '(' | ')')) {
                return Err(Error::not_supported(format!(
                    "dictionary key '{entry_key}' is not representable as tag text"
                )));
            }
            let info = entry.type_info();
            match registry.resolve(info.handler_name()) {
                Some(handler) => {
                    handler.write(writer, depth + 1, entry_key, entry, false, registry)?;
                }
                None => {
                    let object = entry.as_object().ok_or_else(|| {
                        Error::not_supported(format!(
                            "no handler registered for dictionary value '{}'",
                            info.render()
                        ))
                    })?;
                    writer.line(depth + 1, &format!("[{entry_key}:]"))?;
                    write_object_body(writer, depth + 2, object, registry)?;
                    writer.line(depth + 1, "[/]")?;
                }
            }
        }

        let end_key = if use_type_info { key } else { "" };
        writer.line(depth, &format!("[/{end_key}]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_dict(input: &str, generics: &str, dimension: Option<usize>) -> Result<Value> {
        let registry = Registry::with_builtins();
        let mut reader = TagReader::new(input);
        DictionaryHandler.read(&mut reader, "map", generics, dimension, &registry)
    }

    #[test]
    fn test_read_entries() {
        let value = read_dict("[1:]x[/][2:]y[/][/map]", "INT32, STRING", Some(2)).unwrap();
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.get("1").and_then(Value::as_str), Some("x"));
        assert_eq!(dict.get("2").and_then(Value::as_str), Some("y"));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let value = read_dict("[1:]x[/][1:]y[/][/map]", "INT32, STRING", Some(2)).unwrap();
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("1").and_then(Value::as_str), Some("y"));
    }

    #[test]
    fn test_key_text_is_canonicalized() {
        let value = read_dict("[007:]x[/][/map]", "INT32, STRING", Some(1)).unwrap();
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.get("7").and_then(Value::as_str), Some("x"));
    }

    #[test]
    fn test_bad_key_text_is_conversion_error() {
        assert!(matches!(
            read_dict("[one:]x[/][/map]", "INT32, STRING", Some(1)),
            Err(Error::Conversion { .. })
        ));
    }

    #[test]
    fn test_non_primitive_key_is_not_supported() {
        assert!(matches!(
            read_dict("[/map]", "LIST<INT32>, STRING", Some(0)),
            Err(Error::NotSupported(_))
        ));
    }

    #[test]
    fn test_missing_dimension_is_format_error() {
        assert!(matches!(
            read_dict("[/map]", "INT32, STRING", None),
            Err(Error::Format { .. })
        ));
    }
}
