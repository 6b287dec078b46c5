//! Handler for homogeneous sequences.

use crate::error::{Error, Result};
use crate::reader::TagReader;
use crate::registry::Registry;
use crate::ser::{write_object_body, TagWriter};
use crate::typeinfo::{split_generic, TypeInfo};
use crate::types::TypeHandler;
use crate::value::{ListValue, Value};
use crate::de;

/// The handler for `LIST<ELEMENT_TYPE>(count)` content.
///
/// The dimension is mandatory and gives the element count exactly: the
/// reader consumes `count` nested element tags (keys ignored, dimensions
/// forwarded to the element handler) and then requires the matching outer
/// end tag. Read and write both preserve sequence order.
pub struct ListHandler;

impl TypeHandler for ListHandler {
    fn type_name(&self) -> &str {
        "LIST"
    }

    fn is_primitive(&self) -> bool {
        false
    }

    fn build_type_info(&self, generics: &str, registry: &Registry) -> Result<TypeInfo> {
        if generics.is_empty() {
            return Err(Error::invalid_type_info(
                "no element type defined, expected LIST<ELEMENT_TYPE>",
            ));
        }
        Ok(TypeInfo::list(TypeInfo::parse(generics, registry)?))
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
                "no dimension info found, expected LIST<ELEMENT_TYPE>(count) -> LIST<{generics}>"
            ))
        })?;
        if generics.is_empty() {
            return Err(reader.format_error("no element type defined, expected LIST<ELEMENT_TYPE>"));
        }

        let element = TypeInfo::parse(generics, registry)?;
        let (base, inner) = split_generic(generics);
        let handler = registry.resolve(&base);

        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            let tag = reader.read_start_tag()?;
            let item = match handler {
                Some(handler) => handler.read(reader, "", &inner, tag.dimension, registry)?,
                None => de::read_object_body(reader, "", &base, registry)?,
            };
            items.push(item);
        }
        reader.read_end_tag(key)?;
        Ok(Value::List(ListValue::with_items(element, items)))
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
        let list = value
            .as_list()
            .ok_or_else(|| Error::conversion(value.type_info().render(), "LIST"))?;
        let type_info = if use_type_info {
            TypeInfo::list(list.element().clone()).render()
        } else {
            String::new()
        };
        writer.line(depth, &format!("[{key}:{type_info}({})]", list.len()))?;

        for item in list.items() {
            let info = item.type_info();
            match registry.resolve(info.handler_name()) {
                Some(handler) => handler.write(writer, depth + 1, "", item, false, registry)?,
                None => {
                    let object = item.as_object().ok_or_else(|| {
                        Error::not_supported(format!(
                            "no handler registered for list element '{}'",
                            info.render()
                        ))
                    })?;
                    writer.line(depth + 1, "[:]")?;
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

    fn read_list(input: &str, generics: &str, dimension: Option<usize>) -> Result<Value> {
        let registry = Registry::with_builtins();
        let mut reader = TagReader::new(input);
        ListHandler.read(&mut reader, "items", generics, dimension, &registry)
    }

    #[test]
    fn test_read_preserves_order() {
        let value = read_list("[:]1[/][:]2[/][:]3[/][/items]", "INT32", Some(3)).unwrap();
        let list = value.as_list().unwrap();
        assert_eq!(
            list.items(),
            &[Value::I32(1), Value::I32(2), Value::I32(3)]
        );
    }

    #[test]
    fn test_missing_dimension_is_format_error() {
        assert!(matches!(
            read_list("[:]1[/][/items]", "INT32", None),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn test_missing_element_type_is_format_error() {
        assert!(matches!(
            read_list("[:]1[/][/items]", "", Some(1)),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn test_fewer_elements_than_declared() {
        // Two elements declared, end tag after one: the element scan hits
        // the end tag where a start tag was required.
        assert!(matches!(
            read_list("[:]1[/][/items]", "INT32", Some(2)),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn test_extra_elements_before_end_tag() {
        assert!(matches!(
            read_list("[:]1[/][:]2[/][/items]", "INT32", Some(1)),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn test_nested_list_dimension_forwarded() {
        let value = read_list(
            "[:(2)][:]1[/][:]2[/][/][:(1)][:]3[/][/][/items]",
            "LIST<INT32>",
            Some(2),
        )
        .unwrap();
        let outer = value.as_list().unwrap();
        assert_eq!(outer.len(), 2);
        let first = outer.items()[0].as_list().unwrap();
        assert_eq!(first.items(), &[Value::I32(1), Value::I32(2)]);
    }
}
