//! Registering a custom type handler.
//!
//! The registry is open: a handler registered before any read or write
//! participates in dispatch exactly like the built-ins. Here a color is
//! written as `#RRGGBB` text under its own `COLOR` type name.
//!
//! Run with: `cargo run --example custom_handler`

use std::sync::Arc;
use tagform::{
    Deserializer, Error, Registry, Result, Serializer, TagReader, TagWriter, TypeHandler,
    TypeInfo, Value,
};

struct ColorHandler;

impl TypeHandler for ColorHandler {
    fn type_name(&self) -> &str {
        "COLOR"
    }

    fn is_primitive(&self) -> bool {
        true
    }

    fn build_type_info(&self, _generics: &str, _registry: &Registry) -> Result<TypeInfo> {
        Ok(TypeInfo::primitive("COLOR"))
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
                    let valid = content.len() == 7
                        && content.starts_with('#')
                        && content[1..].chars().all(|c| c.is_ascii_hexdigit());
                    if !valid {
                        return Err(Error::conversion(content, "COLOR"));
                    }
                    let rgb = u32::from_str_radix(&content[1..], 16)
                        .map_err(|_| Error::conversion(content.as_str(), "COLOR"))?;
                    return Ok(Value::U32(rgb));
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
        let rgb = match value {
            Value::U32(rgb) => *rgb,
            other => return Err(Error::conversion(other.type_info().render(), "COLOR")),
        };
        let type_info = if use_type_info { "COLOR" } else { "" };
        let end_key = if use_type_info { key } else { "" };
        writer.line(depth, &format!("[{key}:{type_info}]#{rgb:06X}[/{end_key}]"))
    }
}

fn main() -> tagform::Result<()> {
    let registry = Registry::builder().register(Arc::new(ColorHandler)).build();

    let text = Serializer::new(&registry).to_string_as(
        "background",
        &Value::U32(0x20_40_80),
        &TypeInfo::primitive("COLOR"),
    )?;
    println!("{text}");

    let (key, value) = Deserializer::new(&registry).from_str(&text)?;
    println!("{key} = {value:?}");
    assert_eq!(value, Value::U32(0x20_40_80));
    Ok(())
}
