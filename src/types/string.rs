//! Handler for string content and the escape rule.
//!
//! String content passes through escape processing on read: a backslash
//! de-escapes the following character. The writer applies the inverse,
//! escaping literal `\`, `[` and `]` before emission. A bare `]` in
//! unescaped content is a format error; a bare `[` always terminates the
//! content and opens the end tag.

use crate::error::{Error, Result};
use crate::reader::TagReader;
use crate::registry::Registry;
use crate::ser::TagWriter;
use crate::typeinfo::TypeInfo;
use crate::types::TypeHandler;
use crate::value::Value;

/// Escapes literal `\`, `[` and `]` for embedding in string content.
///
/// # Examples
///
/// ```rust
/// use tagform::escape;
///
/// assert_eq!(escape(r"a[b]c\d"), r"a\[b\]c\\d");
/// ```
#[must_use]
pub fn escape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        if matches!(c, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Reverses [`escape`]: each backslash takes the following character
/// literally.
///
/// # Errors
///
/// Fails if the text ends in a dangling backslash.
///
/// # Examples
///
/// ```rust
/// use tagform::{escape, unescape};
///
/// let original = r"odd \ [content]";
/// assert_eq!(unescape(&escape(original)).unwrap(), original);
/// ```
pub fn unescape(content: &str) -> Result<String> {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err(Error::custom("dangling escape at end of input")),
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// The handler for string content.
pub struct StringHandler;

impl TypeHandler for StringHandler {
    fn type_name(&self) -> &str {
        "STRING"
    }

    fn is_primitive(&self) -> bool {
        true
    }

    fn build_type_info(&self, _generics: &str, _registry: &Registry) -> Result<TypeInfo> {
        Ok(TypeInfo::string())
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
                Some('\\') => match reader.next_char() {
                    Some(escaped) => content.push(escaped),
                    None => return Err(reader.eof_error("a character after '\\'")),
                },
                Some('[') => {
                    reader.read_end_tag_body(key)?;
                    return Ok(Value::String(content));
                }
                Some(']') => {
                    return Err(
                        reader.format_error(format!("unescaped ']' in string content '{content}'"))
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
        let content = value
            .as_str()
            .ok_or_else(|| Error::conversion(value.type_info().render(), "STRING"))?;
        let type_info = if use_type_info { "STRING" } else { "" };
        let end_key = if use_type_info { key } else { "" };
        writer.line(
            depth,
            &format!("[{key}:{type_info}]{}[/{end_key}]", escape(content)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_string(input: &str, key: &str) -> Result<Value> {
        let registry = Registry::with_builtins();
        let mut reader = TagReader::new(input);
        StringHandler.read(&mut reader, key, "", None, &registry)
    }

    #[test]
    fn test_read_plain_content() {
        assert_eq!(
            read_string("hello world[/s]", "s").unwrap(),
            Value::String("hello world".to_string())
        );
    }

    #[test]
    fn test_read_escaped_brackets() {
        assert_eq!(
            read_string(r"a\[b\]c\\d[/s]", "s").unwrap(),
            Value::String(r"a[b]c\d".to_string())
        );
    }

    #[test]
    fn test_unescaped_bracket_is_format_error() {
        assert!(matches!(
            read_string("oops]...[/s]", "s"),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn test_truncated_escape() {
        assert!(matches!(
            read_string("abc\\", "s"),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_truncated_content() {
        assert!(matches!(
            read_string("abc", "s"),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_escape_unescape_round_trip() {
        for s in ["", "\\", "[]", "a]b[c", "\\\\[["] {
            assert_eq!(unescape(&escape(s)).unwrap(), s);
        }
    }

    #[test]
    fn test_unescape_dangling_backslash() {
        assert!(unescape("abc\\").is_err());
    }
}
