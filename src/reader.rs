//! The tag stream reader.
//!
//! [`TagReader`] tokenizes the bracket-tag text format: it reads raw
//! characters with `peek`/`next`, recognizes start tags
//! `[key:typeinfo(dimension)]` and end tags `[/key]`, and tracks line and
//! column numbers for error reporting.
//!
//! Content scanning (the characters between a start tag and the `[` of its
//! end tag) is driven by the type handlers themselves, one character at a
//! time, because only the handler knows which characters are legal for its
//! category — a primitive rejects embedded tabs and newlines, a string
//! de-escapes backslash sequences, an enum accumulates a bare symbol.
//!
//! Whitespace between tags is cosmetic and skipped; indentation written by
//! the serializer is never validated on read.

use crate::error::{Error, Result};

/// A lexical unit of the format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Start(StartTag),
    /// An end tag `[/key]`; the key is empty for anonymous elements.
    End(String),
}

/// A parsed start tag `[key:typeinfo(dimension)]`.
///
/// The key is empty for anonymous list elements; the type-info text is
/// empty for untyped list elements and dictionary entries, whose type is
/// declared by the enclosing container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    pub key: String,
    pub type_info: String,
    pub dimension: Option<usize>,
}

/// A character-level reader over tagged text.
pub struct TagReader<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> TagReader<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        TagReader {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current line, 1-based.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current column, 1-based.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Whether everything left in the stream is whitespace.
    #[must_use]
    pub fn remainder_is_blank(&self) -> bool {
        self.input[self.position..].chars().all(char::is_whitespace)
    }

    /// A format error anchored at the current position.
    pub fn format_error(&self, msg: impl Into<String>) -> Error {
        Error::format(self.line, self.column, msg)
    }

    /// An end-of-input error anchored at the current position.
    pub fn eof_error(&self, expected: impl Into<String>) -> Error {
        Error::unexpected_eof(self.line, self.column, expected)
    }

    /// Reads the next tag, skipping any whitespace before its `[`.
    ///
    /// # Errors
    ///
    /// Fails with a format error on non-whitespace content outside a tag
    /// and with [`Error::UnexpectedEof`] if the stream ends mid-token.
    pub fn read_tag(&mut self) -> Result<Tag> {
        loop {
            match self.next_char() {
                Some('[') => break,
                Some(c) if c.is_whitespace() => {}
                Some(c) => {
                    return Err(self.format_error(format!("expected '[', found '{c}'")));
                }
                None => return Err(self.eof_error("a tag")),
            }
        }

        if self.peek_char() == Some('/') {
            self.next_char();
            let key = self.read_until(|c| c == ']', "']' closing an end tag")?;
            return Ok(Tag::End(key));
        }

        let key = match self.scan_tag_text(&[':', ']', '('])? {
            (key, ':') => key,
            (key, stop) => {
                return Err(self.format_error(format!(
                    "expected ':' after tag key '{key}', found '{stop}'"
                )));
            }
        };

        let mut type_info = String::new();
        let mut dimension = None;
        let mut depth = 0usize;
        loop {
            match self.next_char() {
                Some('<') => {
                    depth += 1;
                    type_info.push('<');
                }
                Some('>') => {
                    depth = depth.saturating_sub(1);
                    type_info.push('>');
                }
                Some('(') if depth == 0 => {
                    let digits = self.read_until(|c| c == ')', "')' closing a dimension")?;
                    let trimmed = digits.trim();
                    dimension = Some(trimmed.parse::<usize>().map_err(|_| {
                        self.format_error(format!("invalid dimension '{trimmed}'"))
                    })?);
                    match self.next_char() {
                        Some(']') => break,
                        Some(c) => {
                            return Err(
                                self.format_error(format!("expected ']' after dimension, found '{c}'"))
                            );
                        }
                        None => return Err(self.eof_error("']' closing a start tag")),
                    }
                }
                Some(']') if depth == 0 => break,
                Some(c) => type_info.push(c),
                None => return Err(self.eof_error("']' closing a start tag")),
            }
        }

        Ok(Tag::Start(StartTag {
            key,
            type_info: type_info.trim().to_string(),
            dimension,
        }))
    }

    /// Reads the next tag and requires it to be a start tag.
    pub fn read_start_tag(&mut self) -> Result<StartTag> {
        match self.read_tag()? {
            Tag::Start(tag) => Ok(tag),
            Tag::End(key) => Err(self.format_error(format!(
                "unexpected end tag '[/{key}]' where a start tag was required"
            ))),
        }
    }

    /// Reads an end tag `[/key]` and checks its key.
    pub fn read_end_tag(&mut self, key: &str) -> Result<()> {
        loop {
            match self.next_char() {
                Some('[') => break,
                Some(c) if c.is_whitespace() => {}
                Some(c) => {
                    return Err(self.format_error(format!("expected '[/{key}]', found '{c}'")));
                }
                None => return Err(self.eof_error(format!("end tag '[/{key}]'"))),
            }
        }
        self.read_end_tag_body(key)
    }

    /// Reads the rest of an end tag whose opening `[` was already consumed
    /// by a handler's content scan.
    pub fn read_end_tag_body(&mut self, key: &str) -> Result<()> {
        match self.next_char() {
            Some('/') => {}
            Some(c) => {
                return Err(self.format_error(format!("expected '[/{key}]', found '[{c}'")));
            }
            None => return Err(self.eof_error(format!("end tag '[/{key}]'"))),
        }
        let found = self.read_until(|c| c == ']', "']' closing an end tag")?;
        if found == key {
            Ok(())
        } else {
            Err(self.format_error(format!(
                "mismatched end tag '[/{found}]', expected '[/{key}]'"
            )))
        }
    }

    fn scan_tag_text(&mut self, stops: &[char]) -> Result<(String, char)> {
        let mut text = String::new();
        loop {
            match self.next_char() {
                Some(c) if stops.contains(&c) => return Ok((text, c)),
                Some('[') => {
                    return Err(self.format_error("unexpected '[' inside a tag"));
                }
                Some(c) => text.push(c),
                None => return Err(self.eof_error("']' closing a tag")),
            }
        }
    }

    fn read_until(&mut self, stop: impl Fn(char) -> bool, expected: &str) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_char() {
                Some(c) if stop(c) => return Ok(text),
                Some(c) => text.push(c),
                None => return Err(self.eof_error(expected)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_tag_with_dimension() {
        let mut reader = TagReader::new("[items:LIST<STRING>(2)]");
        let tag = reader.read_start_tag().unwrap();
        assert_eq!(tag.key, "items");
        assert_eq!(tag.type_info, "LIST<STRING>");
        assert_eq!(tag.dimension, Some(2));
    }

    #[test]
    fn test_anonymous_tag() {
        let mut reader = TagReader::new("[:]");
        let tag = reader.read_start_tag().unwrap();
        assert_eq!(tag.key, "");
        assert_eq!(tag.type_info, "");
        assert_eq!(tag.dimension, None);
    }

    #[test]
    fn test_anonymous_sized_tag() {
        let mut reader = TagReader::new("[:(3)]");
        let tag = reader.read_start_tag().unwrap();
        assert_eq!(tag.key, "");
        assert_eq!(tag.dimension, Some(3));
    }

    #[test]
    fn test_end_tag() {
        let mut reader = TagReader::new("  \n\t[/items]");
        assert_eq!(reader.read_tag().unwrap(), Tag::End("items".to_string()));
    }

    #[test]
    fn test_mismatched_end_tag() {
        let mut reader = TagReader::new("[/other]");
        let err = reader.read_end_tag("items").unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }

    #[test]
    fn test_nested_generic_survives_dimension_scan() {
        let mut reader = TagReader::new("[m:DICTIONARY<INT32, LIST<STRING>>(1)]");
        let tag = reader.read_start_tag().unwrap();
        assert_eq!(tag.type_info, "DICTIONARY<INT32, LIST<STRING>>");
        assert_eq!(tag.dimension, Some(1));
    }

    #[test]
    fn test_eof_mid_tag() {
        let mut reader = TagReader::new("[items:LIST<STR");
        let err = reader.read_tag().unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { .. }));
    }

    #[test]
    fn test_line_column_tracking() {
        let mut reader = TagReader::new("\n\n  [x:INT32]");
        reader.read_start_tag().unwrap();
        assert_eq!(reader.line(), 3);
    }
}
