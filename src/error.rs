//! Error types for tag-format serialization and deserialization.
//!
//! Failures fall into four families:
//!
//! - **Format errors**: malformed tag structure — a missing dimension, a
//!   missing generic parameter, a mismatched end tag.
//! - **Conversion errors**: tag content that cannot be converted to the
//!   declared scalar or enum type.
//! - **Not-supported errors**: a declared type-info that violates a
//!   structural rule, such as a non-primitive dictionary key or a generic
//!   parameter on an enum.
//! - **Unexpected end of input**: the stream ran out before a required
//!   terminator was found.
//!
//! Every handler fails fast: the first error encountered is propagated
//! verbatim to the caller with enough context (the offending key, content,
//! or raw type-info text) to localize the fault in the source text. No
//! partial results are returned and nothing is retried.
//!
//! ## Examples
//!
//! ```rust
//! use tagform::{read_document, Error};
//!
//! let result = read_document("[x:INT32]not a number[/x]");
//! assert!(matches!(result, Err(Error::Conversion { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing
/// tagged content.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Malformed tag structure at a known stream position.
    #[error("format error at line {line}, column {column}: {msg}")]
    Format {
        line: usize,
        column: usize,
        msg: String,
    },

    /// Malformed type-info text, independent of any stream position.
    #[error("malformed type info: {0}")]
    InvalidTypeInfo(String),

    /// Content that cannot be converted to the declared type.
    #[error("cannot convert '{content}' into {target}")]
    Conversion { content: String, target: String },

    /// A declared type-info violates a structural rule.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// The stream was exhausted before a required terminator was found.
    #[error("unexpected end of input at line {line}, column {column}, expected {expected}")]
    UnexpectedEof {
        line: usize,
        column: usize,
        expected: String,
    },

    /// A typed field lookup did not find the requested key.
    #[error("missing field '{0}'")]
    MissingField(String),

    /// IO error while reading from or writing to an external sink.
    #[error("io error: {0}")]
    Io(String),

    /// Generic message, used by custom handlers.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a format error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagform::Error;
    ///
    /// let err = Error::format(3, 7, "mismatched end tag");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn format(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Error::Format {
            line,
            column,
            msg: msg.into(),
        }
    }

    /// Creates an error for type-info text that does not follow the
    /// `NAME`, `NAME<INNER>` or `NAME<KEY, VALUE>` grammar.
    pub fn invalid_type_info(msg: impl Into<String>) -> Self {
        Error::InvalidTypeInfo(msg.into())
    }

    /// Creates a conversion error carrying the offending content and the
    /// target type it failed to convert into.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagform::Error;
    ///
    /// let err = Error::conversion("abc", "INT32");
    /// assert!(err.to_string().contains("'abc'"));
    /// ```
    pub fn conversion(content: impl Into<String>, target: impl Into<String>) -> Self {
        Error::Conversion {
            content: content.into(),
            target: target.into(),
        }
    }

    /// Creates a not-supported error for a structurally invalid type-info.
    pub fn not_supported(msg: impl fmt::Display) -> Self {
        Error::NotSupported(msg.to_string())
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, column: usize, expected: impl Into<String>) -> Self {
        Error::UnexpectedEof {
            line,
            column,
            expected: expected.into(),
        }
    }

    /// Creates a missing-field error for typed field access on an object.
    pub fn missing_field(name: impl Into<String>) -> Self {
        Error::MissingField(name.into())
    }

    /// Creates an I/O error.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
