//! Configuration options for reading and writing tagged content.
//!
//! ## Examples
//!
//! ```rust
//! use tagform::{Options, Trailing};
//!
//! // Default: tab indentation, trailing content after the root end tag
//! // is ignored.
//! let options = Options::new();
//! assert_eq!(options.tab_space, "\t");
//!
//! // Reject anything but whitespace after the root end tag.
//! let options = Options::strict();
//! assert_eq!(options.trailing, Trailing::Strict);
//! ```

/// What to do with content left in the stream after the root tag's
/// matching end tag has been consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Trailing {
    /// Ignore trailing content. This mirrors the historical behavior and
    /// allows several readers to share one stream.
    #[default]
    Lenient,
    /// Reject non-whitespace trailing content with a format error.
    Strict,
}

/// Options for the serializer and deserializer.
///
/// The tab space is the per-level indentation prefix emitted on write; it
/// is cosmetic only and never validated on read.
#[derive(Clone, Debug)]
pub struct Options {
    pub tab_space: String,
    pub trailing: Trailing,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            tab_space: "\t".to_string(),
            trailing: Trailing::default(),
        }
    }
}

impl Options {
    /// Default options: tab indentation, lenient trailing content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject trailing content after the root end tag.
    #[must_use]
    pub fn strict() -> Self {
        Options {
            trailing: Trailing::Strict,
            ..Default::default()
        }
    }

    /// Sets the per-level indentation prefix.
    #[must_use]
    pub fn with_tab_space(mut self, tab_space: &str) -> Self {
        self.tab_space = tab_space.to_string();
        self
    }

    /// Sets the trailing-content policy.
    #[must_use]
    pub fn with_trailing(mut self, trailing: Trailing) -> Self {
        self.trailing = trailing;
        self
    }
}
