//! The tag format, as implemented by this crate.
//!
//! # Overview
//!
//! Tagged content is UTF-8 text made of bracketed tags. Every value is
//! framed by a start tag carrying the field key and a type annotation,
//! and a matching end tag:
//!
//! ```text
//! [hp:INT32]100[/hp]
//! [name:STRING]Alice[/name]
//! ```
//!
//! # Grammar
//!
//! ```text
//! start_tag   := "[" key ":" typeinfo [ "(" integer ")" ] "]"
//! end_tag     := "[/" [key] "]"
//! typeinfo    := NAME | NAME "<" typeinfo ["," typeinfo] ">"
//! key         := any text not containing "[" "]" ":" unescaped
//! content     := escaped text, terminated by unescaped "["
//! ```
//!
//! Type names are case-insensitive and canonicalized to upper case. The
//! parenthesized dimension is a base-10 non-negative integer: required
//! for lists and dictionaries, absent for scalars, strings and enums.
//!
//! # Built-in types
//!
//! | Category | Names |
//! |----------|-------|
//! | Boolean | `BOOLEAN` |
//! | Signed integers | `SBYTE`, `INT16`, `INT32`, `INT64` |
//! | Unsigned integers | `BYTE`, `UINT16`, `UINT32`, `UINT64` |
//! | Floating point | `SINGLE`, `DOUBLE` |
//! | Text | `STRING` |
//! | Enum symbol | `ENUM<NAME>` |
//! | Sequence | `LIST<ELEMENT>` |
//! | Key/value | `DICTIONARY<KEY, VALUE>` |
//!
//! # Escaping
//!
//! String content escapes `\`, `[` and `]` with a backslash; on read a
//! backslash de-escapes the following character. A bare `]` in content is
//! a format error. A bare `[` always terminates the content and opens the
//! end tag — content can therefore never contain an unescaped `[`.
//!
//! # Containers
//!
//! List elements are anonymous tags; the element type is declared once in
//! the list header and the dimension gives the exact element count:
//!
//! ```text
//! [items:LIST<STRING>(2)]
//!     [:]a[/]
//!     [:]b[/]
//! [/items]
//! ```
//!
//! Dictionary entries put the key's text form in the entry tag; the key
//! type must be a primitive category (numbers, booleans or strings):
//!
//! ```text
//! [scores:DICTIONARY<INT32, STRING>(2)]
//!     [1:]x[/]
//!     [2:]y[/]
//! [/scores]
//! ```
//!
//! Nested containers carry their own dimensions on their anonymous tags:
//!
//! ```text
//! [grid:LIST<LIST<INT32>>(2)]
//!     [:(2)]
//!         [:]1[/]
//!         [:]2[/]
//!     [/]
//!     [:(1)]
//!         [:]3[/]
//!     [/]
//! [/grid]
//! ```
//!
//! # Objects
//!
//! A type with no registered handler is written structurally: the tag
//! carries the type's name (or nothing, for anonymous elements) and each
//! field becomes a nested tag keyed by the field's name:
//!
//! ```text
//! [position:VECTOR3]
//!     [X:SINGLE]1[/X]
//!     [Y:SINGLE]2[/Y]
//!     [Z:SINGLE]3[/Z]
//! [/position]
//! ```
//!
//! # Whitespace
//!
//! Indentation between tags is cosmetic. The writer emits one tag per
//! line, indented by the configured tab space per nesting level; the
//! reader skips whitespace between tags and never validates indentation.
//! Content whitespace is significant for strings; numeric content is
//! trimmed before conversion.
