//! The type registry driving read and write dispatch.
//!
//! A [`Registry`] maps uppercase canonical type names to
//! [`TypeHandler`](crate::types::TypeHandler) instances and holds the
//! symbol sets of registered enums. Lookup is case-insensitive: names are
//! canonicalized to upper case before storage and query.
//!
//! The registry has an explicit two-phase lifecycle: a
//! [`RegistryBuilder`] accumulates registrations, [`RegistryBuilder::build`]
//! freezes them into an immutable `Registry`. A frozen registry is safe to
//! share across threads; there is no removal and no mutation after build.
//! Tests construct independent registries per case instead of touching
//! shared state.
//!
//! ## Examples
//!
//! ```rust
//! use tagform::Registry;
//!
//! let registry = Registry::builder()
//!     .register_enum("WEEKDAY", &["Monday", "Tuesday", "Wednesday"])
//!     .build();
//!
//! assert!(registry.resolve("list").is_some());
//! assert!(registry.resolve("LIST").is_some());
//! assert!(registry.enum_symbols("weekday").is_some());
//! ```

use crate::types::{
    DictionaryHandler, EnumHandler, ListHandler, Primitive, StringHandler, TypeHandler,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Accumulates handler and enum registrations before the registry is
/// frozen.
#[derive(Default)]
pub struct RegistryBuilder {
    handlers: HashMap<String, Arc<dyn TypeHandler>>,
    enums: HashMap<String, Vec<String>>,
}

impl RegistryBuilder {
    /// A builder with no registrations at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A builder pre-populated with the built-in handlers: the eleven
    /// fixed-width scalars, `STRING`, `ENUM`, `LIST` and `DICTIONARY`.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::empty()
            .register(Arc::new(Primitive::<bool>::new()))
            .register(Arc::new(Primitive::<i8>::new()))
            .register(Arc::new(Primitive::<u8>::new()))
            .register(Arc::new(Primitive::<i16>::new()))
            .register(Arc::new(Primitive::<u16>::new()))
            .register(Arc::new(Primitive::<i32>::new()))
            .register(Arc::new(Primitive::<u32>::new()))
            .register(Arc::new(Primitive::<i64>::new()))
            .register(Arc::new(Primitive::<u64>::new()))
            .register(Arc::new(Primitive::<f32>::new()))
            .register(Arc::new(Primitive::<f64>::new()))
            .register(Arc::new(StringHandler))
            .register(Arc::new(EnumHandler))
            .register(Arc::new(ListHandler))
            .register(Arc::new(DictionaryHandler))
    }

    /// Adds or replaces the handler for its canonical type name.
    #[must_use]
    pub fn register(mut self, handler: Arc<dyn TypeHandler>) -> Self {
        let name = handler.type_name().to_ascii_uppercase();
        self.handlers.insert(name, handler);
        self
    }

    /// Registers an enum's symbol set under its canonical name. Symbols
    /// keep their display form; matching is exact.
    #[must_use]
    pub fn register_enum(mut self, name: &str, symbols: &[&str]) -> Self {
        self.enums.insert(
            name.to_ascii_uppercase(),
            symbols.iter().map(|s| (*s).to_string()).collect(),
        );
        self
    }

    /// Freezes the registrations into an immutable registry.
    #[must_use]
    pub fn build(self) -> Registry {
        Registry {
            handlers: self.handlers,
            enums: self.enums,
        }
    }
}

/// An immutable name-to-handler lookup table.
pub struct Registry {
    handlers: HashMap<String, Arc<dyn TypeHandler>>,
    enums: HashMap<String, Vec<String>>,
}

impl Registry {
    /// A builder pre-populated with the built-in handlers.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::with_builtins()
    }

    /// A registry containing only the built-in handlers.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::builder().build()
    }

    /// Looks up the handler for a type name, case-insensitively.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&dyn TypeHandler> {
        if name.is_empty() {
            return None;
        }
        self.handlers
            .get(&name.to_ascii_uppercase())
            .map(AsRef::as_ref)
    }

    /// The registered symbol set of an enum, case-insensitive on the enum
    /// name.
    #[must_use]
    pub fn enum_symbols(&self, name: &str) -> Option<&[String]> {
        self.enums
            .get(&name.to_ascii_uppercase())
            .map(Vec::as_slice)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_resolution() {
        let registry = Registry::with_builtins();
        assert!(registry.resolve("INT32").is_some());
        assert!(registry.resolve("int32").is_some());
        assert!(registry.resolve("Int32").is_some());
        assert!(registry.resolve("GUID").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let registry = Registry::builder()
            .register(Arc::new(Primitive::<i32>::new()))
            .build();
        assert_eq!(registry.resolve("INT32").unwrap().type_name(), "INT32");
    }

    #[test]
    fn test_enum_symbols() {
        let registry = Registry::builder()
            .register_enum("Weekday", &["Monday", "Tuesday"])
            .build();
        let symbols = registry.enum_symbols("WEEKDAY").unwrap();
        assert_eq!(symbols, ["Monday", "Tuesday"]);
        assert!(registry.enum_symbols("MONTH").is_none());
    }
}
