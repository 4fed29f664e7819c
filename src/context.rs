// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context identifiers that scope a logger.
//!
//! A [`Context`] names the component a logger speaks for.  Most of the time that is a Rust
//! type, so [`Context::of`] derives the identifier from the type's path, the same string
//! [`std::any::type_name`] reports.  Components that are not naturally a type can use
//! [`Context::named`].
//!
//! ```rust
//! use contextlog::Context;
//!
//! struct Worker;
//! let ctx = Context::of::<Worker>();
//! assert!(ctx.name().ends_with("Worker"));
//! assert_eq!(ctx, Context::of::<Worker>());
//! assert_ne!(ctx, Context::named("something else"));
//! ```

use std::fmt::Display;
use std::sync::Arc;

/// Opaque identifier a logger binding is scoped to.
///
/// Contexts are immutable and cheap to clone.  Two contexts are equal when their names are
/// equal, so a context built from a type and one built from that type's path by hand refer
/// to the same binding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Context {
    name: Arc<str>,
}

impl Context {
    /// The context for type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: Arc::from(std::any::type_name::<T>()),
        }
    }

    /// A context with an explicit name.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for Context {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Context {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for Context {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

/*
Boilerplate notes.

Copy is out, the name lives on the heap.
Default is not sensible, an empty context names nothing.
Eq/Hash/Ord are by name so contexts work as map keys regardless of how they were built.
Deref to str would be convenient but blurs the line between a context and an arbitrary string.
*/

#[cfg(test)]
mod tests {
    use super::Context;
    use std::collections::HashMap;

    struct Alpha;
    struct Beta;

    #[test]
    fn type_contexts_are_stable() {
        assert_eq!(Context::of::<Alpha>(), Context::of::<Alpha>());
        assert_ne!(Context::of::<Alpha>(), Context::of::<Beta>());
    }

    #[test]
    fn type_context_uses_type_path() {
        let ctx = Context::of::<Alpha>();
        assert_eq!(ctx.name(), std::any::type_name::<Alpha>());
        assert_eq!(ctx, Context::named(std::any::type_name::<Alpha>()));
    }

    #[test]
    fn usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(Context::named("a"), 1);
        map.insert(Context::from("b"), 2);
        map.insert(Context::from(String::from("a")), 3);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Context::named("a")), Some(&3));
    }

    #[test]
    fn displays_name() {
        assert_eq!(Context::named("bus.worker").to_string(), "bus.worker");
    }
}
