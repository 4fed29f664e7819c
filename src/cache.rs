// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-context logger cache.
//!
//! The cache is the only shared mutable state in the adapter.  It maps each [`Context`] to
//! the binding derived for it from a single base logger, deriving on first request.
//!
//! # Thread Safety
//!
//! Lookups take a shared read lock.  A miss takes the write lock, checks again and derives
//! under the lock, so concurrent first requests for one context derive exactly one binding
//! and every caller gets that binding back.  Bindings are never evicted.
//!
//! [`StructuredLogger::for_context`] runs while the write lock is held, so it must not call
//! back into the cache that is deriving it.  The trace event announcing a new binding is
//! emitted after the lock is released.

use crate::backend::StructuredLogger;
use crate::context::Context;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

type Bindings = HashMap<Context, Arc<dyn StructuredLogger>>;

/// Lazily derives and caches one logger binding per context.
#[derive(Debug)]
pub struct ContextLoggerCache {
    base: Arc<dyn StructuredLogger>,
    bindings: RwLock<Bindings>,
}

impl ContextLoggerCache {
    pub fn new(base: Arc<dyn StructuredLogger>) -> Self {
        Self {
            base,
            bindings: RwLock::new(HashMap::new()),
        }
    }

    /// The logger every binding is derived from.
    pub fn base(&self) -> &Arc<dyn StructuredLogger> {
        &self.base
    }

    /// Returns the binding for `context`, deriving it on first use.
    pub fn get_logger(&self, context: &Context) -> Arc<dyn StructuredLogger> {
        if let Some(binding) = self.read().get(context).cloned() {
            return binding;
        }
        let mut derived = false;
        let binding = self
            .bindings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(context.clone())
            .or_insert_with(|| {
                derived = true;
                self.base.for_context(context)
            })
            .clone();
        //the write guard is gone; a subscriber may look up bindings from here on
        if derived {
            tracing::trace!(context = %context, "derived logger binding");
        }
        binding
    }

    pub fn contains(&self, context: &Context) -> bool {
        self.read().contains_key(context)
    }

    /// Number of contexts with a binding.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Bindings> {
        //a panic while holding the lock cannot leave a half-inserted entry behind
        self.bindings.read().unwrap_or_else(PoisonError::into_inner)
    }
}
