// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide logger factory.
//!
//! Libraries that cannot have a factory passed in can look loggers up here instead.  The
//! application installs its factory once, early, and every later lookup goes through it.
//!
//! # Default Behavior
//!
//! Until a factory is installed, lookups use a [`StructuredLoggerFactory`] over
//! [`crate::TracingLogger::global`], so records reach whatever `tracing` subscriber is the
//! default at the call site.
//!
//! # Examples
//!
//! ```
//! use contextlog::global_logger::{logger_for, set_global_factory};
//! use contextlog::{InMemoryLogger, StructuredLoggerFactory};
//! use std::sync::Arc;
//!
//! struct Dispatcher;
//!
//! let backend = Arc::new(InMemoryLogger::new());
//! set_global_factory(Arc::new(StructuredLoggerFactory::new(backend.clone())));
//!
//! logger_for::<Dispatcher>().info("ready", &[]);
//! assert!(backend.drain_logs().contains("ready"));
//! ```
//!
//! # Logger Lifecycle
//!
//! Factories are reference-counted.  Replacing the global factory does not invalidate
//! loggers already handed out; they keep logging to the backend they were created from.

use crate::context::Context;
use crate::facade::{Log, LoggerFactory};
use crate::factory::StructuredLoggerFactory;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static GLOBAL_FACTORY: OnceLock<RwLock<Arc<dyn LoggerFactory>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<dyn LoggerFactory>> {
    GLOBAL_FACTORY.get_or_init(|| RwLock::new(Arc::new(StructuredLoggerFactory::default())))
}

/// The current global factory.
pub fn global_factory() -> Arc<dyn LoggerFactory> {
    slot()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the global factory.
pub fn set_global_factory(factory: Arc<dyn LoggerFactory>) {
    *slot().write().unwrap_or_else(PoisonError::into_inner) = factory;
}

/// The global logger for type `T`.
pub fn logger_for<T: ?Sized + 'static>() -> Arc<dyn Log> {
    global_factory().get_logger_for(&Context::of::<T>())
}

/// The global logger for a named context.
pub fn logger_named(name: &str) -> Arc<dyn Log> {
    global_factory().get_logger_for(&Context::named(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_logger::InMemoryLogger;
    use std::sync::Mutex;

    static TEST_FACTORY_GUARD: Mutex<()> = Mutex::new(());

    struct Probe;

    #[test]
    fn replaced_factory_receives_lookups() {
        let _guard = TEST_FACTORY_GUARD.lock().unwrap();
        let original = global_factory();
        let backend = Arc::new(InMemoryLogger::new());
        set_global_factory(Arc::new(StructuredLoggerFactory::new(backend.clone())));

        logger_for::<Probe>().warn("probe {0}", &[1.into()]);
        logger_named("named").info("hello", &[]);

        let records = backend.drain_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].context(), Some(&Context::of::<Probe>()));
        assert_eq!(records[0].rendered(), "probe 1");
        assert_eq!(records[1].context(), Some(&Context::named("named")));

        set_global_factory(original);
    }

    #[test]
    fn handed_out_loggers_survive_replacement() {
        let _guard = TEST_FACTORY_GUARD.lock().unwrap();
        let original = global_factory();
        let first = Arc::new(InMemoryLogger::new());
        set_global_factory(Arc::new(StructuredLoggerFactory::new(first.clone())));
        let log = logger_named("kept");

        let second = Arc::new(InMemoryLogger::new());
        set_global_factory(Arc::new(StructuredLoggerFactory::new(second.clone())));
        log.info("still first", &[]);

        assert_eq!(first.drain_records().len(), 1);
        assert!(second.drain_records().is_empty());

        set_global_factory(original);
    }

    #[test]
    fn thread_safety() {
        use std::thread;

        let _guard = TEST_FACTORY_GUARD.lock().unwrap();
        let original = global_factory();
        let backend = Arc::new(InMemoryLogger::new());
        let factory: Arc<dyn LoggerFactory> =
            Arc::new(StructuredLoggerFactory::new(backend.clone()));
        set_global_factory(factory);

        let handles: Vec<_> = (0..4)
            .map(|i| thread::spawn(move || logger_named("threads").info("{0}", &[i.into()])))
            .collect();
        for handle in handles {
            handle.join().expect("Thread should complete successfully");
        }

        assert_eq!(backend.drain_records().len(), 4);
        assert_eq!(backend.derivations(), 1);

        set_global_factory(original);
    }
}
