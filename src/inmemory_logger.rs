// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Logger
//!
//! This module provides a [`StructuredLogger`] that captures calls in memory instead of
//! emitting them anywhere.  It is the backend to reach for when you need to see exactly
//! what the adapter handed to its backend:
//!
//! - Unit testing code that logs through a [`crate::LoggerFactory`]
//! - Checking which calls carried an error, and which error
//! - Counting how often loggers were derived for a context
//!
//! ## Architecture
//!
//! A base `InMemoryLogger` owns a sink behind an `Arc`.  Every logger derived from it through
//! [`StructuredLogger::for_context`] shares that sink, so one handle on the base logger sees
//! the records of every context.

use crate::Level;
use crate::arg::{LogArg, SharedError};
use crate::backend::StructuredLogger;
use crate::context::Context;
use crate::log_call::LogCall;
use std::fmt::Display;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// One call, as captured by [`InMemoryLogger`].
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    context: Option<Context>,
    level: Level,
    error: Option<SharedError>,
    message: String,
    args: Vec<LogArg>,
}

impl CapturedRecord {
    fn new(context: Option<Context>, error: Option<SharedError>, call: LogCall<'_>) -> Self {
        Self {
            context,
            level: call.level(),
            error,
            message: call.message().to_string(),
            args: call.args().to_vec(),
        }
    }

    /// The context of the logger that received the call.
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The error passed through the error-aware path, or `None` for a plain call.
    pub fn error(&self) -> Option<&SharedError> {
        self.error.as_ref()
    }

    /// The message template, unrendered.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn args(&self) -> &[LogArg] {
        &self.args
    }

    /// The message rendered against its arguments.
    pub fn rendered(&self) -> String {
        crate::template::render(&self.message, &self.args)
    }
}

impl Display for CapturedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.level.as_directive().to_uppercase())?;
        if let Some(context) = &self.context {
            write!(f, " {}", context)?;
        }
        write!(f, ": {}", self.rendered())?;
        if let Some(error) = &self.error {
            write!(f, " error={}", error)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Sink {
    records: Mutex<Vec<CapturedRecord>>,
    derivations: AtomicUsize,
}

/// A structured logger that stores every call in memory.
///
/// # Thread Safety
///
/// The `InMemoryLogger` is thread-safe.  All loggers derived from one base logger share a
/// mutex-protected buffer.
///
/// # Example
///
/// ```rust
/// use contextlog::{Context, InMemoryLogger, LogArg, LoggerFactory, StructuredLoggerFactory};
/// use std::sync::Arc;
///
/// let backend = Arc::new(InMemoryLogger::new());
/// let factory = StructuredLoggerFactory::new(backend.clone());
///
/// let log = factory.get_logger_for(&Context::named("orders"));
/// log.warn("retrying {0}", &[LogArg::from(3)]);
///
/// let records = backend.drain_records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].rendered(), "retrying 3");
/// assert_eq!(records[0].context(), Some(&Context::named("orders")));
/// ```
#[derive(Debug)]
pub struct InMemoryLogger {
    context: Option<Context>,
    sink: Arc<Sink>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived, required by StructuredLogger
// - Default: Implemented with obvious zero-value (empty buffer, no context)
// - Clone: NOT implemented - a clone sharing the sink would be indistinguishable from
//   a derived logger, and one not sharing it would silently split the records
// - PartialEq/Eq/Hash: NOT implemented - equality semantics unclear for loggers

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogger {
    /// Creates a base logger with an empty buffer.
    pub fn new() -> Self {
        Self {
            context: None,
            sink: Arc::new(Sink::default()),
        }
    }

    /// Removes and returns every captured record, oldest first.
    pub fn drain_records(&self) -> Vec<CapturedRecord> {
        let mut records = self.lock();
        std::mem::take(&mut *records)
    }

    /// Returns a copy of every captured record, leaving the buffer intact.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Drains all records into a single string, one line per record.
    pub fn drain_logs(&self) -> String {
        self.drain_records()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes all records to stderr, clearing the buffer.
    pub fn drain_to_console(&self) {
        for record in self.drain_records() {
            eprintln!("{}", record);
        }
    }

    /// How many times a logger has been derived from this logger's sink.
    pub fn derivations(&self) -> usize {
        self.sink.derivations.load(Ordering::Acquire)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CapturedRecord>> {
        self.sink
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl StructuredLogger for InMemoryLogger {
    fn for_context(&self, context: &Context) -> Arc<dyn StructuredLogger> {
        self.sink.derivations.fetch_add(1, Ordering::AcqRel);
        Arc::new(InMemoryLogger {
            context: Some(context.clone()),
            sink: self.sink.clone(),
        })
    }

    fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    fn emit(&self, call: LogCall<'_>) {
        let record = CapturedRecord::new(self.context.clone(), None, call);
        self.lock().push(record);
    }

    fn emit_error(&self, error: &SharedError, call: LogCall<'_>) {
        let record = CapturedRecord::new(self.context.clone(), Some(error.clone()), call);
        self.lock().push(record);
    }
}
