// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leveled call dispatch.
//!
//! [`ContextLog`] turns [`Log`] calls into backend calls.  The interesting part is deciding
//! which backend call to make:
//!
//! 1. Scan the arguments for error values ([`extract_error`]).
//! 2. No error: [`StructuredLogger::emit`] with the message and arguments.
//! 3. One error: [`StructuredLogger::emit_error`] with that error.
//! 4. Several errors: [`StructuredLogger::emit_error`] with an [`AggregateError`] holding all
//!    of them, in argument order.
//!
//! In every case the backend receives the caller's arguments untouched, errors included, so
//! template holes still line up with the positions the caller wrote them for.
//!
//! # Levels
//!
//! | Operation   | Level                  |
//! |-------------|------------------------|
//! | `debug`     | [`Level::Debug`]       |
//! | `info`      | [`Level::Information`] |
//! | `warn`      | [`Level::Warning`]     |
//! | `error`     | [`Level::Error`]       |
//!
//! Filtering is the backend's job; every call is forwarded.

use crate::Level;
use crate::aggregate::AggregateError;
use crate::arg::{LogArg, SharedError};
use crate::backend::StructuredLogger;
use crate::context::Context;
use crate::facade::Log;
use crate::log_call::LogCall;
use std::sync::Arc;

/// Finds the error carried by `args`, if any.
///
/// Returns `None` when no argument is an error, the error itself when exactly one is, and an
/// [`AggregateError`] over all of them, in order, when several are.
///
/// ```rust
/// use contextlog::{LogArg, extract_error};
///
/// assert!(extract_error(&[]).is_none());
/// assert!(extract_error(&[LogArg::from(1), LogArg::from("two")]).is_none());
///
/// let one = extract_error(&[LogArg::from(1), LogArg::error(std::fmt::Error)]).unwrap();
/// assert_eq!(one.to_string(), "an error occurred when formatting an argument");
/// ```
pub fn extract_error(args: &[LogArg]) -> Option<SharedError> {
    let mut found = args.iter().filter_map(LogArg::as_error);
    let first = found.next()?;
    let Some(second) = found.next() else {
        return Some(first.clone());
    };
    let aggregate: SharedError = Arc::new(AggregateError::new(
        [first, second].into_iter().chain(found).cloned(),
    ));
    Some(aggregate)
}

/**
A [`Log`] bound to one backend logger.

Cheap to clone; clones share the binding.
*/
#[derive(Debug, Clone)]
pub struct ContextLog {
    logger: Arc<dyn StructuredLogger>,
}

impl ContextLog {
    pub fn new(logger: Arc<dyn StructuredLogger>) -> Self {
        Self { logger }
    }

    /// The context of the underlying binding.
    pub fn context(&self) -> Option<&Context> {
        self.logger.context()
    }

    /// The backend logger calls are forwarded to.
    pub fn backend(&self) -> &Arc<dyn StructuredLogger> {
        &self.logger
    }

    fn dispatch(&self, level: Level, message: &str, args: &[LogArg]) {
        let call = LogCall::new(level, message, args);
        match extract_error(args) {
            Some(error) => self.logger.emit_error(&error, call),
            None => self.logger.emit(call),
        }
    }
}

impl Log for ContextLog {
    fn debug(&self, message: &str, args: &[LogArg]) {
        self.dispatch(Level::Debug, message, args);
    }

    fn info(&self, message: &str, args: &[LogArg]) {
        self.dispatch(Level::Information, message, args);
    }

    fn warn(&self, message: &str, args: &[LogArg]) {
        self.dispatch(Level::Warning, message, args);
    }

    fn error(&self, message: &str, args: &[LogArg]) {
        self.dispatch(Level::Error, message, args);
    }

    fn error_with(&self, exception: &SharedError, message: &str, args: &[LogArg]) {
        self.logger
            .emit_error(exception, LogCall::new(Level::Error, message, args));
    }
}
