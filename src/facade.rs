// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::arg::{LogArg, SharedError};
use crate::context::Context;
use std::fmt::Debug;
use std::sync::Arc;

/**
A leveled logger bound to one context.

This is the interface application code logs through.  Each call takes a message template and
its positional arguments; see [crate::template] for how the bundled backends resolve holes.
*/
pub trait Log: Debug + Send + Sync {
    fn debug(&self, message: &str, args: &[LogArg]);

    fn info(&self, message: &str, args: &[LogArg]);

    fn warn(&self, message: &str, args: &[LogArg]);

    /**
    Logs at error level.

    If `args` contains errors they are reported through the backend's error channel.
    */
    fn error(&self, message: &str, args: &[LogArg]);

    /// Logs at error level with an explicit error.  `args` is not inspected.
    fn error_with(&self, exception: &SharedError, message: &str, args: &[LogArg]);
}

/**
Hands out loggers by context.
*/
pub trait LoggerFactory: Debug + Send + Sync {
    fn get_logger_for(&self, context: &Context) -> Arc<dyn Log>;

    /// The logger for type `T`.
    fn get_logger<T: ?Sized + 'static>(&self) -> Arc<dyn Log>
    where
        Self: Sized,
    {
        self.get_logger_for(&Context::of::<T>())
    }
}
