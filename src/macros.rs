// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variadic front-ends for [`crate::Log`].
//!
//! Each macro takes a logger, a message template and any number of arguments, converts the
//! arguments with [`crate::LogArg::from`] and makes the corresponding call.  The logger can be
//! anything that derefs to a `Log`: an `Arc<dyn Log>`, a `ContextLog`, a reference.
//!
//! ```rust
//! use contextlog::{Context, InMemoryLogger, LogArg, LoggerFactory, StructuredLoggerFactory};
//! use std::sync::Arc;
//!
//! let backend = Arc::new(InMemoryLogger::new());
//! let factory = StructuredLoggerFactory::new(backend.clone());
//! let log = factory.get_logger_for(&Context::named("ingest"));
//!
//! contextlog::info!(log, "read {0} rows from {1}", 128, "events.csv");
//! contextlog::error!(log, "row {0} rejected", 7, LogArg::error(std::fmt::Error));
//!
//! let records = backend.drain_records();
//! assert_eq!(records[0].rendered(), "read 128 rows from events.csv");
//! assert!(records[1].error().is_some());
//! ```

/// Logs at debug level.
#[macro_export]
macro_rules! debug {
    ($log:expr, $message:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Log as _;
        $log.debug($message, &[$($crate::LogArg::from($arg)),*])
    }};
}

/// Logs at information level.
#[macro_export]
macro_rules! info {
    ($log:expr, $message:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Log as _;
        $log.info($message, &[$($crate::LogArg::from($arg)),*])
    }};
}

/// Logs at warning level.
#[macro_export]
macro_rules! warn {
    ($log:expr, $message:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Log as _;
        $log.warn($message, &[$($crate::LogArg::from($arg)),*])
    }};
}

/**
Logs at error level.

With `exception = e` first, `e` (a [`crate::SharedError`]) is passed explicitly and the
arguments are not scanned for errors.

```rust
# use contextlog::{Context, InMemoryLogger, LoggerFactory, SharedError, StructuredLoggerFactory};
# use std::sync::Arc;
# let backend = Arc::new(InMemoryLogger::new());
# let log = StructuredLoggerFactory::new(backend.clone()).get_logger_for(&Context::named("x"));
let e: SharedError = Arc::new(std::io::Error::other("timed out"));
contextlog::error!(log, exception = e, "giving up after {0} attempts", 3);
# assert_eq!(backend.drain_records()[0].error().unwrap().to_string(), "timed out");
```
*/
#[macro_export]
macro_rules! error {
    ($log:expr, exception = $exception:expr, $message:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Log as _;
        $log.error_with(&$exception, $message, &[$($crate::LogArg::from($arg)),*])
    }};
    ($log:expr, $message:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Log as _;
        $log.error($message, &[$($crate::LogArg::from($arg)),*])
    }};
}

#[cfg(test)]
mod tests {
    use crate::arg::{LogArg, SharedError};
    use crate::dispatch::ContextLog;
    use crate::inmemory_logger::InMemoryLogger;
    use crate::{Context, Level, StructuredLogger};
    use std::sync::Arc;

    #[test]
    fn macros_convert_arguments() {
        let backend = InMemoryLogger::new();
        let log = ContextLog::new(backend.for_context(&Context::named("m")));
        crate::debug!(log, "no args");
        crate::info!(log, "{0} {1} {2}", 1, "two", 3.5,);
        crate::warn!(&log, "{0}", true);

        let records = backend.drain_records();
        assert_eq!(records[0].level(), Level::Debug);
        assert!(records[0].args().is_empty());
        assert_eq!(
            records[1].args(),
            &[LogArg::from(1), LogArg::from("two"), LogArg::from(3.5)]
        );
        assert_eq!(records[2].level(), Level::Warning);
        assert_eq!(records[2].rendered(), "true");
    }

    #[test]
    fn error_macro_forms() {
        let backend = InMemoryLogger::new();
        let log = ContextLog::new(backend.for_context(&Context::named("m")));
        let explicit: SharedError = Arc::new(std::io::Error::other("explicit"));
        crate::error!(log, exception = explicit.clone(), "failed {0}", "x");
        crate::error!(log, "plain");

        let records = backend.drain_records();
        assert!(Arc::ptr_eq(records[0].error().unwrap(), &explicit));
        assert_eq!(records[0].args(), &[LogArg::from("x")]);
        assert!(records[1].error().is_none());
    }
}
