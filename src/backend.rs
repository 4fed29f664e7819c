// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::arg::SharedError;
use crate::context::Context;
use crate::log_call::LogCall;
use std::fmt::Debug;
use std::sync::Arc;

/**
A structured logging backend.

The adapter only ever does three things with a backend: derive a logger scoped to a context,
and emit a call with or without a dedicated error.  Rendering, filtering and sinks are
entirely the backend's business.
*/
pub trait StructuredLogger: Debug + Send + Sync {
    /**
    Derives a logger that annotates every record with `context`.

    Called at most once per context by [crate::ContextLoggerCache], so it may be somewhat
    expensive.
    It runs under the cache's write lock and must not look up bindings in that cache.
    */
    fn for_context(&self, context: &Context) -> Arc<dyn StructuredLogger>;

    /// The context this logger annotates records with, if it was derived for one.
    fn context(&self) -> Option<&Context>;

    /// Emits a call with no error attached.
    fn emit(&self, call: LogCall<'_>);

    /**
    Emits a call with `error` as first-class diagnostic data.

    `call.args()` is passed through untouched and may still contain `error` itself.
    */
    fn emit_error(&self, error: &SharedError, call: LogCall<'_>);
}

/*
Boilerplate notes.

# StructuredLogger

Clone on a trait object is out; loggers are shared through Arc instead.
Send/Sync are required since bindings are cached and handed to any thread.
Equality between loggers is unclear (configuration or provenance?), so there is none; compare
context() instead.
*/
