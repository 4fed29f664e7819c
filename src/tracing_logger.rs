// SPDX-License-Identifier: MIT OR Apache-2.0

//! A [`StructuredLogger`] that emits `tracing` events.
//!
//! Every call becomes one event with target `contextlog` at the mapped level, carrying:
//!
//! - `context`: the logger's context, when it was derived for one
//! - `error`: the error of an error-aware call, recorded as a `dyn Error` so subscribers can
//!   walk its sources
//! - `args`: the raw argument list
//! - the message, rendered with [`crate::template::render`]
//!
//! A `TracingLogger` either targets the process's current default subscriber
//! ([`TracingLogger::global`]) or carries its own [`Dispatch`], which is what
//! [`crate::TracingConfig`] builds.

use crate::Level;
use crate::arg::SharedError;
use crate::backend::StructuredLogger;
use crate::context::Context;
use crate::log_call::LogCall;
use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{Dispatch, Subscriber};

macro_rules! event_at {
    ($level:expr, $($fields:tt)+) => {
        match $level {
            Level::Debug => tracing::event!(target: "contextlog", tracing::Level::DEBUG, $($fields)+),
            Level::Information => tracing::event!(target: "contextlog", tracing::Level::INFO, $($fields)+),
            Level::Warning => tracing::event!(target: "contextlog", tracing::Level::WARN, $($fields)+),
            Level::Error => tracing::event!(target: "contextlog", tracing::Level::ERROR, $($fields)+),
        }
    };
}

/// Renders the template only if a subscriber actually formats the event.
struct Rendered<'a>(LogCall<'a>);

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.render())
    }
}

/**
A `tracing`-backed structured logger.
*/
#[derive(Debug, Clone)]
pub struct TracingLogger {
    dispatch: Option<Dispatch>,
    context: Option<Context>,
}

impl TracingLogger {
    /// A logger that emits to whatever subscriber is the default where the call happens.
    pub const fn global() -> Self {
        Self {
            dispatch: None,
            context: None,
        }
    }

    /// A logger that always emits to `dispatch`.
    pub fn with_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
            context: None,
        }
    }

    /// A logger that always emits to `subscriber`.
    pub fn from_subscriber<S>(subscriber: S) -> Self
    where
        S: Subscriber + Send + Sync + 'static,
    {
        Self::with_dispatch(Dispatch::new(subscriber))
    }

    /// The dispatch this logger is pinned to, if any.
    pub fn dispatch(&self) -> Option<&Dispatch> {
        self.dispatch.as_ref()
    }

    fn in_scope(&self, f: impl FnOnce()) {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::global()
    }
}

impl StructuredLogger for TracingLogger {
    fn for_context(&self, context: &Context) -> Arc<dyn StructuredLogger> {
        Arc::new(TracingLogger {
            dispatch: self.dispatch.clone(),
            context: Some(context.clone()),
        })
    }

    fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    fn emit(&self, call: LogCall<'_>) {
        let context = self.context.as_ref().map(tracing::field::display);
        self.in_scope(|| {
            event_at!(
                call.level(),
                context = context,
                args = ?call.args(),
                "{}",
                Rendered(call)
            )
        });
    }

    fn emit_error(&self, error: &SharedError, call: LogCall<'_>) {
        let context = self.context.as_ref().map(tracing::field::display);
        let error: &(dyn Error + 'static) = &**error;
        self.in_scope(|| {
            event_at!(
                call.level(),
                context = context,
                error = error,
                args = ?call.args(),
                "{}",
                Rendered(call)
            )
        });
    }
}

#[cfg(test)]
mod tests {
    use super::TracingLogger;
    use crate::backend::StructuredLogger;
    use crate::context::Context;

    #[test]
    fn derived_logger_keeps_dispatch() {
        let base = TracingLogger::from_subscriber(
            tracing_subscriber::fmt().with_writer(std::io::sink).finish(),
        );
        assert!(base.dispatch().is_some());
        let derived = base.for_context(&Context::named("a"));
        assert_eq!(derived.context(), Some(&Context::named("a")));
        assert!(TracingLogger::global().context().is_none());
    }
}
