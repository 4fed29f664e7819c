// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::backend::StructuredLogger;
use crate::cache::ContextLoggerCache;
use crate::config::TracingConfig;
use crate::context::Context;
use crate::dispatch::ContextLog;
use crate::error::ConfigError;
use crate::facade::{Log, LoggerFactory};
use crate::tracing_logger::TracingLogger;
use std::sync::Arc;

/**
A [`LoggerFactory`] over a structured backend.

All loggers are derived from one base logger, once per context, through a
[`ContextLoggerCache`].

```rust
use contextlog::{LoggerFactory, StructuredLoggerFactory, TracingConfig};

struct Scheduler;

let factory = StructuredLoggerFactory::from_config(&TracingConfig::new()).unwrap();
let log = factory.get_logger::<Scheduler>();
log.info("started", &[]);
assert_eq!(factory.cache().len(), 1);
```
*/
#[derive(Debug)]
pub struct StructuredLoggerFactory {
    cache: ContextLoggerCache,
}

impl StructuredLoggerFactory {
    /// A factory deriving loggers from `base`.
    pub fn new(base: Arc<dyn StructuredLogger>) -> Self {
        Self {
            cache: ContextLoggerCache::new(base),
        }
    }

    /// A factory over the logger `config` builds.
    ///
    /// Fails if the configuration is invalid.
    pub fn from_config(config: &TracingConfig) -> Result<Self, ConfigError> {
        let base = config.create_logger()?;
        Ok(Self::new(Arc::new(base)))
    }

    pub fn cache(&self) -> &ContextLoggerCache {
        &self.cache
    }
}

/// A factory over the current default `tracing` subscriber.
impl Default for StructuredLoggerFactory {
    fn default() -> Self {
        Self::new(Arc::new(TracingLogger::global()))
    }
}

impl LoggerFactory for StructuredLoggerFactory {
    fn get_logger_for(&self, context: &Context) -> Arc<dyn Log> {
        Arc::new(ContextLog::new(self.cache.get_logger(context)))
    }
}
