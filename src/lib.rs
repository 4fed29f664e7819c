//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# contextlog

contextlog is a small, context-keyed logging facade with a [tracing](https://crates.io/crates/tracing) backend.

# Development status

contextlog is experimental and the API may change.

# The problem

Frameworks often want to log without committing their users to a logging library.  The usual
answer is a tiny facade: ask a factory for a logger for *this* component, then call `debug`,
`info`, `warn` or `error` with a message template and some arguments.

That facade has to be implemented in terms of a real backend somehow, and two details make
that more than a one-liner:

* Every component asks for its logger, often on hot paths.  Deriving a backend logger that
  carries the component as structured metadata should happen once per component, not once
  per call.
* Callers routinely pass the error they are reporting as just another argument.  A structured
  backend wants errors as first-class data, not as text spliced into a message.

# The facade

| Operation                              | Level         | Error channel                             |
|----------------------------------------|---------------|-------------------------------------------|
| `debug(message, args)`                 | `Debug`       | errors found in `args`                    |
| `info(message, args)`                  | `Information` | errors found in `args`                    |
| `warn(message, args)`                  | `Warning`     | errors found in `args`                    |
| `error(message, args)`                 | `Error`       | errors found in `args`                    |
| `error_with(exception, message, args)` | `Error`       | `exception`; `args` is not inspected      |

One error in `args` is forwarded as is.  Several are forwarded together as an
[`AggregateError`].  Either way the backend receives `args` untouched, so templates still line
up with the arguments the caller passed.

# The API

```rust
use contextlog::{LogArg, LoggerFactory, StructuredLoggerFactory, TracingConfig};

struct Mailer;

let factory = StructuredLoggerFactory::from_config(&TracingConfig::new()).unwrap();
let log = factory.get_logger::<Mailer>();

log.info("sent {0} messages", &[LogArg::from(12)]);
let err = std::io::Error::other("connection reset");
contextlog::warn!(log, "retrying {0}", "smtp.example.com", LogArg::error(err));
```

# Backends

* [`TracingLogger`] emits one `tracing` event per call.  Build one from a [`TracingConfig`]
  or point it at the current default subscriber.
* [`InMemoryLogger`] records every call, which is what you want in tests.

Anything else can plug in by implementing [`StructuredLogger`].

# Multithreading

Factories, loggers and backends are `Send + Sync`.  Concurrent first requests for one context
derive a single binding; see [`ContextLoggerCache`].
*/

mod aggregate;
mod arg;
mod backend;
mod cache;
mod config;
mod context;
mod dispatch;
mod error;
mod facade;
mod factory;
pub mod global_logger;
mod inmemory_logger;
mod level;
mod log_call;
mod macros;
pub mod template;
mod tracing_logger;

pub use aggregate::AggregateError;
pub use arg::{LogArg, SharedError};
pub use backend::StructuredLogger;
pub use cache::ContextLoggerCache;
pub use config::{LogFormat, LogWriter, TracingConfig};
pub use context::Context;
pub use dispatch::{ContextLog, extract_error};
pub use error::ConfigError;
pub use facade::{Log, LoggerFactory};
pub use factory::StructuredLoggerFactory;
pub use global_logger::{global_factory, logger_for, logger_named, set_global_factory};
pub use inmemory_logger::{CapturedRecord, InMemoryLogger};
pub use level::Level;
pub use log_call::LogCall;
pub use tracing_logger::TracingLogger;
