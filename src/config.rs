// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the `tracing` backend.
//!
//! [`TracingConfig`] describes how the [`TracingLogger`] built from it should filter and
//! format records.  It can be assembled in code or loaded from TOML:
//!
//! ```rust
//! use contextlog::{Level, LogFormat, TracingConfig};
//!
//! let config = TracingConfig::from_toml_str(
//!     r#"
//!     level = "warn"
//!     format = "compact"
//!     ansi = false
//!     "#,
//! ).unwrap();
//! assert_eq!(config.level, Level::Warning);
//! assert_eq!(config.format, LogFormat::Compact);
//!
//! let logger = config.create_logger().unwrap();
//! assert!(logger.dispatch().is_some());
//! ```
//!
//! Building a logger validates the filter, so a misconfiguration fails at startup rather
//! than on some later log call.

use crate::Level;
use crate::error::ConfigError;
use crate::tracing_logger::TracingLogger;
use serde::Deserialize;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Output format of the `tracing-subscriber` formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single line, all fields.
    #[default]
    Full,
    Compact,
    /// Multi-line, for humans.
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

/// Where records are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogWriter {
    #[default]
    Stderr,
    Stdout,
}

/// Configuration object that builds a [`TracingLogger`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TracingConfig {
    /// Minimum level, used when `filter` is not set.
    pub level: Level,
    /// A `tracing-subscriber` filter directive such as `info,my_crate=debug`.
    pub filter: Option<String>,
    /// Prefer `RUST_LOG` over `level`/`filter` when it is set and non-empty.
    pub use_env: bool,
    pub format: LogFormat,
    pub ansi: bool,
    /// Include the event target in formatted output.
    pub target: bool,
    pub writer: LogWriter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::Information,
            filter: None,
            use_env: false,
            format: LogFormat::Full,
            ansi: true,
            target: true,
            writer: LogWriter::Stderr,
        }
    }
}

impl TracingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from TOML.  Missing keys take their default.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_filter(mut self, directive: impl Into<String>) -> Self {
        self.filter = Some(directive.into());
        self
    }

    pub fn with_env(mut self, use_env: bool) -> Self {
        self.use_env = use_env;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn with_target(mut self, target: bool) -> Self {
        self.target = target;
        self
    }

    pub fn with_writer(mut self, writer: LogWriter) -> Self {
        self.writer = writer;
        self
    }

    /// The filter directive this configuration resolves to, ignoring `RUST_LOG`.
    pub fn directive(&self) -> String {
        self.filter
            .clone()
            .unwrap_or_else(|| self.level.as_directive().to_string())
    }

    /// Builds the filter, failing on an invalid directive.
    ///
    /// An empty `RUST_LOG` counts as unset.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        if self.use_env
            && std::env::var_os(EnvFilter::DEFAULT_ENV).is_some_and(|v| !v.is_empty())
        {
            return EnvFilter::try_from_default_env().map_err(ConfigError::Environment);
        }
        let directive = self.directive();
        EnvFilter::try_new(&directive)
            .map_err(|source| ConfigError::InvalidFilter { directive, source })
    }

    /// Builds a logger writing to the configured stream.
    pub fn create_logger(&self) -> Result<TracingLogger, ConfigError> {
        match self.writer {
            LogWriter::Stderr => self.create_logger_with_writer(std::io::stderr),
            LogWriter::Stdout => self.create_logger_with_writer(std::io::stdout),
        }
    }

    /// Builds a logger writing to `writer` instead of the configured stream.
    pub fn create_logger_with_writer<W>(&self, writer: W) -> Result<TracingLogger, ConfigError>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter()?)
            .with_ansi(self.ansi)
            .with_target(self.target)
            .with_writer(writer);
        let dispatch = match self.format {
            LogFormat::Full => Dispatch::new(builder.finish()),
            LogFormat::Compact => Dispatch::new(builder.compact().finish()),
            LogFormat::Pretty => Dispatch::new(builder.pretty().finish()),
            LogFormat::Json => Dispatch::new(builder.json().finish()),
        };
        tracing::debug!(directive = %self.directive(), format = ?self.format, "built tracing backend");
        Ok(TracingLogger::with_dispatch(dispatch))
    }
}

#[cfg(test)]
mod tests {
    use super::{LogFormat, LogWriter, TracingConfig};
    use crate::Level;
    use crate::error::ConfigError;

    #[test]
    fn defaults() {
        let config = TracingConfig::default();
        assert_eq!(config.level, Level::Information);
        assert_eq!(config.directive(), "info");
        assert_eq!(config.format, LogFormat::Full);
        assert_eq!(config.writer, LogWriter::Stderr);
        assert_eq!(TracingConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn parses_toml() {
        let config = TracingConfig::from_toml_str(
            r#"
            level = "debug"
            filter = "info,contextlog=debug"
            format = "json"
            ansi = false
            target = false
            writer = "stdout"
            "#,
        )
        .unwrap();
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.directive(), "info,contextlog=debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.ansi);
        assert!(!config.target);
        assert_eq!(config.writer, LogWriter::Stdout);
    }

    #[test]
    fn level_aliases() {
        let info = TracingConfig::from_toml_str(r#"level = "info""#).unwrap();
        let information = TracingConfig::from_toml_str(r#"level = "information""#).unwrap();
        let warn = TracingConfig::from_toml_str(r#"level = "warn""#).unwrap();
        assert_eq!(info.level, Level::Information);
        assert_eq!(information.level, Level::Information);
        assert_eq!(warn.level, Level::Warning);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = TracingConfig::from_toml_str(r#"colour = true"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_invalid_filter() {
        let config = TracingConfig::new().with_filter("contextlog=notalevel");
        match config.create_logger() {
            Err(ConfigError::InvalidFilter { directive, .. }) => {
                assert_eq!(directive, "contextlog=notalevel")
            }
            other => panic!("expected an invalid filter error, got {other:?}"),
        }
    }

    #[test]
    fn builds_every_format() {
        for format in [
            LogFormat::Full,
            LogFormat::Compact,
            LogFormat::Pretty,
            LogFormat::Json,
        ] {
            let logger = TracingConfig::new()
                .with_format(format)
                .with_ansi(false)
                .create_logger_with_writer(std::io::sink)
                .unwrap();
            assert!(logger.dispatch().is_some());
        }
    }
}
