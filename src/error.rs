// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;
use tracing_subscriber::filter::{FromEnvError, ParseError};

/// Errors building a backend from configuration.
///
/// These surface when the adapter is constructed, never from a log call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log filter directive `{directive}`")]
    InvalidFilter {
        directive: String,
        #[source]
        source: ParseError,
    },
    #[error("invalid log filter in the RUST_LOG environment variable")]
    Environment(#[source] FromEnvError),
    #[error("invalid logging configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
