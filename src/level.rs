// SPDX-License-Identifier: MIT OR Apache-2.0
use serde::Deserialize;
use std::fmt::Display;

/// The fixed set of levels a [crate::Log] call can be made at.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Detailed diagnostics for developers
    Debug,
    /// Normal operation
    #[default]
    #[serde(alias = "info")]
    Information,
    /// Suspicious condition
    #[serde(alias = "warn")]
    Warning,
    /// Runtime error
    Error,
}

impl Level {
    /// The directive `tracing-subscriber` uses for this level.
    pub const fn as_directive(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Information => "info",
            Level::Warning => "warn",
            Level::Error => "error",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_directive())
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => tracing::Level::DEBUG,
            Level::Information => tracing::Level::INFO,
            Level::Warning => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Level;

    #[test]
    fn maps_onto_tracing_levels() {
        assert_eq!(tracing::Level::from(Level::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(Level::Information), tracing::Level::INFO);
        assert_eq!(tracing::Level::from(Level::Warning), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(Level::Error), tracing::Level::ERROR);
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(Level::Debug < Level::Information);
        assert!(Level::Information < Level::Warning);
        assert!(Level::Warning < Level::Error);
    }
}
