// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional arguments of a log call.
//!
//! Message templates decide their own arity, so arguments travel as an ordered slice of
//! [`LogArg`], a small tagged union over the values people actually log.  Errors get their
//! own variant; that variant is the capability the dispatcher looks for when it decides
//! whether a call carries an error.
//!
//! ```rust
//! use contextlog::LogArg;
//!
//! let args = [LogArg::from(42), LogArg::from("queue-a"), LogArg::error(std::fmt::Error)];
//! assert!(!args[0].is_error());
//! assert!(args[2].is_error());
//! assert_eq!(args[1].to_string(), "queue-a");
//! ```

use std::error::Error;
use std::fmt::{Debug, Display};
use std::sync::Arc;

/// A reference-counted error, shareable across threads and cheap to clone.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// One positional argument of a log call.
#[derive(Clone)]
#[non_exhaustive]
pub enum LogArg {
    /// An absent value.
    Null,
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// Any other value, logged through its `Display` implementation.
    Display(Arc<dyn Display + Send + Sync + 'static>),
    /// An error value.
    Error(SharedError),
}

impl LogArg {
    /// Wraps an error value.
    ///
    /// Any type implementing [`std::error::Error`] qualifies, which is what lets the
    /// dispatcher treat every error type alike.
    pub fn error<E: Error + Send + Sync + 'static>(error: E) -> Self {
        LogArg::Error(Arc::new(error))
    }

    /// Wraps an arbitrary displayable value.
    pub fn display<T: Display + Send + Sync + 'static>(value: T) -> Self {
        LogArg::Display(Arc::new(value))
    }

    /// The error carried by this argument, if it is one.
    #[inline]
    pub fn as_error(&self) -> Option<&SharedError> {
        match self {
            LogArg::Error(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.as_error().is_some()
    }
}

impl Display for LogArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogArg::Null => f.write_str("null"),
            LogArg::Str(s) => f.write_str(s),
            LogArg::Int(i) => write!(f, "{}", i),
            LogArg::UInt(u) => write!(f, "{}", u),
            LogArg::Float(x) => write!(f, "{}", x),
            LogArg::Bool(b) => write!(f, "{}", b),
            LogArg::Char(c) => write!(f, "{}", c),
            LogArg::Display(d) => write!(f, "{}", d),
            LogArg::Error(e) => write!(f, "{}", e),
        }
    }
}

impl Debug for LogArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogArg::Str(s) => write!(f, "{:?}", s),
            LogArg::Char(c) => write!(f, "{:?}", c),
            LogArg::Error(e) => write!(f, "Error({})", e),
            other => Display::fmt(other, f),
        }
    }
}

/// Scalars compare by value.  `Display` and `Error` arguments compare by identity, since
/// the wrapped values carry no equality of their own.
impl PartialEq for LogArg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LogArg::Null, LogArg::Null) => true,
            (LogArg::Str(a), LogArg::Str(b)) => a == b,
            (LogArg::Int(a), LogArg::Int(b)) => a == b,
            (LogArg::UInt(a), LogArg::UInt(b)) => a == b,
            (LogArg::Float(a), LogArg::Float(b)) => a == b,
            (LogArg::Bool(a), LogArg::Bool(b)) => a == b,
            (LogArg::Char(a), LogArg::Char(b)) => a == b,
            (LogArg::Display(a), LogArg::Display(b)) => Arc::ptr_eq(a, b),
            (LogArg::Error(a), LogArg::Error(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for LogArg {
            #[inline]
            fn from(value: $t) -> Self {
                LogArg::Int(value as i64)
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for LogArg {
            #[inline]
            fn from(value: $t) -> Self {
                LogArg::UInt(value as u64)
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for LogArg {
    fn from(value: f32) -> Self {
        LogArg::Float(value as f64)
    }
}

impl From<f64> for LogArg {
    fn from(value: f64) -> Self {
        LogArg::Float(value)
    }
}

impl From<bool> for LogArg {
    fn from(value: bool) -> Self {
        LogArg::Bool(value)
    }
}

impl From<char> for LogArg {
    fn from(value: char) -> Self {
        LogArg::Char(value)
    }
}

impl From<&str> for LogArg {
    fn from(value: &str) -> Self {
        LogArg::Str(value.to_string())
    }
}

impl From<String> for LogArg {
    fn from(value: String) -> Self {
        LogArg::Str(value)
    }
}

impl From<&String> for LogArg {
    fn from(value: &String) -> Self {
        LogArg::Str(value.clone())
    }
}

impl From<SharedError> for LogArg {
    fn from(value: SharedError) -> Self {
        LogArg::Error(value)
    }
}

impl From<&SharedError> for LogArg {
    fn from(value: &SharedError) -> Self {
        LogArg::Error(value.clone())
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for LogArg {
    fn from(value: Box<dyn Error + Send + Sync + 'static>) -> Self {
        LogArg::Error(Arc::from(value))
    }
}

impl<T: Into<LogArg>> From<Option<T>> for LogArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(LogArg::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::{LogArg, SharedError};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Boom;
    impl std::fmt::Display for Boom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("boom")
        }
    }
    impl std::error::Error for Boom {}

    #[test]
    fn only_error_variant_is_an_error() {
        assert!(LogArg::error(Boom).is_error());
        assert!(!LogArg::from("boom").is_error());
        assert!(!LogArg::display(42u128).is_error());
        assert!(!LogArg::Null.is_error());
    }

    #[test]
    fn any_error_type_qualifies() {
        let io = std::io::Error::other("disk");
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(Boom);
        assert!(LogArg::error(io).is_error());
        assert!(LogArg::from(boxed).is_error());
        assert!(LogArg::error(std::fmt::Error).is_error());
    }

    #[test]
    fn errors_compare_by_identity() {
        let shared: SharedError = Arc::new(Boom);
        assert_eq!(LogArg::from(&shared), LogArg::from(shared.clone()));
        assert_ne!(LogArg::error(Boom), LogArg::error(Boom));
    }

    #[test]
    fn conversions() {
        assert_eq!(LogArg::from(-3i32), LogArg::Int(-3));
        assert_eq!(LogArg::from(7usize), LogArg::UInt(7));
        assert_eq!(LogArg::from(Some("x")), LogArg::Str("x".to_string()));
        assert_eq!(LogArg::from(None::<i32>), LogArg::Null);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(LogArg::from("ctx").to_string(), "ctx");
        assert_eq!(format!("{:?}", LogArg::from("ctx")), "\"ctx\"");
        assert_eq!(LogArg::error(Boom).to_string(), "boom");
        assert_eq!(format!("{:?}", LogArg::error(Boom)), "Error(boom)");
        assert_eq!(format!("{:?}", LogArg::from(1.5)), "1.5");
    }
}
