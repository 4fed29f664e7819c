// SPDX-License-Identifier: MIT OR Apache-2.0

//! The log call handed to a backend.
//!
//! A [`LogCall`] borrows everything it carries.  It exists only for the duration of one
//! dispatch: the dispatcher builds it, the backend renders or records it, and it is gone.
//! Backends that need to keep a call (such as [`crate::InMemoryLogger`]) copy out what they
//! need.

use crate::Level;
use crate::arg::LogArg;

/**
One leveled logging invocation.

The message is a template whose holes are resolved against `args` by the backend.  The
dispatcher never inspects or validates the template.
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogCall<'a> {
    level: Level,
    message: &'a str,
    args: &'a [LogArg],
}

impl<'a> LogCall<'a> {
    pub fn new(level: Level, message: &'a str, args: &'a [LogArg]) -> Self {
        Self {
            level,
            message,
            args,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The message template, as passed by the caller.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The positional arguments, exactly as passed by the caller.
    pub fn args(&self) -> &'a [LogArg] {
        self.args
    }

    /// Renders the template against the arguments.
    pub fn render(&self) -> String {
        crate::template::render(self.message, self.args)
    }
}

/*
Boilerplate notes for LogCall:

- Copy: everything is borrowed, so copying is free and lets backends pass calls along.
- PartialEq: field-wise, through LogArg's equality.
- Eq/Hash: not possible, LogArg holds floats.
- Default: a call with no level makes no sense.
*/
