// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::arg::SharedError;
use std::error::Error;
use std::fmt::Display;

/**
Several errors reported together.

When a log call carries more than one error argument, none of them is more important than the
others, so they travel to the backend as one `AggregateError` holding all of them in the order
they were found.
*/
#[derive(Debug, Clone)]
pub struct AggregateError {
    errors: Vec<SharedError>,
}

impl AggregateError {
    pub fn new(errors: impl IntoIterator<Item = SharedError>) -> Self {
        Self {
            errors: errors.into_iter().collect(),
        }
    }

    /// The inner errors, in order.
    pub fn errors(&self) -> &[SharedError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("one or more errors occurred:")?;
        for error in &self.errors {
            write!(f, " ({})", error)?;
        }
        Ok(())
    }
}

impl Error for AggregateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.errors.first().map(|e| &**e as &(dyn Error + 'static))
    }
}
