//! Fatal batch errors.
//!
//! # Design
//! Per-item failures are not errors here; they become [`Outcome`] variants
//! and never abort the run. The only failure that stops a batch before any
//! request goes out is the pre-flight length check on the two name lists.
//!
//! [`Outcome`]: crate::outcome::Outcome

use std::fmt;

/// Errors that abort a batch before any request is sent.
#[derive(Debug)]
pub enum BatchError {
    /// The old-name and new-name lists differ in length, so no pairing
    /// exists. Nothing was sent.
    LengthMismatch { old_len: usize, new_len: usize },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::LengthMismatch { old_len, new_len } => write!(
                f,
                "old and new exercise name lists must be the same length \
                 (got {old_len} old names and {new_len} new names)"
            ),
        }
    }
}

impl std::error::Error for BatchError {}
