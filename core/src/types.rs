//! Domain types for the exercise rename batch.
//!
//! # Design
//! `RenamePair` doubles as the wire payload: its field names are the exact
//! JSON keys the rename endpoint expects, so serialization is just a serde
//! derive. `BatchConfig` is the only way to assemble a batch from two name
//! lists, which keeps the equal-length invariant in one place.

use serde::{Deserialize, Serialize};

use crate::error::BatchError;

/// One rename request: the current name and the name to replace it with.
///
/// Serializes to `{"old_exercise_name": ..., "new_exercise_name": ...}`,
/// the exact body of a `POST` to the rename endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenamePair {
    pub old_exercise_name: String,
    pub new_exercise_name: String,
}

impl RenamePair {
    pub fn new(old_exercise_name: impl Into<String>, new_exercise_name: impl Into<String>) -> Self {
        Self {
            old_exercise_name: old_exercise_name.into(),
            new_exercise_name: new_exercise_name.into(),
        }
    }
}

/// Everything one batch run needs: the endpoint URL and the ordered pairs.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub endpoint_url: String,
    pub renames: Vec<RenamePair>,
}

impl BatchConfig {
    pub fn new(endpoint_url: impl Into<String>, renames: Vec<RenamePair>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            renames,
        }
    }

    /// Pair `old_names[i]` with `new_names[i]` in order.
    ///
    /// Fails with [`BatchError::LengthMismatch`] when the lists differ in
    /// length; no pairs are formed in that case.
    pub fn from_name_lists(
        endpoint_url: impl Into<String>,
        old_names: &[String],
        new_names: &[String],
    ) -> Result<Self, BatchError> {
        if old_names.len() != new_names.len() {
            return Err(BatchError::LengthMismatch {
                old_len: old_names.len(),
                new_len: new_names.len(),
            });
        }
        let renames = old_names
            .iter()
            .zip(new_names)
            .map(|(old, new)| RenamePair::new(old.clone(), new.clone()))
            .collect();
        Ok(Self::new(endpoint_url, renames))
    }
}
