#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use crate::constants::{MAX_GRADE, MIN_GRADE};

/// What happened to a single add or remove request.
///
/// Rejections are values, not errors: a batch of mixed valid and invalid
/// calls runs to completion and each call can be inspected afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeOutcome {
    /// The grade was appended.
    Added(f64),
    /// The candidate was not numeric. Holds its original representation.
    RejectedInvalidValue(String),
    /// The candidate was numeric but outside the accepted range.
    RejectedOutOfRange(f64),
    /// The first grade equal to this value was removed.
    RemovedByValue(f64),
    /// The grade at `index` was removed.
    RemovedByIndex {
        /// Position the grade was removed from.
        index: usize,
        /// The removed grade.
        value: f64,
    },
    /// No grade equal to this value exists.
    NotFound(f64),
    /// The requested index does not address a grade.
    IndexOutOfBounds {
        /// The requested index.
        index: isize,
        /// Number of grades at the time of the request.
        len:   usize,
    },
}

impl GradeOutcome {
    /// True if the record was modified.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            GradeOutcome::Added(_)
                | GradeOutcome::RemovedByValue(_)
                | GradeOutcome::RemovedByIndex { .. }
        )
    }

    /// Emits this outcome as a diagnostic: applied changes at `info`,
    /// everything else at `warn`.
    pub(crate) fn emit(self, student_id: &str) -> Self {
        if self.is_applied() {
            tracing::info!(student = student_id, "{}", self);
        } else {
            tracing::warn!(student = student_id, "{}", self);
        }
        self
    }
}

impl Display for GradeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeOutcome::Added(v) => write!(f, "Added grade {v}"),
            GradeOutcome::RejectedInvalidValue(raw) => {
                write!(f, "Invalid grade {raw:?}: must be a number between {MIN_GRADE} and {MAX_GRADE}")
            }
            GradeOutcome::RejectedOutOfRange(v) => {
                write!(f, "Invalid grade {v}: must be between {MIN_GRADE} and {MAX_GRADE}")
            }
            GradeOutcome::RemovedByValue(v) => write!(f, "Removed grade {v}"),
            GradeOutcome::RemovedByIndex { index, value } => {
                write!(f, "Removed grade {value} at index {index}")
            }
            GradeOutcome::NotFound(v) => write!(f, "Grade {v} not found, nothing removed"),
            GradeOutcome::IndexOutOfBounds { index, len } => {
                write!(f, "Invalid index {index} for {len} grade(s), cannot remove grade")
            }
        }
    }
}
