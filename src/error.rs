use thiserror::Error;

/// Errors raised while building a [`crate::student::StudentRecord`].
///
/// Only construction can fail; every other invalid input is reported as a
/// non-applied [`crate::grade::GradeOutcome`] instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required identity field was empty or whitespace-only.
    #[error("Student {field} cannot be empty: {reason}")]
    InvalidArgument {
        /// Which field was rejected (`ID` or `name`).
        field:  &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl RecordError {
    /// Builds an `InvalidArgument` for a blank field.
    pub(crate) fn blank(field: &'static str, value: &str) -> Self {
        let reason = if value.is_empty() {
            "got an empty string".to_string()
        } else {
            format!("got {} whitespace character(s) only", value.chars().count())
        };
        Self::InvalidArgument { field, reason }
    }
}
