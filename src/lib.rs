//! # gradecard
//!
//! An in-memory student record: accumulates grades, computes the average,
//! derives a letter grade with pass and honor roll status, and renders
//! reports.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Runtime configuration read from the environment
pub mod config;
/// Grade thresholds and bounds
pub mod constants;
/// Scripted scenarios for the command line driver
pub mod demo;
/// Error types
pub mod error;
/// Grade candidates, letter grades and mutation outcomes
pub mod grade;
/// Report and summary rendering
pub mod report;
/// The student record itself
pub mod student;

pub use error::RecordError;
pub use grade::{GradeInput, GradeOutcome, LetterGrade};
pub use report::StudentSummary;
pub use student::StudentRecord;
