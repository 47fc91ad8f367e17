#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Loosely typed grade candidates accepted at the mutation boundary.
pub mod input;
/// Letter classification of averages.
pub mod letter;
/// Outcomes of add and remove requests.
pub mod results;

pub use input::GradeInput;
pub use letter::LetterGrade;
pub use results::GradeOutcome;

/// Arithmetic mean of `grades`, `0.0` when there are none.
pub fn average(grades: &[f64]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    grades.iter().sum::<f64>() / grades.len() as f64
}
