#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Fixed, scripted sequences of valid and invalid calls used by the command
//! line driver. Each returns the record along with the outcome of every
//! mutation, in call order.

use crate::{error::RecordError, grade::GradeOutcome, student::StudentRecord};

/// A record together with the outcomes of the calls that built it.
pub type Scenario = (StudentRecord, Vec<GradeOutcome>);

/// Mixed adds (two rejected), then one removal by index and one by value.
///
/// Leaves Alice with a single grade of 95.
pub fn canonical() -> Result<Scenario, RecordError> {
    let mut student = StudentRecord::new("001", "Alice")?;
    let outcomes = vec![
        student.add_grade(95),
        student.add_grade(88),
        student.add_grade(76.5),
        student.add_grade("Ninety"),
        student.add_grade(-5),
        student.remove_grade_by_index(2),
        student.remove_grade_by_value(88.0),
    ];
    Ok((student, outcomes))
}

/// One perfect grade, a non-numeric grade, and a removal past the end.
pub fn single_grade() -> Result<Scenario, RecordError> {
    let mut student = StudentRecord::new("001", "Alice")?;
    let outcomes = vec![
        student.add_grade(100),
        student.add_grade("Fifty"),
        student.remove_grade_by_index(5),
    ];
    Ok((student, outcomes))
}

/// Two valid grades followed by below-range, non-numeric and above-range
/// candidates.
pub fn range_checked() -> Result<Scenario, RecordError> {
    let mut student = StudentRecord::new("123", "Alice")?;
    let outcomes = vec![
        student.add_grade(95),
        student.add_grade(88.5),
        student.add_grade(-10),
        student.add_grade("A+"),
        student.add_grade(101),
    ];
    Ok((student, outcomes))
}
