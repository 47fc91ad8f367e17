#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{
    constants::{HONOR_THRESHOLD, PASS_THRESHOLD},
    error::RecordError,
    grade::{self, GradeInput, GradeOutcome, LetterGrade},
    report::{self, StudentSummary},
};

/// One student's identity, grades, and academic status.
///
/// `letter_grade`, `passed` and `honor_roll` are a cache refreshed by
/// [`StudentRecord::determine_letter_grade`] (and by everything that calls
/// it: [`StudentRecord::report`], [`StudentRecord::summary`],
/// [`StudentRecord::check_honor`], [`StudentRecord::snapshot`]). Adding or
/// removing grades leaves the cache stale until the next refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    /// Opaque identifier, never blank
    id:           String,
    /// Display name, never blank
    name:         String,
    /// Accepted grades in insertion order, each within [0, 100]
    grades:       Vec<f64>,
    /// Letter grade as of the last refresh
    letter_grade: LetterGrade,
    /// Pass status as of the last refresh
    passed:       bool,
    /// Honor roll status as of the last refresh
    honor_roll:   bool,
}

impl StudentRecord {
    /// Creates a record with no grades.
    ///
    /// * `id`: student identifier, must contain a non-whitespace character
    /// * `name`: display name, must contain a non-whitespace character
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, RecordError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(RecordError::blank("ID", &id));
        }
        if name.trim().is_empty() {
            return Err(RecordError::blank("name", &name));
        }

        tracing::debug!(student = %id, "Created record for {name}");
        Ok(Self {
            id,
            name,
            grades: Vec::new(),
            letter_grade: LetterGrade::NotComputed,
            passed: false,
            honor_roll: false,
        })
    }

    /// Returns the student identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the student name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accepted grades in insertion order.
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    /// Returns how many grades are recorded.
    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Returns the cached letter grade. Does not recompute.
    pub fn letter_grade(&self) -> LetterGrade {
        self.letter_grade
    }

    /// Returns the cached pass status. Does not recompute.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Returns the cached honor roll status. Does not recompute.
    pub fn honor_roll(&self) -> bool {
        self.honor_roll
    }

    /// Appends a grade if it is a number within [0, 100].
    ///
    /// Anything else is left out of the record and reported through the
    /// returned outcome and a warning.
    pub fn add_grade(&mut self, grade: impl Into<GradeInput>) -> GradeOutcome {
        let input = grade.into();
        let outcome = match (input.in_range(), input) {
            (Some(v), _) => {
                self.grades.push(v);
                GradeOutcome::Added(v)
            }
            (None, GradeInput::Number(v)) => GradeOutcome::RejectedOutOfRange(v),
            (None, GradeInput::Invalid(raw)) => GradeOutcome::RejectedInvalidValue(raw),
        };
        outcome.emit(&self.id)
    }

    /// Mean of the current grades, `0.0` if there are none.
    pub fn calc_average(&self) -> f64 {
        grade::average(&self.grades)
    }

    /// Recomputes the letter grade, pass status and honor roll status from
    /// the current grades, and returns the letter grade.
    pub fn determine_letter_grade(&mut self) -> LetterGrade {
        let average = self.calc_average();

        self.letter_grade = LetterGrade::from_average(average);
        self.passed = average >= PASS_THRESHOLD;
        self.honor_roll = average >= HONOR_THRESHOLD;

        tracing::debug!(
            student = %self.id,
            "Average {average:.2} -> {} (passed: {}, honor roll: {})",
            self.letter_grade,
            self.passed,
            self.honor_roll
        );
        self.letter_grade
    }

    /// Recomputes the grading and returns the honor roll status.
    pub fn check_honor(&mut self) -> bool {
        self.determine_letter_grade();
        self.honor_roll
    }

    /// Removes the earliest grade equal to `value`.
    pub fn remove_grade_by_value(&mut self, value: f64) -> GradeOutcome {
        let outcome = match self.grades.iter().position(|g| *g == value) {
            Some(index) => GradeOutcome::RemovedByValue(self.grades.remove(index)),
            None => GradeOutcome::NotFound(value),
        };
        outcome.emit(&self.id)
    }

    /// Removes the grade at a zero-based `index`.
    ///
    /// Negative indices are out of bounds; they do not count from the end.
    pub fn remove_grade_by_index(&mut self, index: isize) -> GradeOutcome {
        let len = self.grades.len();
        let outcome = match usize::try_from(index) {
            Ok(i) if i < len => GradeOutcome::RemovedByIndex {
                index: i,
                value: self.grades.remove(i),
            },
            _ => GradeOutcome::IndexOutOfBounds { index, len },
        };
        outcome.emit(&self.id)
    }

    /// Refreshes the grading and returns the multi-line report.
    pub fn render_report(&mut self) -> String {
        self.determine_letter_grade();
        report::render(self)
    }

    /// Refreshes the grading and prints the report to standard output.
    pub fn report(&mut self) {
        println!("{}", self.render_report());
    }

    /// Refreshes the grading and returns a one-line summary.
    pub fn summary(&mut self) -> String {
        self.snapshot().to_string()
    }

    /// Refreshes the grading and returns a serializable snapshot.
    pub fn snapshot(&mut self) -> StudentSummary {
        self.determine_letter_grade();
        StudentSummary::from(&*self)
    }
}
