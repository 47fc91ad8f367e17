#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use crate::{config, constants::REPORT_TITLE, grade::LetterGrade, student::StudentRecord};

/// A point-in-time view of a record, taken right after a grading refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    /// Student identifier
    pub id:           String,
    /// Student name
    pub name:         String,
    /// Grades in insertion order
    pub grades:       Vec<f64>,
    /// Number of grades
    pub grade_count:  usize,
    /// Mean of `grades`
    pub average:      f64,
    /// Letter grade for `average`
    pub letter_grade: LetterGrade,
    /// Whether `average` passes
    pub passed:       bool,
    /// Whether `average` makes the honor roll
    pub honor_roll:   bool,
}

impl From<&StudentRecord> for StudentSummary {
    fn from(record: &StudentRecord) -> Self {
        Self {
            id:           record.id().to_string(),
            name:         record.name().to_string(),
            grades:       record.grades().to_vec(),
            grade_count:  record.grade_count(),
            average:      record.calc_average(),
            letter_grade: record.letter_grade(),
            passed:       record.passed(),
            honor_roll:   record.honor_roll(),
        }
    }
}

impl Display for StudentSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} grade(s), average {:.2}, letter {}, {}, honor roll: {}",
            self.name,
            self.id,
            self.grade_count,
            self.average,
            self.letter_grade,
            status_text(self.passed),
            yes_no(self.honor_roll)
        )
    }
}

/// A single `Field | Value` line of the report table
#[derive(Tabled)]
struct ReportRow {
    /// Label of the line
    #[tabled(rename = "Field")]
    field: &'static str,
    /// Rendered value
    #[tabled(rename = "Value")]
    value: String,
}

/// Formats grades as `[95, 88, 76.5]`.
pub fn format_grades(grades: &[f64]) -> String {
    format!("[{}]", grades.iter().join(", "))
}

/// `Passed` or `Failed`.
pub fn status_text(passed: bool) -> &'static str {
    if passed { "Passed" } else { "Failed" }
}

/// `Yes` or `No`.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Renders the report table from the record's current (cached) status.
pub(crate) fn render(record: &StudentRecord) -> String {
    let rows = vec![
        ReportRow {
            field: "ID",
            value: record.id().to_string(),
        },
        ReportRow {
            field: "Name",
            value: record.name().to_string(),
        },
        ReportRow {
            field: "Grades",
            value: format_grades(record.grades()),
        },
        ReportRow {
            field: "Grades Count",
            value: record.grade_count().to_string(),
        },
        ReportRow {
            field: "Average Grade",
            value: format!("{:.2}", record.calc_average()),
        },
        ReportRow {
            field: "Letter Grade",
            value: record.letter_grade().to_string(),
        },
        ReportRow {
            field: "Status",
            value: status_text(record.passed()).to_string(),
        },
        ReportRow {
            field: "Honor Roll",
            value: yes_no(record.honor_roll()).to_string(),
        },
    ];

    Table::new(rows)
        .with(Panel::header(REPORT_TITLE))
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(config::report_wrap()).keep_words(true)))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}
