#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Serialize, Serializer};

use crate::constants::{B_THRESHOLD, C_THRESHOLD, HONOR_THRESHOLD, PASS_THRESHOLD};

/// Letter classification of an average grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterGrade {
    /// Average of 90 or above
    A,
    /// Average in [80, 90)
    B,
    /// Average in [70, 80)
    C,
    /// Average in [60, 70)
    D,
    /// Average below 60
    F,
    /// No grading computation has run yet
    #[default]
    NotComputed,
}

impl LetterGrade {
    /// Classifies an average. Each threshold is inclusive on its lower bound.
    pub fn from_average(average: f64) -> Self {
        if average >= HONOR_THRESHOLD {
            LetterGrade::A
        } else if average >= B_THRESHOLD {
            LetterGrade::B
        } else if average >= C_THRESHOLD {
            LetterGrade::C
        } else if average >= PASS_THRESHOLD {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    /// True for `A` through `D`.
    pub fn is_passing(&self) -> bool {
        matches!(self, LetterGrade::A | LetterGrade::B | LetterGrade::C | LetterGrade::D)
    }

    /// Text used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
            LetterGrade::NotComputed => "N/A",
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LetterGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
