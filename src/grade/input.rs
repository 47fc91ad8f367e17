#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use crate::constants::{MAX_GRADE, MIN_GRADE};

/// A loosely typed grade candidate, classified before it is admitted into a
/// record.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeInput {
    /// A numeric candidate. Still subject to the range check.
    Number(f64),
    /// Anything that is not a number, kept in its original representation.
    Invalid(String),
}

impl GradeInput {
    /// Returns the numeric value if it lies within the accepted grade range.
    ///
    /// NaN and infinities never pass.
    pub fn in_range(&self) -> Option<f64> {
        match *self {
            GradeInput::Number(v) if (MIN_GRADE..=MAX_GRADE).contains(&v) => Some(v),
            _ => None,
        }
    }
}

/// Implements `From<$t> for GradeInput` for primitive numeric types.
macro_rules! numeric_input {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for GradeInput {
                fn from(value: $t) -> Self {
                    GradeInput::Number(value as f64)
                }
            }
        )*
    };
}

numeric_input!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<&str> for GradeInput {
    fn from(value: &str) -> Self {
        GradeInput::Invalid(value.to_string())
    }
}

impl From<String> for GradeInput {
    fn from(value: String) -> Self {
        GradeInput::Invalid(value)
    }
}

impl Display for GradeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeInput::Number(v) => write!(f, "{v}"),
            GradeInput::Invalid(raw) => write!(f, "{raw:?}"),
        }
    }
}
