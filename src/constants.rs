#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Lowest grade value accepted into a record
pub const MIN_GRADE: f64 = 0.0;

/// Highest grade value accepted into a record
pub const MAX_GRADE: f64 = 100.0;

/// Lowest average that earns an `A`, and with it the honor roll
pub const HONOR_THRESHOLD: f64 = 90.0;

/// Lowest average that earns a `B`
pub const B_THRESHOLD: f64 = 80.0;

/// Lowest average that earns a `C`
pub const C_THRESHOLD: f64 = 70.0;

/// Lowest passing average, earns a `D`
pub const PASS_THRESHOLD: f64 = 60.0;

/// Default wrap width for the value column of a rendered report
pub const DEFAULT_REPORT_WRAP: usize = 48;

/// Header shown above a rendered report
pub const REPORT_TITLE: &str = "Student Report";
