use gradecard::{GradeInput, GradeOutcome, LetterGrade, RecordError, StudentRecord};

fn alice() -> StudentRecord {
    StudentRecord::new("001", "Alice").expect("valid student")
}

fn with_grades(grades: &[f64]) -> StudentRecord {
    let mut student = alice();
    for g in grades {
        assert!(student.add_grade(*g).is_applied(), "grade {g} should be accepted");
    }
    student
}

#[test]
fn new_record_starts_empty_and_uncomputed() {
    let student = alice();

    assert_eq!(student.id(), "001");
    assert_eq!(student.name(), "Alice");
    assert!(student.grades().is_empty());
    assert_eq!(student.letter_grade(), LetterGrade::NotComputed);
    assert!(!student.passed());
    assert!(!student.honor_roll());
}

#[test]
fn blank_identity_is_rejected() {
    let empty_id = StudentRecord::new("", "Alice").expect_err("empty id");
    assert!(matches!(empty_id, RecordError::InvalidArgument { field: "ID", .. }));

    let blank_name = StudentRecord::new("001", "   ").expect_err("blank name");
    assert!(matches!(blank_name, RecordError::InvalidArgument { field: "name", .. }));

    assert!(StudentRecord::new(" \t", "Alice").is_err());
}

#[test]
fn add_grade_accepts_only_in_range_numbers() {
    let mut student = alice();

    for g in [0.0, 100.0, 59.5, 73.0] {
        let before = student.grade_count();
        assert_eq!(student.add_grade(g), GradeOutcome::Added(g));
        assert_eq!(student.grade_count(), before + 1);
    }

    let before = student.grade_count();
    assert_eq!(student.add_grade(-0.01), GradeOutcome::RejectedOutOfRange(-0.01));
    assert_eq!(student.add_grade(100.5), GradeOutcome::RejectedOutOfRange(100.5));
    assert_eq!(student.add_grade(101), GradeOutcome::RejectedOutOfRange(101.0));
    assert!(!student.add_grade(f64::NAN).is_applied());
    assert!(!student.add_grade(f64::INFINITY).is_applied());
    assert_eq!(student.grade_count(), before);
}

#[test]
fn add_grade_rejects_non_numeric_input() {
    let mut student = alice();

    assert_eq!(
        student.add_grade("Ninety"),
        GradeOutcome::RejectedInvalidValue("Ninety".to_string())
    );
    // A numeric-looking string is still not a number.
    assert!(!student.add_grade(String::from("95")).is_applied());
    assert!(student.grades().is_empty());
}

#[test]
fn integer_inputs_are_numeric() {
    assert_eq!(GradeInput::from(88u8), GradeInput::Number(88.0));
    assert_eq!(GradeInput::from(-5i64), GradeInput::Number(-5.0));
    assert!(GradeInput::from("A+").in_range().is_none());
    assert_eq!(GradeInput::from(100).in_range(), Some(100.0));
}

#[test]
fn average_of_empty_record_is_zero() {
    assert_eq!(alice().calc_average(), 0.0);
}

#[test]
fn average_is_order_independent_mean() {
    let a = with_grades(&[70.0, 80.0, 90.0]);
    let b = with_grades(&[90.0, 70.0, 80.0]);

    assert_eq!(a.calc_average(), 80.0);
    assert_eq!(a.calc_average(), b.calc_average());
    assert_eq!(with_grades(&[95.0, 88.0, 76.5]).calc_average(), 86.5);
}

#[test]
fn remove_by_value_drops_first_match_only() {
    let mut student = with_grades(&[80.0, 80.0, 90.0]);

    assert_eq!(student.remove_grade_by_value(80.0), GradeOutcome::RemovedByValue(80.0));
    assert_eq!(student.grades(), &[80.0, 90.0]);
}

#[test]
fn remove_by_value_reports_missing_grade() {
    let mut student = with_grades(&[80.0, 90.0]);

    assert_eq!(student.remove_grade_by_value(70.0), GradeOutcome::NotFound(70.0));
    assert_eq!(student.grades(), &[80.0, 90.0]);
}

#[test]
fn remove_by_index_in_bounds() {
    let mut student = with_grades(&[95.0, 88.0, 76.5]);

    assert_eq!(
        student.remove_grade_by_index(1),
        GradeOutcome::RemovedByIndex {
            index: 1,
            value: 88.0,
        }
    );
    assert_eq!(student.grades(), &[95.0, 76.5]);
}

#[test]
fn remove_by_index_out_of_bounds_is_a_no_op() {
    let mut student = with_grades(&[95.0, 88.0]);

    assert_eq!(
        student.remove_grade_by_index(2),
        GradeOutcome::IndexOutOfBounds { index: 2, len: 2 }
    );
    assert_eq!(
        student.remove_grade_by_index(-1),
        GradeOutcome::IndexOutOfBounds { index: -1, len: 2 }
    );
    assert_eq!(student.grades(), &[95.0, 88.0]);

    let mut empty = alice();
    assert!(!empty.remove_grade_by_index(0).is_applied());
}

#[test]
fn outcome_messages_name_the_value() {
    let mut student = alice();

    assert!(student.add_grade("Ninety").to_string().contains("\"Ninety\""));
    assert!(student.add_grade(-5).to_string().contains("-5"));
    assert!(student.remove_grade_by_index(7).to_string().contains("7"));
    assert!(student.remove_grade_by_value(42.0).to_string().contains("42"));
}

#[test]
fn cached_status_is_stale_until_recomputed() {
    let mut student = with_grades(&[95.0]);
    assert_eq!(student.letter_grade(), LetterGrade::NotComputed);
    assert!(!student.passed());

    student.determine_letter_grade();
    assert!(student.passed());
    assert!(student.honor_roll());

    student.add_grade(10);
    // Still the cached values from before the new grade.
    assert_eq!(student.letter_grade(), LetterGrade::A);
    assert!(student.honor_roll());

    assert_eq!(student.determine_letter_grade(), LetterGrade::F);
    assert!(!student.passed());
    assert!(!student.honor_roll());
}

#[test]
fn honor_roll_is_revoked_after_removal() {
    let mut student = with_grades(&[100.0, 95.0, 70.0]);
    assert!(student.check_honor());

    student.remove_grade_by_value(100.0);
    assert!(!student.check_honor());
    assert_eq!(student.letter_grade(), LetterGrade::B);
    assert!(student.passed());
}

#[test]
fn end_to_end_scenario() {
    let mut student = StudentRecord::new("001", "Alice").expect("valid student");

    student.add_grade(95);
    student.add_grade(88);
    student.add_grade(76.5);
    student.add_grade("Ninety");
    student.add_grade(-5);
    assert_eq!(student.grades(), &[95.0, 88.0, 76.5]);

    student.remove_grade_by_index(2);
    assert_eq!(student.grades(), &[95.0, 88.0]);

    student.remove_grade_by_value(88.0);
    assert_eq!(student.grades(), &[95.0]);

    assert_eq!(student.calc_average(), 95.0);
    assert_eq!(student.determine_letter_grade(), LetterGrade::A);
    assert!(student.passed());
    assert!(student.honor_roll());
}
