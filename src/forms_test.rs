use super::*;

fn form(mood: i32, stress: i32, sleep: i32) -> CheckInForm {
    CheckInForm { mood, stress, sleep, notes: String::new() }
}

// =============================================================
// CheckInForm
// =============================================================

#[test]
fn default_form_is_midscale_with_empty_notes() {
    let form = CheckInForm::default();
    assert_eq!((form.mood, form.stress, form.sleep), (3, 3, 3));
    assert!(form.notes.is_empty());
}

#[test]
fn every_in_range_combination_validates() {
    for mood in SCORE_MIN..=SCORE_MAX {
        for stress in SCORE_MIN..=SCORE_MAX {
            for sleep in SCORE_MIN..=SCORE_MAX {
                assert_eq!(form(mood, stress, sleep).validate(), Ok(()));
            }
        }
    }
}

#[test]
fn single_violation_is_reported() {
    let err = form(0, 3, 3).validate().unwrap_err();
    assert_eq!(err.violations, vec![ScoreViolation { field: ScoreField::Mood, value: 0 }]);
}

#[test]
fn all_violations_are_reported_in_field_order() {
    let err = form(6, -1, 9).validate().unwrap_err();
    let fields: Vec<ScoreField> = err.violations.iter().map(|v| v.field).collect();
    assert_eq!(fields, vec![ScoreField::Mood, ScoreField::Stress, ScoreField::Sleep]);
}

#[test]
fn error_message_lists_each_constraint() {
    let err = form(3, 7, 0).validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid check-in: stress must be between 1 and 5 (got 7), sleep must be between 1 and 5 (got 0)"
    );
}

// =============================================================
// Journal
// =============================================================

#[test]
fn journal_content_is_kept_untrimmed() {
    assert_eq!(validate_journal_content("  felt calm \n"), Ok("  felt calm \n"));
}

#[test]
fn blank_journal_content_is_rejected() {
    assert_eq!(validate_journal_content(""), Err(JournalFormError::Empty));
    assert_eq!(validate_journal_content(" \n\t "), Err(JournalFormError::Empty));
}
