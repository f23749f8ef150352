//! Submission-boundary validation for the check-in and journal forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage accepts any integer score. The 1..=5 range is only enforced here,
//! before a form reaches the store, and every violated field is reported at
//! once so the UI can show a single inline alert.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::fmt;

pub const SCORE_MIN: i32 = 1;
pub const SCORE_MAX: i32 = 5;
pub const SCORE_DEFAULT: i32 = 3;

/// Weekly check-in form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckInForm {
    pub mood: i32,
    pub stress: i32,
    pub sleep: i32,
    pub notes: String,
}

impl Default for CheckInForm {
    fn default() -> Self {
        Self { mood: SCORE_DEFAULT, stress: SCORE_DEFAULT, sleep: SCORE_DEFAULT, notes: String::new() }
    }
}

impl CheckInForm {
    /// Check every score against `SCORE_MIN..=SCORE_MAX`.
    pub fn validate(&self) -> Result<(), CheckInFormError> {
        let violations: Vec<ScoreViolation> = [
            (ScoreField::Mood, self.mood),
            (ScoreField::Stress, self.stress),
            (ScoreField::Sleep, self.sleep),
        ]
        .into_iter()
        .filter(|(_, value)| !(SCORE_MIN..=SCORE_MAX).contains(value))
        .map(|(field, value)| ScoreViolation { field, value })
        .collect();

        if violations.is_empty() { Ok(()) } else { Err(CheckInFormError { violations }) }
    }
}

/// A scored check-in field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreField {
    Mood,
    Stress,
    Sleep,
}

impl ScoreField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Stress => "stress",
            Self::Sleep => "sleep",
        }
    }
}

/// One out-of-range score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreViolation {
    pub field: ScoreField,
    pub value: i32,
}

impl fmt::Display for ScoreViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must be between {SCORE_MIN} and {SCORE_MAX} (got {})", self.field.as_str(), self.value)
    }
}

/// Every constraint a submitted check-in violated, in field order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid check-in: {}", describe(.violations))]
pub struct CheckInFormError {
    pub violations: Vec<ScoreViolation>,
}

fn describe(violations: &[ScoreViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JournalFormError {
    #[error("journal entry is empty")]
    Empty,
}

/// Accept journal content unless it is blank. Content is kept as typed.
pub fn validate_journal_content(raw: &str) -> Result<&str, JournalFormError> {
    if raw.trim().is_empty() {
        return Err(JournalFormError::Empty);
    }
    Ok(raw)
}
