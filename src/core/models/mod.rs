//! Student and grade models
//!
//! Both models validate every numeric field against the shared [0, 100]
//! contract; the helpers here are the single place that contract lives.

pub mod grades;
pub mod student;

pub use grades::GradeSheet;
pub use student::Student;

use crate::core::error::ValidationError;

/// Check a numeric value against the shared [0, 100] range contract.
///
/// # Arguments
/// * `field` - Name of the field being set, used in the error message
/// * `value` - Candidate value
///
/// # Errors
/// Returns [`ValidationError::OutOfRange`] if the value falls outside the
/// closed range, or is not a finite number.
pub fn check_score(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange { field, value })
    }
}

/// Parse text input into a validated score.
///
/// This is the entry point for all text boundaries (interactive prompts, CSV
/// cells), so every path applies the identical rule: the text must parse as a
/// real number and pass [`check_score`].
///
/// # Arguments
/// * `field` - Name of the field being set, used in the error message
/// * `text` - Raw input text
///
/// # Errors
/// Returns [`ValidationError::NotNumeric`] for unparseable text and
/// [`ValidationError::OutOfRange`] for parseable but out-of-range values.
pub fn parse_score(field: &'static str, text: &str) -> Result<f64, ValidationError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotNumeric {
            field,
            text: text.trim().to_string(),
        })?;
    check_score(field, value)
}

/// Round a value to 2 decimal places.
///
/// Used at the two derived-value sites: attendance percent computed from week
/// marks, and the weighted final score.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_score_accepts_bounds() {
        assert_eq!(check_score("quiz", 0.0), Ok(0.0));
        assert_eq!(check_score("quiz", 100.0), Ok(100.0));
        assert_eq!(check_score("quiz", 62.5), Ok(62.5));
    }

    #[test]
    fn test_check_score_rejects_out_of_range() {
        assert!(check_score("quiz", -0.01).is_err());
        assert!(check_score("quiz", 100.01).is_err());
        assert!(check_score("quiz", f64::NAN).is_err());
    }

    #[test]
    fn test_parse_score_trims_and_parses() {
        assert_eq!(parse_score("attendance", " 92.5 "), Ok(92.5));
    }

    #[test]
    fn test_parse_score_distinguishes_causes() {
        let not_numeric = parse_score("attendance", "abc").unwrap_err();
        assert!(matches!(not_numeric, ValidationError::NotNumeric { .. }));

        let out_of_range = parse_score("attendance", "150").unwrap_err();
        assert!(matches!(out_of_range, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_round2() {
        assert!((round2(88.004) - 88.0).abs() < f64::EPSILON);
        assert!((round2(0.125) - 0.13).abs() < f64::EPSILON);
        assert!((round2(100.0) - 100.0).abs() < f64::EPSILON);
    }
}
