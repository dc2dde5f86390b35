//! Grade component model
//!
//! Four weighted components make up a student's final score. The weights are
//! fixed course policy, not configuration: quiz 15%, assignment 25%, midterm
//! 25%, final exam 35%.

use super::{check_score, round2};
use crate::core::error::ValidationError;

/// Weight applied to the quiz component.
pub const QUIZ_WEIGHT: f64 = 0.15;
/// Weight applied to the assignment component.
pub const ASSIGNMENT_WEIGHT: f64 = 0.25;
/// Weight applied to the midterm component.
pub const MIDTERM_WEIGHT: f64 = 0.25;
/// Weight applied to the final exam component.
pub const FINAL_WEIGHT: f64 = 0.35;

/// The four grade components for one student, each within [0, 100].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradeSheet {
    quiz: f64,
    assignment: f64,
    midterm: f64,
    final_exam: f64,
}

impl GradeSheet {
    /// Create a grade sheet with all components validated up front.
    ///
    /// # Arguments
    /// * `quiz` - Quiz score
    /// * `assignment` - Assignment score
    /// * `midterm` - Midterm exam score
    /// * `final_exam` - Final exam score
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfRange`] for the first component that
    /// falls outside [0, 100]; no partial sheet is constructed.
    pub fn new(
        quiz: f64,
        assignment: f64,
        midterm: f64,
        final_exam: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            quiz: check_score("quiz", quiz)?,
            assignment: check_score("assignment", assignment)?,
            midterm: check_score("midterm", midterm)?,
            final_exam: check_score("final", final_exam)?,
        })
    }

    /// Get the quiz score
    #[must_use]
    pub const fn quiz(&self) -> f64 {
        self.quiz
    }

    /// Get the assignment score
    #[must_use]
    pub const fn assignment(&self) -> f64 {
        self.assignment
    }

    /// Get the midterm score
    #[must_use]
    pub const fn midterm(&self) -> f64 {
        self.midterm
    }

    /// Get the final exam score
    #[must_use]
    pub const fn final_exam(&self) -> f64 {
        self.final_exam
    }

    /// Set the quiz score.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfRange`] for values outside [0, 100];
    /// the prior value is retained on failure.
    pub fn set_quiz(&mut self, value: f64) -> Result<(), ValidationError> {
        self.quiz = check_score("quiz", value)?;
        Ok(())
    }

    /// Set the assignment score.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfRange`] for values outside [0, 100];
    /// the prior value is retained on failure.
    pub fn set_assignment(&mut self, value: f64) -> Result<(), ValidationError> {
        self.assignment = check_score("assignment", value)?;
        Ok(())
    }

    /// Set the midterm score.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfRange`] for values outside [0, 100];
    /// the prior value is retained on failure.
    pub fn set_midterm(&mut self, value: f64) -> Result<(), ValidationError> {
        self.midterm = check_score("midterm", value)?;
        Ok(())
    }

    /// Set the final exam score.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfRange`] for values outside [0, 100];
    /// the prior value is retained on failure.
    pub fn set_final_exam(&mut self, value: f64) -> Result<(), ValidationError> {
        self.final_exam = check_score("final", value)?;
        Ok(())
    }

    /// Compute the weighted final score, rounded to 2 decimals.
    ///
    /// Deterministic and total: defined for every valid sheet, including the
    /// all-zero default.
    #[must_use]
    pub fn final_score(&self) -> f64 {
        round2(
            self.quiz * QUIZ_WEIGHT
                + self.assignment * ASSIGNMENT_WEIGHT
                + self.midterm * MIDTERM_WEIGHT
                + self.final_exam * FINAL_WEIGHT,
        )
    }
}
