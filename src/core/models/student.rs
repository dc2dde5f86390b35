//! Student model

use super::check_score;
use crate::core::error::ValidationError;

/// Represents one student on the roster: a stable identifier, a display
/// name, and a validated attendance percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Opaque unique identifier, caller-supplied and never regenerated
    id: String,

    /// Display name, non-empty
    name: String,

    /// Attendance percentage, always within [0, 100]
    attendance_percent: f64,
}

impl Student {
    /// Create a new student with zero attendance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (e.g., "S1", "2210101")
    /// * `name` - Display name
    ///
    /// # Errors
    /// Returns [`ValidationError::Empty`] if `id` or `name` is empty after
    /// trimming.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        Ok(Self {
            id,
            name,
            attendance_percent: 0.0,
        })
    }

    /// Get the student's identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the student's display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the attendance percentage
    #[must_use]
    pub const fn attendance_percent(&self) -> f64 {
        self.attendance_percent
    }

    /// Set the attendance percentage.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfRange`] if `value` falls outside
    /// [0, 100]; the prior value is retained on failure.
    pub fn set_attendance(&mut self, value: f64) -> Result<(), ValidationError> {
        self.attendance_percent = check_score("attendance", value)?;
        Ok(())
    }

    /// Format a one-line profile summary.
    ///
    /// Side-effect-free; attendance is rendered to 2 decimals.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} - {}, attendance: {:.2}%",
            self.id, self.name, self.attendance_percent
        )
    }
}
