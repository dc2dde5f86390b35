//! Class registry
//!
//! Owns the roster: one [`Student`] paired with one [`GradeSheet`] per
//! entry, keyed by student id. A parallel order index preserves registration
//! order so reports are reproducible run to run.

use std::collections::HashMap;

use crate::core::error::RegistryError;
use crate::core::models::{check_score, GradeSheet, Student};

/// A partial grade update; `None` fields are left unchanged.
///
/// "No value supplied" is distinct from zero: a caller that wants to zero a
/// component passes `Some(0.0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradeUpdate {
    /// New quiz score, if supplied
    pub quiz: Option<f64>,
    /// New assignment score, if supplied
    pub assignment: Option<f64>,
    /// New midterm score, if supplied
    pub midterm: Option<f64>,
    /// New final exam score, if supplied
    pub final_exam: Option<f64>,
}

impl GradeUpdate {
    /// An update that supplies all four components.
    #[must_use]
    pub const fn full(quiz: f64, assignment: f64, midterm: f64, final_exam: f64) -> Self {
        Self {
            quiz: Some(quiz),
            assignment: Some(assignment),
            midterm: Some(midterm),
            final_exam: Some(final_exam),
        }
    }
}

/// One flat aggregate row per student, in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary {
    /// Student identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Attendance percentage
    pub attendance_percent: f64,
    /// Weighted final score, rounded to 2 decimals
    pub final_score: f64,
    /// Letter grade derived from the final score
    pub grade: &'static str,
}

/// A registry entry pairing a student with their grade sheet.
#[derive(Debug, Clone)]
struct Entry {
    student: Student,
    grades: GradeSheet,
}

/// Registry of all students in the class, keyed by student id.
///
/// The registry exclusively owns both the student record and the grade sheet
/// for each entry; there is no remove operation, matching the add-only entry
/// lifecycle of the tracker.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    /// Entries indexed by student id
    entries: HashMap<String, Entry>,
    /// Student ids in registration order
    order: Vec<String>,
}

impl ClassRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered students
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Register a student, creating a fresh zero-valued grade sheet.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateId`] if the id is already
    /// registered; the registry is unchanged on failure.
    pub fn add_student(&mut self, student: Student) -> Result<(), RegistryError> {
        let id = student.id().to_string();
        if self.entries.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }

        self.entries.insert(
            id.clone(),
            Entry {
                student,
                grades: GradeSheet::default(),
            },
        );
        self.order.push(id);
        Ok(())
    }

    /// Get a student by id
    #[must_use]
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.entries.get(id).map(|entry| &entry.student)
    }

    /// Get a student's grade sheet by id
    #[must_use]
    pub fn grades(&self, id: &str) -> Option<&GradeSheet> {
        self.entries.get(id).map(|entry| &entry.grades)
    }

    /// Set a student's attendance percentage.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if the id is absent, or a
    /// validation error (propagated unchanged) if the value is out of range.
    pub fn set_attendance(&mut self, id: &str, value: f64) -> Result<(), RegistryError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        entry.student.set_attendance(value)?;
        Ok(())
    }

    /// Apply a partial grade update; omitted components are left unchanged.
    ///
    /// All supplied components are validated before any mutation is
    /// committed, so a failed call never leaves a partially updated sheet.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if the id is absent, or the first
    /// validation error among the supplied components.
    pub fn set_grades(&mut self, id: &str, update: GradeUpdate) -> Result<(), RegistryError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        // Validate every supplied field before committing any of them.
        if let Some(value) = update.quiz {
            check_score("quiz", value)?;
        }
        if let Some(value) = update.assignment {
            check_score("assignment", value)?;
        }
        if let Some(value) = update.midterm {
            check_score("midterm", value)?;
        }
        if let Some(value) = update.final_exam {
            check_score("final", value)?;
        }

        if let Some(value) = update.quiz {
            entry.grades.set_quiz(value)?;
        }
        if let Some(value) = update.assignment {
            entry.grades.set_assignment(value)?;
        }
        if let Some(value) = update.midterm {
            entry.grades.set_midterm(value)?;
        }
        if let Some(value) = update.final_exam {
            entry.grades.set_final_exam(value)?;
        }
        Ok(())
    }

    /// Produce one flat summary row per student, in registration order.
    ///
    /// Pure read; an empty registry yields an empty Vec.
    #[must_use]
    pub fn aggregate(&self) -> Vec<StudentSummary> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id))
            .map(|entry| {
                let final_score = entry.grades.final_score();
                StudentSummary {
                    id: entry.student.id().to_string(),
                    name: entry.student.name().to_string(),
                    attendance_percent: entry.student.attendance_percent(),
                    final_score,
                    grade: grade_letter(final_score),
                }
            })
            .collect()
    }
}

/// Map a final score to its letter grade.
///
/// Inclusive lower bounds, evaluated in descending order: `>=85` A, `>=75` B,
/// `>=65` C, `>=50` D, otherwise E.
#[must_use]
pub fn grade_letter(score: f64) -> &'static str {
    if score >= 85.0 {
        "A"
    } else if score >= 75.0 {
        "B"
    } else if score >= 65.0 {
        "C"
    } else if score >= 50.0 {
        "D"
    } else {
        "E"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(ids: &[(&str, &str)]) -> ClassRegistry {
        let mut registry = ClassRegistry::new();
        for (id, name) in ids {
            registry
                .add_student(Student::new(*id, *name).unwrap())
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_add_student_creates_zero_grade_sheet() {
        let registry = registry_with(&[("S1", "Ana")]);

        let grades = registry.grades("S1").unwrap();
        assert_eq!(*grades, GradeSheet::default());
    }

    #[test]
    fn test_add_duplicate_id_leaves_registry_unchanged() {
        let mut registry = registry_with(&[("S1", "Ana")]);
        registry.set_attendance("S1", 80.0).unwrap();

        let err = registry
            .add_student(Student::new("S1", "Impostor").unwrap())
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("S1".to_string()));

        assert_eq!(registry.len(), 1);
        let original = registry.student("S1").unwrap();
        assert_eq!(original.name(), "Ana");
        assert!((original.attendance_percent() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_attendance_unknown_id() {
        let mut registry = ClassRegistry::new();
        let err = registry.set_attendance("S9", 50.0).unwrap_err();
        assert_eq!(err, RegistryError::NotFound("S9".to_string()));
    }

    #[test]
    fn test_set_attendance_propagates_validation() {
        let mut registry = registry_with(&[("S1", "Ana")]);

        let err = registry.set_attendance("S1", 120.0).unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
        assert!(registry.student("S1").unwrap().attendance_percent().abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_grades_partial_update() {
        let mut registry = registry_with(&[("S1", "Ana")]);

        registry
            .set_grades(
                "S1",
                GradeUpdate {
                    quiz: Some(90.0),
                    midterm: Some(80.0),
                    ..GradeUpdate::default()
                },
            )
            .unwrap();

        let grades = registry.grades("S1").unwrap();
        assert!((grades.quiz() - 90.0).abs() < f64::EPSILON);
        assert!((grades.midterm() - 80.0).abs() < f64::EPSILON);
        // Omitted components stay at their prior values
        assert!(grades.assignment().abs() < f64::EPSILON);
        assert!(grades.final_exam().abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_grades_all_or_nothing() {
        let mut registry = registry_with(&[("S1", "Ana")]);
        registry
            .set_grades("S1", GradeUpdate::full(50.0, 50.0, 50.0, 50.0))
            .unwrap();

        // quiz is valid but final is not; neither may be applied
        let err = registry
            .set_grades(
                "S1",
                GradeUpdate {
                    quiz: Some(95.0),
                    final_exam: Some(130.0),
                    ..GradeUpdate::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));

        let grades = registry.grades("S1").unwrap();
        assert!((grades.quiz() - 50.0).abs() < f64::EPSILON);
        assert!((grades.final_exam() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_grades_unknown_id() {
        let mut registry = ClassRegistry::new();
        let err = registry
            .set_grades("S9", GradeUpdate::full(1.0, 2.0, 3.0, 4.0))
            .unwrap_err();
        assert_eq!(err, RegistryError::NotFound("S9".to_string()));
    }

    #[test]
    fn test_grade_letter_boundaries() {
        assert_eq!(grade_letter(85.0), "A");
        assert_eq!(grade_letter(84.99), "B");
        assert_eq!(grade_letter(75.0), "B");
        assert_eq!(grade_letter(65.0), "C");
        assert_eq!(grade_letter(50.0), "D");
        assert_eq!(grade_letter(49.99), "E");
        assert_eq!(grade_letter(0.0), "E");
        assert_eq!(grade_letter(100.0), "A");
    }

    #[test]
    fn test_aggregate_empty() {
        let registry = ClassRegistry::new();
        assert!(registry.aggregate().is_empty());
    }

    #[test]
    fn test_aggregate_preserves_registration_order() {
        let registry = registry_with(&[("S3", "Cia"), ("S1", "Ana"), ("S2", "Ben")]);

        let rows = registry.aggregate();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["S3", "S1", "S2"]);
    }

    #[test]
    fn test_end_to_end_summary_row() {
        let mut registry = registry_with(&[("S1", "Ana")]);
        registry
            .set_grades("S1", GradeUpdate::full(90.0, 85.0, 80.0, 95.0))
            .unwrap();
        registry.set_attendance("S1", 92.5).unwrap();

        let rows = registry.aggregate();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.id, "S1");
        assert_eq!(row.name, "Ana");
        assert!((row.attendance_percent - 92.5).abs() < f64::EPSILON);
        // 90*0.15 + 85*0.25 + 80*0.25 + 95*0.35 = 88.00
        assert!((row.final_score - 88.0).abs() < f64::EPSILON);
        assert_eq!(row.grade, "A");
    }
}
