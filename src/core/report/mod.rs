//! Report generation for class performance
//!
//! Renders the registry's aggregate rows to Markdown or HTML. Renderers only
//! read the rows handed to them; the registry itself is never touched here.

pub mod formats;

use std::error::Error;
use std::path::Path;

use crate::core::models::round2;
use crate::core::registry::StudentSummary;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Final score below which a student is flagged for remedial follow-up.
pub const REMEDIAL_THRESHOLD: f64 = 70.0;

/// Data context for report generation
///
/// Borrows the aggregate rows (in registration order) plus a class label,
/// and derives the header statistics every format shares.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Label for the class being reported
    pub class_name: &'a str,
    /// Aggregate rows in registration order
    pub rows: &'a [StudentSummary],
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(class_name: &'a str, rows: &'a [StudentSummary]) -> Self {
        Self { class_name, rows }
    }

    /// Number of students in the report
    #[must_use]
    pub const fn student_count(&self) -> usize {
        self.rows.len()
    }

    /// Mean final score across the class, rounded to 2 decimals.
    ///
    /// Zero for an empty roster.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn class_average(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        let total: f64 = self.rows.iter().map(|row| row.final_score).sum();
        round2(total / self.rows.len() as f64)
    }

    /// The highest-scoring student; first registered wins ties.
    #[must_use]
    pub fn top_student(&self) -> Option<&StudentSummary> {
        self.rows.iter().reduce(|best, row| {
            if row.final_score > best.final_score {
                row
            } else {
                best
            }
        })
    }

    /// Number of students below the remedial threshold
    #[must_use]
    pub fn below_threshold_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.final_score < REMEDIAL_THRESHOLD)
            .count()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<StudentSummary> {
        vec![
            StudentSummary {
                id: "S1".to_string(),
                name: "Ana".to_string(),
                attendance_percent: 92.5,
                final_score: 88.0,
                grade: "A",
            },
            StudentSummary {
                id: "S2".to_string(),
                name: "Ben".to_string(),
                attendance_percent: 80.0,
                final_score: 62.0,
                grade: "D",
            },
        ]
    }

    #[test]
    fn test_context_statistics() {
        let rows = sample_rows();
        let ctx = ReportContext::new("Algorithms 101", &rows);

        assert_eq!(ctx.student_count(), 2);
        assert!((ctx.class_average() - 75.0).abs() < f64::EPSILON);
        assert_eq!(ctx.top_student().unwrap().id, "S1");
        assert_eq!(ctx.below_threshold_count(), 1);
    }

    #[test]
    fn test_context_empty_roster() {
        let ctx = ReportContext::new("Empty", &[]);

        assert_eq!(ctx.student_count(), 0);
        assert!(ctx.class_average().abs() < f64::EPSILON);
        assert!(ctx.top_student().is_none());
        assert_eq!(ctx.below_threshold_count(), 0);
    }

    #[test]
    fn test_top_student_first_registered_wins_ties() {
        let mut rows = sample_rows();
        rows[1].final_score = 88.0;
        let ctx = ReportContext::new("Tied", &rows);

        assert_eq!(ctx.top_student().unwrap().id, "S1");
    }
}
