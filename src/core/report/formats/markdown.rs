//! Markdown report generator
//!
//! Generates class performance reports in Markdown format. These reports
//! render well in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator, REMEDIAL_THRESHOLD};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{class_name}}", ctx.class_name);
        output = output.replace("{{student_count}}", &ctx.student_count().to_string());
        output = output.replace("{{class_average}}", &format!("{:.2}", ctx.class_average()));

        let top_student = ctx
            .top_student()
            .map_or_else(|| "N/A".to_string(), |row| {
                format!("{} ({:.2})", row.name, row.final_score)
            });
        output = output.replace("{{top_student}}", &top_student);

        output = output.replace(
            "{{remedial_threshold}}",
            &format!("{REMEDIAL_THRESHOLD:.0}"),
        );
        output = output.replace(
            "{{below_count}}",
            &ctx.below_threshold_count().to_string(),
        );

        let roster_table = Self::generate_roster_rows(ctx);
        output = output.replace("{{roster_rows}}", &roster_table);

        output
    }

    /// Generate one Markdown table row per student, in registration order
    fn generate_roster_rows(ctx: &ReportContext) -> String {
        let mut table = String::new();

        for row in ctx.rows {
            let _ = writeln!(
                table,
                "| {} | {} | {:.2} | {:.2} | {} |",
                row.id, row.name, row.attendance_percent, row.final_score, row.grade
            );
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
