//! HTML report generator
//!
//! Generates class performance reports as a self-contained HTML page with
//! embedded CSS; no external assets are referenced.

use crate::core::report::{ReportContext, ReportGenerator, REMEDIAL_THRESHOLD};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{class_name}}", &escape(ctx.class_name));
        output = output.replace("{{student_count}}", &ctx.student_count().to_string());
        output = output.replace("{{class_average}}", &format!("{:.2}", ctx.class_average()));

        let top_student = ctx
            .top_student()
            .map_or_else(|| "N/A".to_string(), |row| {
                format!("{} ({:.2})", escape(&row.name), row.final_score)
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

        let roster_rows = Self::generate_roster_rows(ctx);
        output = output.replace("{{roster_rows}}", &roster_rows);

        output
    }

    /// Generate one table row per student, in registration order
    fn generate_roster_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();

        for row in ctx.rows {
            let _ = writeln!(
                rows,
                "    <tr><td>{}</td><td>{}</td><td class=\"num\">{:.2}</td><td class=\"num\">{:.2}</td><td class=\"grade\">{}</td></tr>",
                escape(&row.id),
                escape(&row.name),
                row.attendance_percent,
                row.final_score,
                row.grade
            );
        }

        rows
    }
}

/// Escape text for safe embedding in HTML
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::StudentSummary;

    fn sample_rows() -> Vec<StudentSummary> {
        vec![StudentSummary {
            id: "S1".to_string(),
            name: "Ana & Co <x>".to_string(),
            attendance_percent: 92.5,
            final_score: 88.0,
            grade: "A",
        }]
    }

    #[test]
    fn test_render_escapes_names() {
        let rows = sample_rows();
        let ctx = ReportContext::new("Algorithms 101", &rows);
        let rendered = HtmlReporter::new().render(&ctx).unwrap();

        assert!(rendered.contains("Ana &amp; Co &lt;x&gt;"));
        assert!(!rendered.contains("Ana & Co <x>"));
    }

    #[test]
    fn test_render_is_complete_document() {
        let rows = sample_rows();
        let ctx = ReportContext::new("Algorithms 101", &rows);
        let rendered = HtmlReporter::new().render(&ctx).unwrap();

        assert!(rendered.starts_with("<!DOCTYPE html>"));
        assert!(rendered.contains("<td class=\"num\">88.00</td>"));
        assert!(rendered.contains("</html>"));
        assert!(!rendered.contains("{{"));
    }
}
