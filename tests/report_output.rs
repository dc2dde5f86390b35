//! Integration tests for report generation output files

use class_tracker::core::models::Student;
use class_tracker::core::registry::{ClassRegistry, GradeUpdate};
use class_tracker::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
};
use std::fs;
use tempfile::TempDir;

/// Build a small class with one passing and one remedial student
fn sample_registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();

    registry
        .add_student(Student::new("S1", "Ana").unwrap())
        .unwrap();
    registry
        .set_grades("S1", GradeUpdate::full(90.0, 85.0, 80.0, 95.0))
        .unwrap();
    registry.set_attendance("S1", 92.5).unwrap();

    registry
        .add_student(Student::new("S2", "Ben").unwrap())
        .unwrap();
    registry
        .set_grades("S2", GradeUpdate::full(80.0, 70.0, 60.0, 50.0))
        .unwrap();
    registry.set_attendance("S2", 75.0).unwrap();

    registry
}

#[test]
fn test_markdown_report_file_contents() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("report.md");

    let registry = sample_registry();
    let rows = registry.aggregate();
    let ctx = ReportContext::new("Algorithms 101", &rows);

    MarkdownReporter::new()
        .generate(&ctx, &output_path)
        .expect("Markdown generation should succeed");

    let content = fs::read_to_string(&output_path).expect("Report file should exist");

    assert!(content.contains("Algorithms 101"));
    assert!(content.contains("| S1 | Ana | 92.50 | 88.00 | A |"));
    assert!(content.contains("| S2 | Ben | 75.00 | 62.00 | D |"));
    // Average of 88.00 and 62.00
    assert!(content.contains("75.00"));
    assert!(!content.contains("{{"), "No unfilled placeholders");
}

#[test]
fn test_html_report_file_contents() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("report.html");

    let registry = sample_registry();
    let rows = registry.aggregate();
    let ctx = ReportContext::new("Algorithms 101", &rows);

    HtmlReporter::new()
        .generate(&ctx, &output_path)
        .expect("HTML generation should succeed");

    let content = fs::read_to_string(&output_path).expect("Report file should exist");

    assert!(content.contains("<!DOCTYPE html>"));
    assert!(content.contains("Algorithms 101"));
    assert!(content.contains("<td>Ana</td>"));
    assert!(content.contains("<td>Ben</td>"));
    assert!(content.contains("88.00"));
    assert!(!content.contains("{{"), "No unfilled placeholders");
}

#[test]
fn test_html_report_escapes_names() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("report.html");

    let mut registry = ClassRegistry::new();
    registry
        .add_student(Student::new("S1", "Ana <Admin> & Co").unwrap())
        .unwrap();

    let rows = registry.aggregate();
    let ctx = ReportContext::new("Escapes", &rows);

    HtmlReporter::new()
        .generate(&ctx, &output_path)
        .expect("HTML generation should succeed");

    let content = fs::read_to_string(&output_path).expect("Report file should exist");
    assert!(content.contains("Ana &lt;Admin&gt; &amp; Co"));
    assert!(!content.contains("<Admin>"));
}

#[test]
fn test_reports_for_empty_roster() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let ctx = ReportContext::new("Empty", &[]);

    let md_path = temp_dir.path().join("empty.md");
    MarkdownReporter::new()
        .generate(&ctx, &md_path)
        .expect("Markdown generation should succeed");
    let md = fs::read_to_string(&md_path).unwrap();
    assert!(md.contains("0"));
    assert!(md.contains("N/A"));

    let html_path = temp_dir.path().join("empty.html");
    HtmlReporter::new()
        .generate(&ctx, &html_path)
        .expect("HTML generation should succeed");
    assert!(html_path.exists());
}

#[test]
fn test_generate_creates_missing_parent_is_not_assumed() {
    // Writing into a nonexistent directory must surface an error, not panic
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("missing_dir").join("report.md");

    let registry = sample_registry();
    let rows = registry.aggregate();
    let ctx = ReportContext::new("Class", &rows);

    assert!(MarkdownReporter::new().generate(&ctx, &output_path).is_err());
}
