//! Report command handler
//!
//! Loads roster CSV files, aggregates the class, prints a console summary,
//! and writes the report in the requested format (Markdown, HTML).

use class_tracker::config::Config;
use class_tracker::core::loader::{load_roster, LoadStats};
use class_tracker::core::registry::ClassRegistry;
use class_tracker::core::report::{
    formats::ReportFormat, HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
    REMEDIAL_THRESHOLD,
};
use class_tracker::{error, info, verbose};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `attendance` - Path to the attendance CSV file
/// * `grades` - Path to the grades CSV file
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `class_name` - Class label for the report header
/// * `config` - Configuration containing default output and data directories
pub fn run(
    attendance: &Path,
    grades: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    class_name: &str,
    config: &Config,
) {
    if let Err(err) = generate_report(attendance, grades, output_file, format_str, class_name, config)
    {
        error!("Report generation failed for {}: {err}", attendance.display());
        eprintln!("{err}");
    }
}

/// Resolve a roster file path against the configured data directory.
///
/// A path that exists as given (or is absolute) is used untouched. Otherwise,
/// if the configured data directory holds a file of that name, that one wins.
fn resolve_data_path(path: &Path, config: &Config) -> PathBuf {
    if path.exists() || path.is_absolute() || config.paths.data_dir.is_empty() {
        return path.to_path_buf();
    }

    let candidate = PathBuf::from(&config.paths.data_dir).join(path);
    if candidate.exists() {
        candidate
    } else {
        path.to_path_buf()
    }
}

/// Load both roster files into a fresh registry
fn load_class(
    attendance: &Path,
    grades: &Path,
    config: &Config,
) -> Result<(ClassRegistry, LoadStats), String> {
    let attendance_path = resolve_data_path(attendance, config);
    let grades_path = resolve_data_path(grades, config);
    verbose!(
        "Loading roster from {} and {}",
        attendance_path.display(),
        grades_path.display()
    );

    let mut registry = ClassRegistry::new();
    let stats = load_roster(&mut registry, &attendance_path, &grades_path).map_err(|e| {
        error!("Failed to load roster {}: {e}", attendance_path.display());
        format!("✗ Failed to load roster: {e}")
    })?;

    info!(
        "Roster loaded: {} students, {} grade rows applied, {} rows skipped",
        stats.students_added, stats.grades_applied, stats.rows_skipped
    );

    Ok((registry, stats))
}

/// Write the report to a file in the specified format
fn write_report(ctx: &ReportContext, format: ReportFormat, output_path: &Path) -> Result<(), String> {
    match format {
        ReportFormat::Markdown => {
            let reporter = MarkdownReporter::new();
            reporter
                .generate(ctx, output_path)
                .map_err(|e| format!("✗ Failed to generate Markdown report: {e}"))?;
        }
        ReportFormat::Html => {
            let reporter = HtmlReporter::new();
            reporter
                .generate(ctx, output_path)
                .map_err(|e| format!("✗ Failed to generate HTML report: {e}"))?;
        }
    }

    Ok(())
}

/// Print a summary of the report
fn print_summary(ctx: &ReportContext, stats: LoadStats) {
    println!("\n=== Summary ===");
    println!("Class: {}", ctx.class_name);
    println!("Students: {}", ctx.student_count());
    println!("Class Average: {:.2}", ctx.class_average());

    if let Some(top) = ctx.top_student() {
        println!("Top Student: {} ({:.2})", top.name, top.final_score);
    }
    println!(
        "Below {REMEDIAL_THRESHOLD:.0}: {}",
        ctx.below_threshold_count()
    );

    if stats.rows_skipped > 0 {
        println!("⚠️  {} roster rows were skipped", stats.rows_skipped);
    }
}

fn generate_report(
    attendance: &Path,
    grades: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    class_name: &str,
    config: &Config,
) -> Result<(), String> {
    // Parse the format
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    // Load the roster and aggregate
    let (registry, stats) = load_class(attendance, grades, config)?;
    let rows = registry.aggregate();
    let ctx = ReportContext::new(class_name, &rows);

    // Determine output path
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let filename = attendance
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("class")
            .to_string();
        let output_filename = format!("{filename}_report.{}", format.extension());
        reports_dir.join(output_filename)
    };

    // Write the report
    write_report(&ctx, format, &final_output_path)?;

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Report exported to: {}", final_output_path.display());

    print_summary(&ctx, stats);

    Ok(())
}
