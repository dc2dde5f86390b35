//! Interactive menu command handler
//!
//! Runs the single-operator tracker session: register students, update
//! attendance and grades, view the summary table, and save reports. Every
//! error is presented and the session continues; only quitting (or EOF on
//! stdin) ends the loop.

use class_tracker::config::Config;
use class_tracker::core::loader::load_roster;
use class_tracker::core::models::{parse_score, Student};
use class_tracker::core::registry::{ClassRegistry, GradeUpdate, StudentSummary};
use class_tracker::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
    REMEDIAL_THRESHOLD,
};
use class_tracker::{debug, error};
use comfy_table::{Cell, Table};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Run the interactive menu session.
///
/// # Arguments
/// * `attendance` - Optional attendance CSV to preload
/// * `grades` - Optional grades CSV to preload
/// * `class_name` - Class label used in summaries and saved reports
/// * `config` - Configuration containing report and data directories
pub fn run(attendance: Option<&Path>, grades: Option<&Path>, class_name: &str, config: &Config) {
    let mut registry = ClassRegistry::new();

    match (attendance, grades) {
        (Some(att), Some(grd)) => load_into(&mut registry, att, grd),
        (Some(_), None) | (None, Some(_)) => {
            eprintln!("⚠️  Preloading needs both --attendance and --grades; starting empty.");
        }
        (None, None) => {}
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();

        let Some(Ok(choice)) = lines.next() else {
            break;
        };

        match choice.trim() {
            "1" => handle_load(&mut registry, config, &mut lines),
            "2" => handle_add_student(&mut registry, &mut lines),
            "3" => handle_set_attendance(&mut registry, &mut lines),
            "4" => handle_set_grades(&mut registry, &mut lines),
            "5" => show_summary(&registry.aggregate()),
            "6" => save_report(&registry, class_name, config, ReportFormat::Markdown),
            "7" => show_below_threshold(&registry),
            "8" => save_report(&registry, class_name, config, ReportFormat::Html),
            "9" => {
                println!("👋 Goodbye!");
                break;
            }
            "" => {}
            other => println!("⚠️  Unknown option '{other}', try again."),
        }
    }
}

fn print_menu() {
    println!("\n=== STUDENT PERFORMANCE TRACKER ===");
    println!("1) Load data from CSV");
    println!("2) Add student");
    println!("3) Set attendance");
    println!("4) Set grades");
    println!("5) View summary");
    println!("6) Save Markdown report");
    println!("7) Show students below {REMEDIAL_THRESHOLD:.0}");
    println!("8) Save HTML report");
    println!("9) Quit");
    print!("Select option: ");
    io::stdout().flush().ok();
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

/// Read one trimmed line of input; `None` means stdin is closed.
fn prompt(label: &str, lines: &mut Lines) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok();
    lines.next()?.ok().map(|line| line.trim().to_string())
}

fn handle_load(registry: &mut ClassRegistry, config: &Config, lines: &mut Lines) {
    let data_dir = PathBuf::from(&config.paths.data_dir);
    let default_att = data_dir.join("attendance.csv");
    let default_grd = data_dir.join("grades.csv");

    let att_label = format!("Attendance CSV [{}]: ", default_att.display());
    let Some(att_input) = prompt(&att_label, lines) else {
        return;
    };
    let grd_label = format!("Grades CSV [{}]: ", default_grd.display());
    let Some(grd_input) = prompt(&grd_label, lines) else {
        return;
    };

    let att_path = if att_input.is_empty() {
        default_att
    } else {
        PathBuf::from(att_input)
    };
    let grd_path = if grd_input.is_empty() {
        default_grd
    } else {
        PathBuf::from(grd_input)
    };

    load_into(registry, &att_path, &grd_path);
}

fn load_into(registry: &mut ClassRegistry, attendance: &Path, grades: &Path) {
    match load_roster(registry, attendance, grades) {
        Ok(stats) => {
            println!(
                "✅ Data loaded: {} students added, {} grade rows applied, {} rows skipped.",
                stats.students_added, stats.grades_applied, stats.rows_skipped
            );
        }
        Err(e) => {
            error!("Roster load failed: {e}");
            println!("❌ {e}");
        }
    }
}

fn handle_add_student(registry: &mut ClassRegistry, lines: &mut Lines) {
    let Some(id) = prompt("Student ID: ", lines) else {
        return;
    };
    let Some(name) = prompt("Name: ", lines) else {
        return;
    };

    let student = match Student::new(id, name) {
        Ok(student) => student,
        Err(e) => {
            println!("❌ {e}");
            return;
        }
    };

    let display_name = student.name().to_string();
    match registry.add_student(student) {
        Ok(()) => println!("✅ Student {display_name} registered."),
        Err(e) => println!("❌ {e}"),
    }
}

fn handle_set_attendance(registry: &mut ClassRegistry, lines: &mut Lines) {
    let Some(id) = prompt("Student ID: ", lines) else {
        return;
    };
    let Some(raw) = prompt("Attendance (%): ", lines) else {
        return;
    };

    let value = match parse_score("attendance", &raw) {
        Ok(value) => value,
        Err(e) => {
            println!("❌ {e}");
            return;
        }
    };

    match registry.set_attendance(&id, value) {
        Ok(()) => println!("✅ Attendance updated."),
        Err(e) => println!("❌ {e}"),
    }
}

fn handle_set_grades(registry: &mut ClassRegistry, lines: &mut Lines) {
    let Some(id) = prompt("Student ID: ", lines) else {
        return;
    };

    let mut update = GradeUpdate::default();
    let components: [(&str, &'static str, &mut Option<f64>); 4] = [
        ("Quiz score (blank to keep): ", "quiz", &mut update.quiz),
        (
            "Assignment score (blank to keep): ",
            "assignment",
            &mut update.assignment,
        ),
        (
            "Midterm score (blank to keep): ",
            "midterm",
            &mut update.midterm,
        ),
        (
            "Final exam score (blank to keep): ",
            "final",
            &mut update.final_exam,
        ),
    ];

    for (label, field, slot) in components {
        let Some(raw) = prompt(label, lines) else {
            return;
        };
        if raw.is_empty() {
            continue;
        }
        match parse_score(field, &raw) {
            Ok(value) => *slot = Some(value),
            Err(e) => {
                println!("❌ {e}");
                return;
            }
        }
    }

    match registry.set_grades(&id, update) {
        Ok(()) => println!("✅ Grades saved."),
        Err(e) => println!("❌ {e}"),
    }
}

/// Render the aggregate rows as a console table.
fn show_summary(rows: &[StudentSummary]) {
    if rows.is_empty() {
        println!("⚠️  No data to display yet.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Attendance (%)", "Final Score", "Grade"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.id),
            Cell::new(&row.name),
            Cell::new(format!("{:.2}", row.attendance_percent)),
            Cell::new(format!("{:.2}", row.final_score)),
            Cell::new(row.grade),
        ]);
    }

    println!("\n{table}");
}

fn show_below_threshold(registry: &ClassRegistry) {
    let rows = registry.aggregate();
    let remedial: Vec<StudentSummary> = rows
        .into_iter()
        .filter(|row| row.final_score < REMEDIAL_THRESHOLD)
        .collect();

    if remedial.is_empty() {
        println!("✅ No students below {REMEDIAL_THRESHOLD:.0}!");
    } else {
        println!("📉 Students below {REMEDIAL_THRESHOLD:.0}:");
        show_summary(&remedial);
    }
}

fn save_report(registry: &ClassRegistry, class_name: &str, config: &Config, format: ReportFormat) {
    let rows = registry.aggregate();
    if rows.is_empty() {
        println!("❌ No data to save.");
        return;
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    if let Err(e) = std::fs::create_dir_all(&reports_dir) {
        println!(
            "❌ Failed to create reports directory {}: {e}",
            reports_dir.display()
        );
        return;
    }

    let output_path = reports_dir.join(format!("report.{}", format.extension()));
    let ctx = ReportContext::new(class_name, &rows);
    debug!("Saving {format} report to {}", output_path.display());

    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
    };

    match result {
        Ok(()) => println!("💾 Report saved to {}", output_path.display()),
        Err(e) => {
            error!("Report save failed: {e}");
            println!("❌ Failed to save report: {e}");
        }
    }
}
