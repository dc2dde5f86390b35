//! Bulk roster loader
//!
//! Fills a [`ClassRegistry`] from two CSV sources: an attendance file with
//! one 0/1 mark per week column, and a grades file with the four weighted
//! components. Bad rows are skipped with a diagnostic rather than aborting
//! the load; only an unreadable file is a hard failure.

mod csv_parser;

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::core::models::{parse_score, round2, Student};
use crate::core::registry::{ClassRegistry, GradeUpdate};
use crate::core::error::RegistryError;
use crate::{info, warn};

use csv_parser::{get_field, parse_csv_line, week_columns};

/// What happened during a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Students newly registered from the attendance file
    pub students_added: usize,
    /// Rows skipped in either file (missing identity, bad values)
    pub rows_skipped: usize,
    /// Grade rows successfully applied
    pub grades_applied: usize,
}

/// Load attendance and grade CSV files into the registry.
///
/// Attendance rows missing `student_id` or `name` are skipped with a
/// warning. Duplicate ids are reported and their attendance re-applied to
/// the existing entry, matching interactive re-loads. Grade rows substitute
/// zero for blank components and are skipped when a component fails the
/// shared validation contract or the id is unregistered.
///
/// # Arguments
/// * `registry` - Registry to fill
/// * `attendance_path` - CSV with `student_id,name,week1,...` columns
/// * `grades_path` - CSV with `student_id,quiz,assignment,mid,final` columns
///
/// # Errors
/// Returns an error only if either file cannot be read.
pub fn load_roster<P: AsRef<Path>>(
    registry: &mut ClassRegistry,
    attendance_path: P,
    grades_path: P,
) -> Result<LoadStats, Box<dyn Error>> {
    let mut stats = LoadStats::default();

    load_attendance(registry, attendance_path.as_ref(), &mut stats)?;
    load_grades(registry, grades_path.as_ref(), &mut stats)?;

    Ok(stats)
}

/// Register students and set their attendance from week marks
fn load_attendance(
    registry: &mut ClassRegistry,
    path: &Path,
    stats: &mut LoadStats,
) -> Result<(), Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("cannot read attendance file {}: {e}", path.display()))?;
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let headers = match lines.next() {
        Some(header_line) => parse_csv_line(header_line),
        None => return Ok(()),
    };
    let weeks = week_columns(&headers);

    for line in lines {
        let id = get_field(line, "student_id", &headers).unwrap_or_default();
        let name = get_field(line, "name", &headers).unwrap_or_default();

        if id.is_empty() || name.is_empty() {
            warn!("attendance row skipped, missing student_id/name: '{line}'");
            stats.rows_skipped += 1;
            continue;
        }

        let student = match Student::new(id, name) {
            Ok(student) => student,
            Err(e) => {
                warn!("attendance row skipped: {e}");
                stats.rows_skipped += 1;
                continue;
            }
        };

        match registry.add_student(student) {
            Ok(()) => stats.students_added += 1,
            Err(RegistryError::DuplicateId(dup)) => {
                info!("student '{dup}' already registered, updating attendance only");
            }
            Err(e) => {
                warn!("attendance row skipped: {e}");
                stats.rows_skipped += 1;
                continue;
            }
        }

        if let Some(percent) = attendance_percent(line, &weeks) {
            if let Err(e) = registry.set_attendance(id, percent) {
                warn!("attendance not applied for '{id}': {e}");
                stats.rows_skipped += 1;
            }
        }
    }

    Ok(())
}

/// Compute the attendance percentage from week-mark cells.
///
/// Blank and unparseable cells count as absent. Returns `None` when the file
/// has no week columns at all.
#[allow(clippy::cast_precision_loss)]
fn attendance_percent(line: &str, weeks: &[usize]) -> Option<f64> {
    if weeks.is_empty() {
        return None;
    }

    let fields = parse_csv_line(line);
    let present: u32 = weeks
        .iter()
        .filter_map(|&idx| fields.get(idx))
        .map(|cell| cell.parse::<u32>().unwrap_or(0))
        .sum();

    Some(round2(f64::from(present) / weeks.len() as f64 * 100.0))
}

/// Apply grade component rows to already-registered students
fn load_grades(
    registry: &mut ClassRegistry,
    path: &Path,
    stats: &mut LoadStats,
) -> Result<(), Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("cannot read grades file {}: {e}", path.display()))?;
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let headers = match lines.next() {
        Some(header_line) => parse_csv_line(header_line),
        None => return Ok(()),
    };

    for line in lines {
        let id = get_field(line, "student_id", &headers).unwrap_or_default();
        if id.is_empty() {
            warn!("grade row skipped, missing student_id: '{line}'");
            stats.rows_skipped += 1;
            continue;
        }

        let update = match grade_update(line, &headers) {
            Ok(update) => update,
            Err(e) => {
                warn!("grade row for '{id}' skipped: {e}");
                stats.rows_skipped += 1;
                continue;
            }
        };

        match registry.set_grades(id, update) {
            Ok(()) => stats.grades_applied += 1,
            Err(e) => {
                warn!("grade row for '{id}' skipped: {e}");
                stats.rows_skipped += 1;
            }
        }
    }

    Ok(())
}

/// Build a full grade update from a CSV row, substituting zero for blanks.
fn grade_update(line: &str, headers: &[String]) -> Result<GradeUpdate, Box<dyn Error>> {
    let component = |field: &'static str, header: &str| -> Result<f64, Box<dyn Error>> {
        match get_field(line, header, headers) {
            None => Ok(0.0),
            Some(cell) if cell.is_empty() => Ok(0.0),
            Some(cell) => Ok(parse_score(field, cell)?),
        }
    };

    Ok(GradeUpdate::full(
        component("quiz", "quiz")?,
        component("assignment", "assignment")?,
        component("midterm", "mid")?,
        component("final", "final")?,
    ))
}
