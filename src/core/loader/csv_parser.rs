//! CSV field helpers for roster data
//!
//! Roster files are plain comma-separated text with a single header line;
//! fields are addressed by header name so column order doesn't matter.

/// Parse a CSV line into trimmed fields
pub(crate) fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .map(std::string::ToString::to_string)
        .collect()
}

/// Get a field value from a CSV line by header name
pub(crate) fn get_field<'a>(line: &'a str, header_name: &str, headers: &[String]) -> Option<&'a str> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(header_name))
        .and_then(|idx| fields.get(idx))
        .copied()
}

/// Positions of the attendance week columns (headers starting with "week")
pub(crate) fn week_columns(headers: &[String]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.to_lowercase().starts_with("week"))
        .map(|(idx, _)| idx)
        .collect()
}
