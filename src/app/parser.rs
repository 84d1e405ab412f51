// Turns the `brew services list` report into service records.

use super::model::ServiceStatus;

/// Parses the full text of `brew services list`.
///
/// The first line is a column header and is always dropped. Every other line
/// is split on whitespace and read positionally: name, status, user, file.
/// Missing columns fall back to `"none"` for the status and `""` otherwise,
/// and anything past the fourth column is ignored. Fields containing
/// whitespace are not supported; brew does not quote them.
pub fn parse_service_list(report: &str) -> Vec<ServiceStatus> {
    let mut lines = report.trim().lines();

    // Header row
    if lines.next().is_none() {
        return Vec::new();
    }

    lines
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let name = parts.next()?;

            Some(ServiceStatus {
                name: name.to_string(),
                status: parts.next().unwrap_or("none").to_string(),
                owner: parts.next().unwrap_or_default().to_string(),
                definition_file: parts.next().unwrap_or_default().to_string(),
            })
        })
        .collect()
}
