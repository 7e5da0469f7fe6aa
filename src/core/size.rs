const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Format a byte count in the largest 1024-based unit that keeps the value
/// under 1024, with two decimals. TB is the largest unit used.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}
