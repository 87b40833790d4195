//! Formatting utilities used for CLI outputs.

/// Fractional hours rendered as "07h 30m".
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    format!("{:02}h {:02}m", h, m)
}
