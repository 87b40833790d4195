/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Duration color against the nightly target:
/// at or above target -> green,
/// within one hour below -> yellow,
/// further below -> red.
pub fn color_for_hours(hours: f64, target: f64) -> &'static str {
    if hours >= target {
        GREEN
    } else if hours >= target - 1.0 {
        YELLOW
    } else {
        RED
    }
}
