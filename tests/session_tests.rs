use predicates::str::contains;

mod common;
use common::session;

#[test]
fn test_add_and_report_same_day() {
    // 23:00 -> 07:00 crosses midnight: exactly 8 hours
    session("add 2025-01-01 23:00 07:00\nreport\nquit\n")
        .success()
        .stdout(contains("Logged 2025-01-01: 23:00 -> 07:00 (08h 00m slept)"))
        .stdout(contains("Average Sleep: 8.00 hrs"))
        .stdout(contains("Total Sleep Debt: 0.00 hrs"));
}

#[test]
fn test_rollover_applies_when_wake_precedes_sleep() {
    // 01:00 -> 00:30 wraps to the next day: 23.5 hours
    session("add 2025-01-01 01:00 00:30\nlist\nquit\n")
        .success()
        .stdout(contains("23h 30m slept"))
        .stdout(contains("23.50"));
}

#[test]
fn test_report_on_empty_log_warns() {
    session("report\nquit\n")
        .success()
        .stdout(contains("No sleep records yet"));
}

#[test]
fn test_malformed_time_leaves_table_unchanged() {
    session("add 2025-01-01 25:99 07:00\nlist\nquit\n")
        .success()
        .stdout(contains("No sleep records yet"))
        .stderr(contains("Invalid time format: 25:99"));
}

#[test]
fn test_malformed_date_is_reported() {
    session("add 2025-13-40 23:00 07:00\nquit\n")
        .success()
        .stderr(contains("Invalid date format: 2025-13-40"));
}

#[test]
fn test_average_of_exactly_seven_hours_is_healthy() {
    // Strict threshold: avg == 7.0 must land in the healthy branch
    let script = "add 2025-01-01 23:00 06:00\nadd 2025-01-02 23:00 06:00\nreport\nquit\n";
    session(script)
        .success()
        .stdout(contains("Average Sleep: 7.00 hrs"))
        .stdout(contains("Your sleep duration is healthy."));
}

#[test]
fn test_short_sleep_warning() {
    let script = "add 2025-01-01 02:00 07:00\nadd 2025-01-02 02:00 07:00\nreport\nquit\n";
    session(script)
        .success()
        .stdout(contains("averaging less than 7 hours"));
}

#[test]
fn test_trend_and_heatmap_render() {
    let script = "add 2025-01-01 23:00 07:00\ntrend\nheatmap\nquit\n";
    session(script)
        .success()
        .stdout(contains("Daily Sleep Duration (target 8.0 hrs)"))
        .stdout(contains("Sleep and Wake Times Heatmap"))
        .stdout(contains("2025-01-01"));
}

#[test]
fn test_trend_on_empty_log_warns() {
    session("trend\nheatmap\nquit\n")
        .success()
        .stdout(contains("No sleep records yet"));
}

#[test]
fn test_unknown_command_keeps_session_alive() {
    session("frobnicate\nadd 2025-01-01 23:00 07:00\nlist\nquit\n")
        .success()
        .stdout(contains("Unknown command 'frobnicate'"))
        .stdout(contains("2025-01-01"));
}

#[test]
fn test_add_usage_hint_on_wrong_arity() {
    session("add 2025-01-01 23:00\nquit\n")
        .success()
        .stdout(contains("Usage: add"));
}
