use napmap::config::Config;
use napmap::core::{Analyzer, SleepLog};
use napmap::errors::AppError;
use napmap::models::Advisory;

fn log_of(nights: &[(&str, &str, &str)]) -> SleepLog {
    let mut log = SleepLog::new();
    for (d, s, w) in nights {
        log.add_entry(d, s, w).expect("valid entry");
    }
    log
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_mean_debt_and_std() {
    // 6h and 8h nights: mean 7.0, sample std sqrt(2), debt 2.0 + 0.0
    let log = log_of(&[
        ("2025-01-01", "00:00", "06:00"),
        ("2025-01-02", "23:00", "07:00"),
    ]);
    let report = Analyzer::build_report(&log, &Config::default()).unwrap();

    assert_eq!(report.nights, 2);
    assert!(approx(report.avg_sleep, 7.0));
    assert!(approx(report.total_debt, 2.0));
    assert!(approx(report.std_sleep.unwrap(), 2.0_f64.sqrt()));
}

#[test]
fn test_debt_never_negative() {
    // Every night above target: total debt stays at zero
    let log = log_of(&[
        ("2025-01-01", "22:00", "08:00"),
        ("2025-01-02", "21:00", "08:00"),
    ]);
    let report = Analyzer::build_report(&log, &Config::default()).unwrap();
    assert!(approx(report.total_debt, 0.0));
}

#[test]
fn test_boundary_averages_are_healthy() {
    // Strict thresholds: exactly 7.0 and exactly 9.0 are both healthy
    let seven = log_of(&[("2025-01-01", "00:00", "07:00")]);
    let nine = log_of(&[("2025-01-01", "22:00", "07:00")]);
    let cfg = Config::default();

    let r7 = Analyzer::build_report(&seven, &cfg).unwrap();
    let r9 = Analyzer::build_report(&nine, &cfg).unwrap();
    assert_eq!(r7.duration_advice, Advisory::HealthyDuration);
    assert_eq!(r9.duration_advice, Advisory::HealthyDuration);
}

#[test]
fn test_short_sleep_and_oversleep_classification() {
    let short = log_of(&[("2025-01-01", "02:00", "07:00")]);
    let over = log_of(&[("2025-01-01", "21:00", "07:00")]);
    let cfg = Config::default();

    let rs = Analyzer::build_report(&short, &cfg).unwrap();
    let ro = Analyzer::build_report(&over, &cfg).unwrap();
    assert_eq!(rs.duration_advice, Advisory::ShortSleep);
    assert!(rs.duration_advice.is_warning());
    assert_eq!(ro.duration_advice, Advisory::Oversleep);
}

#[test]
fn test_inconsistent_schedule_detected() {
    // 4h and 10h: std dev well above the 1.5h threshold
    let log = log_of(&[
        ("2025-01-01", "03:00", "07:00"),
        ("2025-01-02", "21:00", "07:00"),
    ]);
    let report = Analyzer::build_report(&log, &Config::default()).unwrap();
    assert_eq!(report.consistency_advice, Advisory::InconsistentSchedule);
}

#[test]
fn test_single_night_withholds_consistency_verdict() {
    let log = log_of(&[("2025-01-01", "23:00", "07:00")]);
    let report = Analyzer::build_report(&log, &Config::default()).unwrap();

    assert!(report.std_sleep.is_none());
    assert_eq!(report.consistency_advice, Advisory::TooFewNights);
    assert!(report.to_string().contains("Consistency (std dev): --"));
}

#[test]
fn test_report_is_idempotent() {
    let log = log_of(&[
        ("2025-01-01", "23:00", "07:00"),
        ("2025-01-02", "23:30", "06:15"),
    ]);
    let cfg = Config::default();

    let first = Analyzer::build_report(&log, &cfg).unwrap().to_string();
    let second = Analyzer::build_report(&log, &cfg).unwrap().to_string();
    assert_eq!(first, second);
}

#[test]
fn test_empty_log_yields_no_records_error() {
    let log = SleepLog::new();
    let err = Analyzer::build_report(&log, &Config::default()).unwrap_err();
    assert!(matches!(err, AppError::NoRecords));
}

#[test]
fn test_report_values_rounded_to_two_decimals() {
    // 7h40m -> 7.666... renders as 7.67
    let log = log_of(&[("2025-01-01", "23:20", "07:00")]);
    let report = Analyzer::build_report(&log, &Config::default()).unwrap();
    let text = report.to_string();
    assert!(text.contains("Average Sleep: 7.67 hrs"));
    assert!(text.contains("Total Sleep Debt: 0.33 hrs"));
}
