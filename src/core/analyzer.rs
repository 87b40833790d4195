use crate::config::Config;
use crate::core::stats;
use crate::core::store::SleepLog;
use crate::errors::{AppError, AppResult};
use crate::models::{Advisory, SleepReport};

pub struct Analyzer;

impl Analyzer {
    /// Run the aggregate analysis over every record in the log.
    ///
    /// Thresholds come from the config; the defaults classify an average
    /// below 7h as short sleep, above 9h as oversleeping (both strict
    /// inequalities, so exactly 7.0 or 9.0 is still healthy), and a std-dev
    /// above 1.5h as an inconsistent schedule.
    pub fn build_report(log: &SleepLog, cfg: &Config) -> AppResult<SleepReport> {
        if log.is_empty() {
            return Err(AppError::NoRecords);
        }

        let hours: Vec<f64> = log.records().iter().map(|r| r.sleep_hours).collect();

        let avg_sleep = stats::mean(&hours);
        let std_sleep = stats::sample_std(&hours);
        let total_debt: f64 = hours
            .iter()
            .map(|&h| stats::sleep_debt(h, cfg.target_hours))
            .sum();

        let duration_advice = if avg_sleep < cfg.short_sleep_threshold {
            Advisory::ShortSleep
        } else if avg_sleep > cfg.oversleep_threshold {
            Advisory::Oversleep
        } else {
            Advisory::HealthyDuration
        };

        let consistency_advice = match std_sleep {
            Some(sd) if sd > cfg.consistency_threshold => Advisory::InconsistentSchedule,
            Some(_) => Advisory::ConsistentTiming,
            None => Advisory::TooFewNights,
        };

        Ok(SleepReport {
            nights: log.len(),
            avg_sleep,
            std_sleep,
            total_debt,
            duration_advice,
            consistency_advice,
        })
    }
}
