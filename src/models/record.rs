use crate::utils::time::{fractional_hour, hours_between};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One logged night of sleep.
///
/// Both timestamps are anchored to `date`; when the wake clock time falls
/// before the sleep clock time the session crossed midnight and the wake
/// timestamp is advanced by one day. A single rollover only: sessions longer
/// than 24 hours cannot be expressed.
#[derive(Debug, Clone, Serialize)]
pub struct SleepRecord {
    pub date: NaiveDate,       // night the entry belongs to
    pub sleep_time: NaiveTime, // clock time as entered (HH:MM)
    pub wake_time: NaiveTime,
    pub sleep_at: NaiveDateTime,
    pub wake_at: NaiveDateTime,
    pub sleep_hours: f64, // derived, always >= 0
}

impl SleepRecord {
    pub fn new(date: NaiveDate, sleep_time: NaiveTime, wake_time: NaiveTime) -> Self {
        let sleep_at = date.and_time(sleep_time);
        let mut wake_at = date.and_time(wake_time);
        if wake_at < sleep_at {
            wake_at = wake_at + Duration::days(1);
        }

        Self {
            date,
            sleep_time,
            wake_time,
            sleep_at,
            wake_at,
            sleep_hours: hours_between(sleep_at, wake_at),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn sleep_time_str(&self) -> String {
        self.sleep_time.format("%H:%M").to_string()
    }

    pub fn wake_time_str(&self) -> String {
        self.wake_time.format("%H:%M").to_string()
    }

    /// Bedtime as fractional hour of day (23:30 -> 23.5), for the heatmap.
    pub fn bedtime_hour(&self) -> f64 {
        fractional_hour(self.sleep_time)
    }

    /// Wake time as fractional hour of day, for the heatmap.
    pub fn wake_hour(&self) -> f64 {
        fractional_hour(self.wake_time)
    }
}
