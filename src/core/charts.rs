//! Chart data preparation.
//!
//! The core hands these tabular structures to the terminal renderer in
//! `ui::charts`; it knows nothing about how they are drawn.

use crate::config::Config;
use crate::core::store::SleepLog;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub hours: f64,
}

/// Per-night sleep duration series with the target line.
#[derive(Debug, Clone)]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
    pub target_hours: f64,
}

/// One heatmap row: bedtime and wake time as fractional hour of day.
#[derive(Debug, Clone)]
pub struct HeatmapRow {
    pub date: NaiveDate,
    pub bedtime_hour: f64,
    pub wake_hour: f64,
}

pub fn trend_series(log: &SleepLog, cfg: &Config) -> AppResult<TrendSeries> {
    if log.is_empty() {
        return Err(AppError::NoRecords);
    }

    let points = log
        .records()
        .iter()
        .map(|r| TrendPoint {
            date: r.date,
            hours: r.sleep_hours,
        })
        .collect();

    Ok(TrendSeries {
        points,
        target_hours: cfg.target_hours,
    })
}

pub fn heatmap_rows(log: &SleepLog) -> AppResult<Vec<HeatmapRow>> {
    if log.is_empty() {
        return Err(AppError::NoRecords);
    }

    Ok(log
        .records()
        .iter()
        .map(|r| HeatmapRow {
            date: r.date,
            bedtime_hour: r.bedtime_hour(),
            wake_hour: r.wake_hour(),
        })
        .collect())
}
