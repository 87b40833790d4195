use crate::errors::AppResult;
use crate::models::SleepRecord;
use crate::utils::{date, time};

/// Append-only, in-memory table of sleep records.
///
/// One log lives for the duration of a session and is dropped on exit;
/// nothing is persisted. Duplicate dates are allowed and simply accumulate.
#[derive(Debug, Default)]
pub struct SleepLog {
    records: Vec<SleepRecord>,
}

impl SleepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and append one entry.
    ///
    /// All three fields are parsed before anything is stored, so a malformed
    /// date or time leaves the log exactly as it was.
    pub fn add_entry(&mut self, date: &str, sleep: &str, wake: &str) -> AppResult<SleepRecord> {
        let d = date::parse_entry_date(date)?;
        let s = time::parse_time_strict(sleep)?;
        let w = time::parse_time_strict(wake)?;

        let record = SleepRecord::new(d, s, w);
        self.records.push(record.clone());
        Ok(record)
    }

    pub fn records(&self) -> &[SleepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
