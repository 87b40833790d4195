use super::advisory::Advisory;
use serde::Serialize;
use std::fmt;

/// Aggregate analysis of every logged night, ready to print.
///
/// Rendering is deterministic: the same log always produces the same string.
#[derive(Debug, Clone, Serialize)]
pub struct SleepReport {
    pub nights: usize,
    pub avg_sleep: f64,
    /// Sample standard deviation (N-1); None with fewer than two nights.
    pub std_sleep: Option<f64>,
    pub total_debt: f64,
    pub duration_advice: Advisory,
    pub consistency_advice: Advisory,
}

impl fmt::Display for SleepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nights logged: {}", self.nights)?;
        writeln!(f, "Average Sleep: {:.2} hrs", self.avg_sleep)?;
        writeln!(f, "Total Sleep Debt: {:.2} hrs", self.total_debt)?;
        match self.std_sleep {
            Some(sd) => writeln!(f, "Consistency (std dev): {:.2} hrs", sd)?,
            None => writeln!(f, "Consistency (std dev): --")?,
        }
        writeln!(f, "{}", self.duration_advice)?;
        write!(f, "{}", self.consistency_advice)
    }
}
