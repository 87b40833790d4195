use serde::Serialize;
use std::fmt;

/// Fixed-threshold classification of a computed statistic into a warning or
/// a confirmation line of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advisory {
    ShortSleep,
    Oversleep,
    HealthyDuration,
    InconsistentSchedule,
    ConsistentTiming,
    /// Fewer than two nights logged: the std-dev is undefined, so the
    /// consistency verdict is withheld instead of reporting NaN.
    TooFewNights,
}

impl Advisory {
    pub fn is_warning(&self) -> bool {
        matches!(self, Advisory::ShortSleep | Advisory::Oversleep | Advisory::InconsistentSchedule)
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = match self {
            Advisory::ShortSleep => {
                "⚠️ You're averaging less than 7 hours of sleep. Try going to bed earlier."
            }
            Advisory::Oversleep => "😴 You're oversleeping. Monitor fatigue levels.",
            Advisory::HealthyDuration => "✅ Your sleep duration is healthy.",
            Advisory::InconsistentSchedule => {
                "⚠️ Your sleep schedule is inconsistent. Try to fix a regular bedtime."
            }
            Advisory::ConsistentTiming => "✅ Your sleep timing is consistent.",
            Advisory::TooFewNights => {
                "ℹ️ Log at least two nights to judge how consistent your timing is."
            }
        };
        f.write_str(line)
    }
}
