pub mod advisory;
pub mod record;
pub mod report;

pub use advisory::Advisory;
pub use record::SleepRecord;
pub use report::SleepReport;
