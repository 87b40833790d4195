pub mod analyzer;
pub mod charts;
pub mod stats;
pub mod store;

pub use analyzer::Analyzer;
pub use store::SleepLog;
