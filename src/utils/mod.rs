pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

// Re-export the helpers used all over the CLI layer
pub use formatting::hours2readable;
