pub mod analytics;
pub mod deadlines;
pub mod progress;
pub mod setup;
