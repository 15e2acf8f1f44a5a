pub mod analytics;
pub mod badge;
pub mod records;
pub mod student;
pub mod team;
