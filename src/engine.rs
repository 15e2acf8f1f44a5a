//! The learning progress and scoring engine: pure functions from one snapshot of a
//! class to the next. Nothing in here performs I/O or reads the clock.

pub mod analytics;
pub mod balancer;
pub mod config;
pub mod deadline;
pub mod gamification;
pub mod pipeline;
pub mod progress;
pub mod project;
