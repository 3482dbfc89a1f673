//! Subsystems built on the core store.

pub mod creature;
pub mod report;
