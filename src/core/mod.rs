//! Core modules: configuration, the record store, and shared helpers.

pub mod config;
pub mod envelope;
pub mod error;
pub mod output;
pub mod record;
pub mod store;
pub mod tui;
