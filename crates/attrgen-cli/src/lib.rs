//! CLI library components for the attribute table generator.

pub mod commands;
pub mod logging;
pub mod types;
