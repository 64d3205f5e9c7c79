//! CLI library components for the price-list comparison tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod types;
