//! Caffeine timeline CLI library.
//!
//! This crate provides the CLI interface for the caffeine timeline engine.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, RowFields, SetCommand, parse_clock_time};
pub use config::Config;
