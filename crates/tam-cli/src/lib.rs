//! Treatment age monitor CLI library.
//!
//! This crate provides the CLI interface for the treatment age monitor.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
