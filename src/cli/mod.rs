//! CLI module
//!
//! Command-line interface for calling the open platform.
//!
//! # Commands
//!
//! - `request` - Send one request and print the response envelope
//! - `pages` - Walk a cursor-paginated endpoint, one JSON line per page

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, RequestArgs};
pub use runner::Runner;
