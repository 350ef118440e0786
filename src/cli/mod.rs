//! CLI module
//!
//! Command-line interface over the media service.
//!
//! # Commands
//!
//! - `count` - Count HD and non-HD media items
//! - `list` - List cached media items by HD flag (requires `--cached`)

mod commands;
mod runner;

pub use commands::{Cli, Commands, OnError, OutputFormat};
pub use runner::Runner;
