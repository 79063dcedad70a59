//! CLI module
//!
//! Command-line interface for the records retriever.
//!
//! # Commands
//!
//! - `fetch` - Fetch and classify one page of records
//! - `url` - Print the request URL for a page (no network I/O)

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::{render_pretty, Runner};
