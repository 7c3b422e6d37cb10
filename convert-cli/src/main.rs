//! Binary crate for the `convert` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive menus and configuration
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod menu;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
