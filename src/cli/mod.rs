// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::{CliCommand, GenerationArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords with a strength indicator", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
