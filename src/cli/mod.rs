//! CLI module for Planboard

pub mod serve;

use clap::{Parser, Subcommand};

/// Planboard - epic and team planning tracker
#[derive(Parser)]
#[command(name = "planboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
