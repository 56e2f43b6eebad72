//! CLI module
//!
//! Provides the `serve` subcommand running the API and chat page combined.

pub mod serve;

use clap::{Parser, Subcommand};

/// docuchat - RAG chat over uploaded PDF documents
#[derive(Parser)]
#[command(name = "docuchat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API + chat UI server
    Serve,
}
