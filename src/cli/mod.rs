//! CLI module for the Smart Notes API
//!
//! Provides subcommands for running the service and for exercising the
//! extraction pipeline offline:
//! - `serve`: run the HTTP API
//! - `extract`: decode a local document and print its text

pub mod extract;
pub mod serve;

use clap::{Parser, Subcommand};

/// Smart Notes API - document analysis backend
#[derive(Parser)]
#[command(name = "smart-notes-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Extract plain text from a local document
    Extract(extract::ExtractArgs),
}
