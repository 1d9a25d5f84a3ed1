//! Command-line interface for csgo-essentials.

mod commands;

use clap::{Parser, Subcommand};

/// csgo-essentials - CS:GO community content backend
/// Users, articles, lineup videos and maps over a JSON API
#[derive(Parser)]
#[command(name = "csgo-essentials")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server (default)
    #[command(alias = "web")]
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// List registered users
    Users,

    /// List maps with their video counts
    Maps,
}

pub use commands::*;
