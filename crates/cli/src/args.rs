//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not resolve configuration (see `main`).
//! - Worker queue and batching settings are deliberately not flags; they come
//!   only from the CAF_WORKER_* environment variables.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "caf-worker-config")]
#[command(about = "Resolve CAF worker configuration from the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  caf-worker-config show\n  CAF_WORKER_BASE_QUEUE_NAME=lookup caf-worker-config show --format text\n  caf-worker-config --worker-name lookup-worker --worker-version 1.0.0 check\n"
)]
pub struct Cli {
    /// Worker name fixed at build time (defaults to this tool's package name)
    #[arg(long, global = true)]
    pub worker_name: Option<String>,

    /// Worker version fixed at build time (defaults to this tool's package version)
    #[arg(long, global = true)]
    pub worker_version: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved worker configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Resolve the configuration and report only whether it is valid
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
