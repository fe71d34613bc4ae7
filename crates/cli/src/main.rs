//! CAF worker configuration tool.
//!
//! Responsibilities:
//! - Resolve the worker configuration from the process environment.
//! - Print it, or just validate it, for operators and deployment scripts.
//!
//! Does NOT handle:
//! - Running a worker; the configuration is consumed by the worker runtime.
//!
//! Invariants:
//! - `load_dotenv()` runs before resolution so `.env` values are visible to it.
//! - Logs go to stderr; stdout carries only the rendered configuration.

mod args;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use caf_worker_config::{
    ProcessEnv, WorkerConfigurationBuilder, WorkerIdentity, worker_identity,
};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use formatters::format_configuration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}

fn identity(cli: &Cli) -> Result<WorkerIdentity> {
    let manifest = worker_identity!()?;
    let name = cli
        .worker_name
        .clone()
        .unwrap_or_else(|| manifest.name().to_string());
    let version = cli
        .worker_version
        .clone()
        .unwrap_or_else(|| manifest.version().to_string());
    Ok(WorkerIdentity::new(name, version)?)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let identity = identity(&cli)?;

    let config = WorkerConfigurationBuilder::new(identity)
        .load_dotenv()?
        .from_env(&ProcessEnv)?
        .build()
        .context("Failed to resolve worker configuration")?;

    tracing::info!(
        worker = %config.worker_name,
        output_queue = %config.output_queue,
        threads = config.threads,
        "Worker configuration resolved"
    );

    match cli.command {
        Commands::Show { format } => {
            let rendered = format_configuration(&config, format)?;
            if rendered.ends_with('\n') {
                print!("{rendered}");
            } else {
                println!("{rendered}");
            }
        }
        Commands::Check => {
            println!("Worker configuration for {} is valid", config.worker_name);
        }
    }

    Ok(ExitCode::Success)
}
