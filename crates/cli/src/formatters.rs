//! Output formatting for the resolved configuration.
//!
//! Responsibilities:
//! - Render a `WorkerConfiguration` as JSON or as aligned `key: value` text.
//!
//! Invariants:
//! - Absent optional fields are shown as "(not set)" in text and omitted in JSON,
//!   never rendered as zero.

use anyhow::Result;
use caf_worker_config::WorkerConfiguration;

use crate::args::OutputFormat;

pub fn format_configuration(config: &WorkerConfiguration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Text => Ok(format_text(config)),
    }
}

fn format_text(config: &WorkerConfiguration) -> String {
    fn or_unset<T: ToString>(value: Option<T>) -> String {
        value.map_or_else(|| "(not set)".to_string(), |v| v.to_string())
    }

    let rows = [
        ("Worker name", config.worker_name.clone()),
        ("Worker version", config.worker_version.clone()),
        ("Output queue", config.output_queue.clone()),
        ("Failure queue", or_unset(config.failure_queue.as_deref())),
        ("Threads", config.threads.to_string()),
        ("Max batch size", or_unset(config.max_batch_size)),
        (
            "Max batch time",
            or_unset(config.max_batch_time.map(|ms| format!("{ms} ms"))),
        ),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{label:<width$}  {value}\n"))
        .collect()
}
