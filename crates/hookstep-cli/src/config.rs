//! CLI configuration.

use std::path::PathBuf;

use clap::ValueEnum;
use hookstep_core::StepId;
use tracing::Level;

/// How resolved labels are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<step-id>: <label>` line per step.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Report file to read.
    pub report_path: PathBuf,

    /// Step to resolve. `None` resolves every step in the report.
    pub step_id: Option<StepId>,

    /// Output format.
    pub format: OutputFormat,

    /// Default log level when `RUST_LOG` is unset.
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from("report.json"),
            step_id: None,
            format: OutputFormat::Text,
            log_level: Level::WARN,
        }
    }
}

/// Map `-v` occurrences to a log level.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
