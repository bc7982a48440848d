//! Hookstep CLI - resolve failure labels for hook steps in a test report.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hookstep_core::{resolve, InMemoryReport, Step, StepId};

mod config;
mod output;

use config::{level_for_verbosity, Config, OutputFormat};

/// Hookstep CLI - hook step failure labels
#[derive(Parser)]
#[command(name = "hookstep")]
#[command(about = "Resolve failure labels for hook steps in a test report", long_about = None)]
struct Cli {
    /// Report file (JSON)
    #[arg(short, long)]
    report: PathBuf,

    /// Step ID to resolve; every step in the report when omitted
    #[arg(short, long)]
    step: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            report_path: cli.report,
            step_id: cli.step.map(StepId::from),
            format: cli.format,
            log_level: level_for_verbosity(cli.verbose),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from(Cli::parse());

    // Logs go to stderr so stdout stays parseable
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level).into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())
}

fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        report = %config.report_path.display(),
        step_id = ?config.step_id,
        "Resolving hook steps"
    );

    let report = InMemoryReport::load(&config.report_path)?;
    let steps: Vec<&Step> = match &config.step_id {
        Some(step_id) => vec![report.require_step(step_id)?],
        None => report.steps().iter().collect(),
    };

    for step in steps {
        let label = resolve(&report, step);
        output::write_label(out, &step.id, &label, config.format)?;
    }
    Ok(())
}
