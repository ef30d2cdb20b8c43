//! Pacer terminal front end
//!
//! Usage:
//! ```bash
//! # Interactive: type `help` for the field list
//! pacer
//!
//! # Start in miles, solving for pace
//! pacer --unit miles --mode time-to-pace
//!
//! # Replay a script and print only the final form
//! pacer --script test-data/scripts/marathon_plan.yaml --quiet
//!
//! # Replay a script slowly enough to watch the form change
//! pacer --script test-data/scripts/custom_miles.yaml --step-delay 500
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pacer::render::render;
use pacer::{ActiveMode, CalculatorConfig, Pacer, Unit};

#[derive(Parser, Debug)]
#[command(name = "pacer", version, about = "Running pace calculator", long_about = None)]
struct Cli {
    /// YAML file describing the starting form
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Replay edits from a YAML script instead of reading stdin
    #[arg(long, short = 's')]
    script: Option<PathBuf>,

    /// Milliseconds to wait before each scripted step
    #[arg(long, value_name = "MS", default_value_t = 0, requires = "script")]
    step_delay: u64,

    /// Starting mode (pace-to-time or time-to-pace)
    #[arg(long)]
    mode: Option<ActiveMode>,

    /// Starting unit (km or miles)
    #[arg(long)]
    unit: Option<Unit>,

    /// Print only the final form
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "pacer=debug" } else { "pacer=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(unit) = cli.unit {
        config.unit = unit;
    }
    info!("Starting form: {:?}", config);

    let session = match &cli.script {
        Some(path) => Pacer::replay_paced(path, &config, Duration::from_millis(cli.step_delay))
            .await
            .with_context(|| format!("opening script {}", path.display()))?,
        None => {
            println!("Type 'help' for commands, 'quit' to exit.");
            Pacer::interactive(&config).await?
        }
    };

    if cli.quiet {
        let last = session.finished().await;
        print!("{}", render(&last));
    } else {
        let mut updates = session.updates();
        while let Some(state) = updates.next().await {
            println!("{}", render(&state));
        }
    }

    Ok(())
}
