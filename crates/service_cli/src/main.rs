//! parity-demo - Put-Call-Forward Parity Demonstration
//!
//! Builds an equity together with a call, a put and a forward on it, prints
//! each of them and checks that `C - P - F` vanishes.
//!
//! # Commands
//!
//! - `parity-demo` / `parity-demo parity` - Print the scenario and the parity residual
//! - `parity-demo price --instrument <call|put|forward>` - Price one instrument
//!
//! # Configuration
//!
//! The scenario starts from built-in defaults, or from `--config <file>` when
//! given, then is overridden by `PARITY_*` environment variables and finally
//! by the `--spot`, `--strike`, `--volatility`, `--rate` and `--expiry` flags.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{ScenarioConfig, ScenarioOverrides};

/// Put-call-forward parity demonstration
#[derive(Parser)]
#[command(name = "parity-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scenario configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ScenarioOverrides,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price call, put and forward and check their parity (default)
    Parity {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Price a single instrument
    Price {
        /// Instrument type (call, put, forward)
        #[arg(short, long)]
        instrument: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn init_tracing(log_level: &str, verbose: bool) {
    let default_directive = if verbose {
        "debug".to_string()
    } else {
        log_level.to_lowercase()
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = ScenarioConfig::resolve(cli.config.as_deref(), &cli.overrides)?;
    init_tracing(&config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => commands::parity::run(&config, "text", &mut out),
        Some(Commands::Parity { format }) => commands::parity::run(&config, &format, &mut out),
        Some(Commands::Price { instrument, format }) => {
            commands::price::run(&config, &instrument, &format, &mut out)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
