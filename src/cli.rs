//! CLI interface for the fitness tracker.
//!
//! Each subcommand is non-interactive: report lines go to stdout,
//! diagnostics to stderr.
//!
//! - `fitness` or `fitness report`: summarize the built-in sensor packages.
//! - `fitness types`: list the workout tags and their value layouts.

mod format;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::driver::{self, OutputFormat};
use crate::model::{DEMO_PACKAGES, WorkoutKind};

use format::format_kind;

/// Fitness tracker: distance, speed, and calories from workout sensor readings.
#[derive(Debug, Parser)]
#[command(name = "fitness", version)]
pub struct Cli {
    /// Config file to use instead of `~/.fitness/config.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `report` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one summary line per sensor package, in order.
    ///
    /// Stops at the first package that cannot be turned into a report.
    Report {
        /// Output format. Defaults to the configured format, then `text`.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// List supported workout tags and the values each expects.
    Types,
}

/// CLI-facing output format, mapped to the driver's `OutputFormat`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Human-readable summary sentence.
    Text,
    /// One JSON object per line.
    Json,
}

impl FormatArg {
    fn to_domain(self) -> OutputFormat {
        match self {
            Self::Text => OutputFormat::Text,
            Self::Json => OutputFormat::Json,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    match cli.command {
        None => cmd_report(config.format),
        Some(Command::Report { format }) => {
            cmd_report(format.map_or(config.format, FormatArg::to_domain))
        }
        Some(Command::Types) => {
            cmd_types();
            Ok(())
        }
    }
}

fn cmd_report(format: OutputFormat) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    driver::process(&DEMO_PACKAGES, format, &mut out).map_err(|e| e.to_string())?;
    Ok(())
}

fn cmd_types() {
    for kind in WorkoutKind::ALL {
        println!("{}", format_kind(kind));
    }
}
