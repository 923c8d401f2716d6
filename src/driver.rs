//! Driver: turn a sequence of packages into report lines.
//!
//! Packages are handled one at a time, in order. Each line is written as soon
//! as its report is built, and the first failure stops the run.

use std::io::{self, Write};

use serde::Deserialize;
use tracing::{debug, info};

use crate::dispatch::read_package;
use crate::model::{Package, WorkoutError};

/// How each report line is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// The human-readable summary sentence.
    #[default]
    Text,

    /// One compact JSON object per line.
    Json,
}

/// Errors that stop a run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("package {index}: {source}")]
    Workout {
        index: usize,
        #[source]
        source: WorkoutError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Dispatch, compute, and write every package. Returns how many were written.
pub fn process(
    packages: &[Package<'_>],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<usize, DriverError> {
    for (index, package) in packages.iter().enumerate() {
        let (workout, report) = read_package(package.tag, package.values)
            .and_then(|workout| workout.report().map(|report| (workout, report)))
            .map_err(|source| DriverError::Workout { index, source })?;

        debug!(
            workout = %workout.kind(),
            distance = report.distance,
            calories = report.calories,
            "computed report"
        );

        match format {
            OutputFormat::Text => writeln!(out, "{}", report.message())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
    }

    info!(count = packages.len(), "processed packages");
    Ok(packages.len())
}
