//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing`, so stdout carries report lines only.

use std::{env, io};

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable holding a filter directive, e.g. `FITNESS_LOG=debug`.
pub const LOG_ENV: &str = "FITNESS_LOG";

/// Filter used when neither the environment nor the config sets one.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Pick the filter directive: environment first, then config, then the default.
///
/// Empty values are treated as unset.
pub fn resolve_directive(from_env: Option<&str>, from_config: Option<&str>) -> String {
    from_env
        .filter(|s| !s.trim().is_empty())
        .or(from_config.filter(|s| !s.trim().is_empty()))
        .unwrap_or(DEFAULT_DIRECTIVE)
        .to_string()
}

/// Install the global subscriber. Call once, before any work is done.
pub fn init(config: &Config) {
    let from_env = env::var(LOG_ENV).ok();
    let directive = resolve_directive(from_env.as_deref(), config.log_level.as_deref());

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter '{directive}': {e}");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
