// src/logging.rs

//! Logging setup for `shellbar` using `tracing` + `tracing-subscriber`.
//!
//! The filter is scoped to this crate: `--log-level debug` turns on
//! shellbar's own debug output (one line per widget command) while other
//! crates stay at `warn`.
//!
//! Resolution order:
//! 1. `--log-level` CLI flag
//! 2. `SHELLBAR_LOG`, either a bare level (`debug`) or full `EnvFilter`
//!    directives (`shellbar::exec=trace,shellbar::bar=info`)
//! 3. `shellbar=info`
//!
//! Everything goes to stderr. Stdout carries the bar line and nothing else,
//! so it can be piped straight into a status bar.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable consulted when no `--log-level` is given.
pub const LOG_ENV_VAR: &str = "SHELLBAR_LOG";

const CRATE_TARGET: &str = "shellbar";

/// Initialise the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(cli_level, env_value.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(())
}

/// Pick the filter directives for the given flag and `SHELLBAR_LOG` value.
fn filter_directives(cli_level: Option<LogLevel>, env_value: Option<&str>) -> String {
    if let Some(lvl) = cli_level {
        return crate_scoped(level_name(lvl));
    }

    match env_value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => match parse_level_str(value) {
            Some(level) => crate_scoped(level),
            None => value.to_string(),
        },
        None => crate_scoped("info"),
    }
}

fn build_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> Result<EnvFilter> {
    let directives = filter_directives(cli_level, env_value);
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow!("invalid {LOG_ENV_VAR} value '{directives}': {e}"))
}

fn crate_scoped(level: &str) -> String {
    format!("warn,{CRATE_TARGET}={level}")
}

fn level_name(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

fn parse_level_str(s: &str) -> Option<&'static str> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some("error"),
        "warn" | "warning" => Some("warn"),
        "info" => Some("info"),
        "debug" => Some("debug"),
        "trace" => Some("trace"),
        _ => None,
    }
}
