// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Only configuration loading and the binary surface return these. The
//! widget itself never surfaces an error to the host: execution failures are
//! folded into the rendered state instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellbarError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ShellbarError>;
