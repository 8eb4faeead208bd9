// src/config/mod.rs

//! Configuration loading and validation for shellbar.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Parse interval values (`interval.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Turn the raw model into the validated one (`validate.rs`).

pub mod interval;
pub mod loader;
pub mod model;
pub mod validate;

pub use interval::{parse_interval, IntervalSpec, MAX_INTERVAL};
pub use loader::{default_config_path, load_and_validate, load_from_path, parse_and_validate};
pub use model::{
    BarConfig, BarSection, ConfigFile, RawConfigFile, RawWidgetConfig, WidgetConfig,
    DEFAULT_COMMAND,
};
