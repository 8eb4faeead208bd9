// src/widget/mod.rs

//! The command poller widget.
//!
//! A widget exposes three entry points to its host:
//! - `tick` runs (or starts) the configured command,
//! - `render` returns the text to display,
//! - `severity` returns the display state.
//!
//! The pure classification rules live in [`state`] so they can be tested
//! without spawning processes.

pub mod command;
pub mod state;

pub use command::CommandWidget;
pub use state::{
    display_text, severity_of, Severity, CRITICAL_PREFIX, PENDING_TEXT, PLACEHOLDER_TEXT,
    WARNING_PREFIX,
};
