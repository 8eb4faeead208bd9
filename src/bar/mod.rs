// src/bar/mod.rs

//! A minimal status-bar host.
//!
//! The host owns the polling loop the widgets rely on:
//! - [`schedule`] decides when each widget is due, honouring its interval,
//! - [`line`] joins rendered widgets into one status line,
//! - [`host`] drives the loop and writes lines to stdout.

pub mod host;
pub mod line;
pub mod schedule;

pub use host::Bar;
pub use line::{colorize, join_segments, RESET};
pub use schedule::ScheduledWidget;
