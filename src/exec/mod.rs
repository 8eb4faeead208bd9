// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs a widget's command through the platform shell with
//! `tokio::process::Command` and hands back an [`Execution`].
//!
//! - [`shell`] spawns the shell, merges stdout/stderr and collects the exit
//!   code.
//! - [`runner`] provides the `CommandRunner` trait the widget talks to, and
//!   the production `ShellRunner`. Tests swap in a scripted runner.
//! - [`execution`] is the result value stored by widgets.

pub mod execution;
pub mod runner;
pub mod shell;

pub use execution::{Execution, LAUNCH_FAILURE_STATUS};
pub use runner::{CommandRunner, RunFuture, ShellRunner};
pub use shell::run_shell;
