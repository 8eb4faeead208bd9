// src/exec/runner.rs

//! Pluggable command runner abstraction.
//!
//! Widgets talk to a `CommandRunner` instead of spawning processes
//! directly. Production code uses [`ShellRunner`]; tests provide their own
//! implementation that returns scripted results, optionally gated so a run
//! can be held "in flight" for as long as the test needs.

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;

use crate::exec::execution::Execution;
use crate::exec::shell::run_shell;

/// Boxed future returned by [`CommandRunner::run`].
pub type RunFuture<'a> = Pin<Box<dyn Future<Output = Result<Execution>> + Send + 'a>>;

/// Executes a shell command line and reports its outcome.
///
/// `Err` means the command could not be launched at all. A command that ran
/// and failed is `Ok` with a non-zero status.
pub trait CommandRunner: Send + Sync {
    fn run<'a>(&'a self, command: &'a str) -> RunFuture<'a>;
}

/// Real runner: `sh -c` on Unix, `cmd /C` on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run<'a>(&'a self, command: &'a str) -> RunFuture<'a> {
        Box::pin(run_shell(command))
    }
}
