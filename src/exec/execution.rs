// src/exec/execution.rs

/// Status recorded when the shell itself could not be started.
///
/// Mirrors the shell's own "command not found" code so that a launch failure
/// renders as a number and is classified critical like any other failure.
pub const LAUNCH_FAILURE_STATUS: i32 = 127;

/// Outcome of one completed command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Process exit code (0 on success).
    pub status: i32,
    /// Combined stdout/stderr, trailing whitespace removed.
    pub output: String,
}

impl Execution {
    /// Build an execution from raw captured text; trailing whitespace is
    /// trimmed here so every producer stores the same shape.
    pub fn new(status: i32, output: impl AsRef<str>) -> Self {
        Self {
            status,
            output: output.as_ref().trim_end().to_string(),
        }
    }

    /// Fold a launch error into a result the widget can display.
    pub fn launch_failure(err: &anyhow::Error) -> Self {
        Self::new(LAUNCH_FAILURE_STATUS, format!("{err:#}"))
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }
}
