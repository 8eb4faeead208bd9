// src/widget/state.rs

use std::fmt;

use crate::exec::Execution;

/// Yellow foreground escape. A command that starts its output with this
/// asks to be shown with warning severity.
pub const WARNING_PREFIX: &str = "\x1b[0;33m";

/// Red foreground escape. Leading it marks the output critical.
pub const CRITICAL_PREFIX: &str = "\x1b[0;31m";

/// Output of the default command; shown with warning severity.
pub const PLACEHOLDER_TEXT: &str = "no command configured";

/// Shown by async widgets until their first run completes.
pub const PENDING_TEXT: &str = "please wait...";

/// Display state derived from the last execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Nothing to flag.
    #[default]
    Normal,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an execution. First matching rule wins:
///
/// 1. output is exactly [`PLACEHOLDER_TEXT`] → warning
/// 2. output starts with [`WARNING_PREFIX`] → warning
/// 3. output starts with [`CRITICAL_PREFIX`] → critical
/// 4. status > 0 → critical
///
/// The prefix checks look at the raw output, so a command can report its own
/// severity. This ties display styling to classification, which is fragile,
/// but existing scripts depend on it.
pub fn severity_of(execution: &Execution) -> Severity {
    let output = execution.output.as_str();

    if output == PLACEHOLDER_TEXT || output.starts_with(WARNING_PREFIX) {
        return Severity::Warning;
    }
    if output.starts_with(CRITICAL_PREFIX) || execution.status > 0 {
        return Severity::Critical;
    }
    Severity::Normal
}

/// Text to display for an execution.
///
/// A successful run shows its output with any leading severity escapes
/// removed; a failed run shows only its exit status.
pub fn display_text(execution: &Execution) -> String {
    if execution.status != 0 {
        return execution.status.to_string();
    }

    let mut text = execution.output.as_str();
    loop {
        if let Some(rest) = text.strip_prefix(WARNING_PREFIX) {
            text = rest;
        } else if let Some(rest) = text.strip_prefix(CRITICAL_PREFIX) {
            text = rest;
        } else {
            break;
        }
    }
    text.to_string()
}
