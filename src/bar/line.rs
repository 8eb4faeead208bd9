// src/bar/line.rs

use crate::widget::{Severity, CRITICAL_PREFIX, WARNING_PREFIX};

/// Resets colours after a highlighted segment.
pub const RESET: &str = "\x1b[0m";

/// Wrap `text` in the colour for `severity`. Normal text is left as is.
pub fn colorize(text: &str, severity: Severity) -> String {
    match severity {
        Severity::Normal => text.to_string(),
        Severity::Warning => format!("{WARNING_PREFIX}{text}{RESET}"),
        Severity::Critical => format!("{CRITICAL_PREFIX}{text}{RESET}"),
    }
}

/// Join rendered segments with `separator`, colouring each when `color` is set.
pub fn join_segments<I>(segments: I, separator: &str, color: bool) -> String
where
    I: IntoIterator<Item = (String, Severity)>,
{
    segments
        .into_iter()
        .map(|(text, severity)| {
            if color {
                colorize(&text, severity)
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}
