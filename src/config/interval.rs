// src/config/interval.rs

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

/// Longest accepted interval. Anything above it is a config error.
pub const MAX_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// An interval as written in the config file.
///
/// Either a bare number of seconds (`interval = 5`) or a duration string with
/// a unit suffix (`interval = "250ms"`, `"10s"`, `"5m"`, `"1h"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntervalSpec {
    Seconds(u64),
    Text(String),
}

impl IntervalSpec {
    /// Resolve to a `Duration`. Zero-length intervals and intervals longer
    /// than [`MAX_INTERVAL`] are rejected.
    pub fn to_duration(&self) -> Result<Duration, String> {
        let dur = match self {
            IntervalSpec::Seconds(secs) => Duration::from_secs(*secs),
            IntervalSpec::Text(s) => parse_interval(s)?,
        };

        if dur.is_zero() {
            return Err(format!("interval must be greater than zero (got {self})"));
        }
        if dur > MAX_INTERVAL {
            return Err(format!("interval too large (got {self}, max 24h)"));
        }
        Ok(dur)
    }
}

impl fmt::Display for IntervalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalSpec::Seconds(secs) => write!(f, "{secs}"),
            IntervalSpec::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Parse a simple duration string like `"3s"`, `"250ms"`, `"1m"`, `"2h"`.
///
/// A string of bare digits (`"5"`) is read as seconds.
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty interval string".to_string());
    }

    let idx = s
        .chars()
        .position(|c| !c.is_ascii_digit())
        .unwrap_or(s.len());

    let (num_part, unit_part) = s.split_at(idx);
    let value: u64 = num_part
        .parse()
        .map_err(|e| format!("invalid interval number '{}': {}", num_part, e))?;
    let unit = unit_part.trim().to_lowercase();

    match unit.as_str() {
        "ms" => Ok(Duration::from_millis(value)),
        "" | "s" => Ok(Duration::from_secs(value)),
        "m" => scaled_secs(value, 60),
        "h" => scaled_secs(value, 60 * 60),
        _ => Err(format!(
            "unsupported interval unit '{}'; expected ms, s, m, or h",
            unit
        )),
    }
}

fn scaled_secs(value: u64, factor: u64) -> Result<Duration, String> {
    value
        .checked_mul(factor)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("interval too large: {value} x {factor}s"))
}
