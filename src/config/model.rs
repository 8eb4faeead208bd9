// src/config/model.rs

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::config::interval::IntervalSpec;

/// Command used when a widget does not configure one.
///
/// Its output is exactly the widget's placeholder text, so an unconfigured
/// widget shows the placeholder with warning severity.
pub const DEFAULT_COMMAND: &str = "echo \"no command configured\"";

/// Default widget polling interval (one host tick).
pub const DEFAULT_WIDGET_INTERVAL: Duration = Duration::from_secs(1);

/// Default host tick cadence.
pub const DEFAULT_BAR_INTERVAL: Duration = Duration::from_secs(1);

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [bar]
/// interval = 1
/// separator = " | "
///
/// [widget.load]
/// command = "cut -d' ' -f1 /proc/loadavg"
/// interval = "5s"
///
/// [widget.weather]
/// command = "curl -s 'https://wttr.in/London?format=%t'"
/// interval = "15m"
/// async = true
/// ```
///
/// This is the unvalidated form; convert it with
/// `ConfigFile::try_from(raw)` before use.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Host settings from `[bar]`.
    #[serde(default)]
    pub bar: BarSection,

    /// All widgets from `[widget.<name>]`, keyed by name.
    #[serde(default)]
    pub widget: BTreeMap<String, RawWidgetConfig>,
}

/// `[bar]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BarSection {
    /// How often the host loop ticks. Defaults to one second.
    #[serde(default)]
    pub interval: Option<IntervalSpec>,

    /// Text placed between rendered widgets.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Colour widget segments by severity.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_separator() -> String {
    " | ".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for BarSection {
    fn default() -> Self {
        Self {
            interval: None,
            separator: default_separator(),
            color: default_color(),
        }
    }
}

/// `[widget.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWidgetConfig {
    /// Shell command to run. Falls back to [`DEFAULT_COMMAND`].
    #[serde(default)]
    pub command: Option<String>,

    /// Polling interval; seconds or a duration string.
    #[serde(default)]
    pub interval: Option<IntervalSpec>,

    /// Run the command on a background task instead of blocking the tick.
    #[serde(default, rename = "async")]
    pub run_async: bool,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub bar: BarConfig,
    pub widgets: BTreeMap<String, WidgetConfig>,
}

impl ConfigFile {
    /// Build a `ConfigFile` without running validation. Prefer
    /// `ConfigFile::try_from(RawConfigFile)`.
    pub fn new_unchecked(bar: BarConfig, widgets: BTreeMap<String, WidgetConfig>) -> Self {
        Self { bar, widgets }
    }
}

/// Validated `[bar]` settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    pub interval: Duration,
    pub separator: String,
    pub color: bool,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_BAR_INTERVAL,
            separator: default_separator(),
            color: default_color(),
        }
    }
}

/// Validated settings for a single command widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Shell-interpreted command line.
    pub command: String,
    /// How often the host should tick this widget.
    pub interval: Duration,
    /// Background execution with at most one run in flight.
    pub run_async: bool,
}

impl WidgetConfig {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_async(mut self, run_async: bool) -> Self {
        self.run_async = run_async;
        self
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            interval: DEFAULT_WIDGET_INTERVAL,
            run_async: false,
        }
    }
}
