#![allow(dead_code)]

use std::collections::BTreeMap;

use shellbar::config::{BarSection, ConfigFile, IntervalSpec, RawConfigFile, RawWidgetConfig};

/// Builder for `ConfigFile` to simplify test setup.
///
/// Goes through the raw model and `TryFrom`, so built configs are validated
/// exactly like ones read from disk.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                bar: BarSection::default(),
                widget: BTreeMap::new(),
            },
        }
    }

    pub fn with_widget(mut self, name: &str, widget: RawWidgetConfig) -> Self {
        self.config.widget.insert(name.to_string(), widget);
        self
    }

    pub fn bar_interval_secs(mut self, secs: u64) -> Self {
        self.config.bar.interval = Some(IntervalSpec::Seconds(secs));
        self
    }

    pub fn separator(mut self, sep: &str) -> Self {
        self.config.bar.separator = sep.to_string();
        self
    }

    pub fn color(mut self, val: bool) -> Self {
        self.config.bar.color = val;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RawWidgetConfig`.
pub struct WidgetConfigBuilder {
    widget: RawWidgetConfig,
}

impl WidgetConfigBuilder {
    pub fn new(command: &str) -> Self {
        Self {
            widget: RawWidgetConfig {
                command: Some(command.to_string()),
                interval: None,
                run_async: false,
            },
        }
    }

    /// A widget with no `command` key at all.
    pub fn unconfigured() -> Self {
        Self {
            widget: RawWidgetConfig::default(),
        }
    }

    pub fn interval_secs(mut self, secs: u64) -> Self {
        self.widget.interval = Some(IntervalSpec::Seconds(secs));
        self
    }

    pub fn interval(mut self, spec: &str) -> Self {
        self.widget.interval = Some(IntervalSpec::Text(spec.to_string()));
        self
    }

    pub fn run_async(mut self, val: bool) -> Self {
        self.widget.run_async = val;
        self
    }

    pub fn build(self) -> RawWidgetConfig {
        self.widget
    }
}
