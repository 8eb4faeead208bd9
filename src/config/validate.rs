// src/config/validate.rs

use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::interval::IntervalSpec;
use crate::config::model::{
    BarConfig, ConfigFile, RawConfigFile, RawWidgetConfig, WidgetConfig, DEFAULT_BAR_INTERVAL,
    DEFAULT_COMMAND, DEFAULT_WIDGET_INTERVAL,
};
use crate::errors::{Result, ShellbarError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ShellbarError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_widgets(&raw)?;

        let bar = BarConfig {
            interval: resolve_interval("[bar].interval", raw.bar.interval.as_ref(), DEFAULT_BAR_INTERVAL)?,
            separator: raw.bar.separator,
            color: raw.bar.color,
        };

        let mut widgets = BTreeMap::new();
        for (name, widget) in raw.widget {
            let cfg = validate_widget(&name, widget)?;
            widgets.insert(name, cfg);
        }

        Ok(ConfigFile::new_unchecked(bar, widgets))
    }
}

impl TryFrom<RawWidgetConfig> for WidgetConfig {
    type Error = ShellbarError;

    fn try_from(raw: RawWidgetConfig) -> std::result::Result<Self, Self::Error> {
        validate_widget("<anonymous>", raw)
    }
}

fn ensure_has_widgets(cfg: &RawConfigFile) -> Result<()> {
    if cfg.widget.is_empty() {
        return Err(ShellbarError::ConfigError(
            "config must contain at least one [widget.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_widget(name: &str, raw: RawWidgetConfig) -> Result<WidgetConfig> {
    let command = match raw.command {
        Some(cmd) if cmd.trim().is_empty() => {
            return Err(ShellbarError::ConfigError(format!(
                "widget '{}' has an empty `command`",
                name
            )));
        }
        Some(cmd) => cmd,
        None => DEFAULT_COMMAND.to_string(),
    };

    let key = format!("[widget.{name}].interval");
    let interval = resolve_interval(&key, raw.interval.as_ref(), DEFAULT_WIDGET_INTERVAL)?;

    Ok(WidgetConfig {
        command,
        interval,
        run_async: raw.run_async,
    })
}

fn resolve_interval(key: &str, spec: Option<&IntervalSpec>, default: Duration) -> Result<Duration> {
    match spec {
        None => Ok(default),
        Some(spec) => spec
            .to_duration()
            .map_err(|e| ShellbarError::ConfigError(format!("invalid {key}: {e}"))),
    }
}
