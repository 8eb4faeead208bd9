// src/bar/host.rs

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::bar::line::join_segments;
use crate::bar::schedule::ScheduledWidget;
use crate::config::{BarConfig, ConfigFile};
use crate::errors::Result;
use crate::exec::{CommandRunner, ShellRunner};
use crate::widget::CommandWidget;

/// Status-bar host: ticks widgets on their intervals and prints one line per
/// host tick.
///
/// Widgets are ticked one after another in name order, so a synchronous
/// widget holds up the rest of the tick for as long as its command runs.
#[derive(Debug)]
pub struct Bar {
    config: BarConfig,
    slots: Vec<ScheduledWidget>,
}

impl Bar {
    pub fn new(config: BarConfig, widgets: Vec<CommandWidget>) -> Self {
        Self {
            config,
            slots: widgets.into_iter().map(ScheduledWidget::new).collect(),
        }
    }

    /// Build a bar whose widgets run through the platform shell.
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self::with_runner(cfg, Arc::new(ShellRunner))
    }

    /// Build a bar whose widgets share `runner`.
    pub fn with_runner(cfg: &ConfigFile, runner: Arc<dyn CommandRunner>) -> Self {
        let widgets = cfg
            .widgets
            .iter()
            .map(|(name, widget)| {
                CommandWidget::with_runner(name.clone(), widget.clone(), Arc::clone(&runner))
            })
            .collect();

        Self::new(cfg.bar.clone(), widgets)
    }

    pub fn widgets(&self) -> impl Iterator<Item = &CommandWidget> {
        self.slots.iter().map(ScheduledWidget::widget)
    }

    /// Tick every widget that is due at `now`. Returns how many were ticked.
    pub async fn tick_due(&mut self, now: Instant) -> usize {
        let mut ticked = 0;
        for slot in self.slots.iter_mut() {
            if slot.tick_if_due(now).await {
                ticked += 1;
            }
        }
        debug!(ticked, "host tick complete");
        ticked
    }

    /// Current status line.
    pub fn render_line(&self) -> String {
        join_segments(
            self.widgets().map(|w| (w.render(), w.severity())),
            &self.config.separator,
            self.config.color,
        )
    }

    /// Tick everything once, wait for background runs and return the line.
    pub async fn run_once(&mut self) -> String {
        let now = Instant::now();
        for slot in self.slots.iter_mut() {
            slot.tick_if_due(now).await;
        }
        for slot in self.slots.iter_mut() {
            slot.widget_mut().wait_idle().await;
        }
        self.render_line()
    }

    /// Main loop: tick due widgets every `[bar].interval`, write the line to
    /// `out`, stop on Ctrl-C.
    pub async fn run<W: Write>(mut self, mut out: W) -> Result<()> {
        info!(
            widgets = self.slots.len(),
            interval_ms = self.config.interval.as_millis() as u64,
            "shellbar host started"
        );

        let mut ticker = interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);
        let mut listening = true;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick_due(Instant::now()).await;
                    writeln!(out, "{}", self.render_line())?;
                    out.flush()?;
                }
                res = &mut shutdown, if listening => {
                    match res {
                        Ok(()) => {
                            info!("shutdown requested, stopping host");
                            break;
                        }
                        Err(e) => {
                            warn!(error = %e, "failed to listen for Ctrl+C");
                            listening = false;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
