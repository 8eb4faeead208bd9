// tests/bar_host.rs

mod common;
use crate::common::builders::{ConfigFileBuilder, WidgetConfigBuilder};
use crate::common::{init_tracing, with_timeout, ScriptedRunner};

use std::sync::Arc;
use std::time::{Duration, Instant};

use shellbar::bar::Bar;
use shellbar::config::{BarConfig, ConfigFile, WidgetConfig};
use shellbar::widget::{CommandWidget, Severity, PLACEHOLDER_TEXT};

fn two_widget_config(color: bool) -> ConfigFile {
    ConfigFileBuilder::new()
        .color(color)
        .with_widget("a_fast", WidgetConfigBuilder::new("fast").interval_secs(1).build())
        .with_widget("b_slow", WidgetConfigBuilder::new("slow").interval_secs(10).build())
        .build()
}

#[tokio::test]
async fn widgets_are_ticked_on_their_own_interval() {
    init_tracing();

    let runner = Arc::new(ScriptedRunner::new());
    let mut bar = Bar::with_runner(&two_widget_config(false), runner.clone());

    let t0 = Instant::now();
    assert_eq!(bar.tick_due(t0).await, 2);
    assert_eq!(bar.tick_due(t0 + Duration::from_millis(500)).await, 0);
    assert_eq!(bar.tick_due(t0 + Duration::from_secs(2)).await, 1);
    assert_eq!(bar.tick_due(t0 + Duration::from_secs(10)).await, 2);

    assert_eq!(
        runner.calls(),
        vec!["fast", "slow", "fast", "fast", "slow"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn line_joins_widgets_in_name_order() {
    let runner = Arc::new(ScriptedRunner::new().respond(0, "up").respond(2, "down"));
    let mut bar = Bar::with_runner(&two_widget_config(false), runner);

    bar.tick_due(Instant::now()).await;

    assert_eq!(bar.render_line(), "up | 2");
}

#[tokio::test]
async fn line_colours_segments_by_severity() {
    let runner = Arc::new(
        ScriptedRunner::new()
            .respond(0, "\x1b[0;33mlow")
            .respond(2, "down"),
    );
    let mut bar = Bar::with_runner(&two_widget_config(true), runner);

    bar.tick_due(Instant::now()).await;

    let severities: Vec<Severity> = bar.widgets().map(|w| w.severity()).collect();
    assert_eq!(severities, vec![Severity::Warning, Severity::Critical]);
    assert_eq!(
        bar.render_line(),
        "\x1b[0;33mlow\x1b[0m | \x1b[0;31m2\x1b[0m"
    );
}

#[tokio::test]
async fn run_once_waits_for_background_widgets() {
    let cfg = ConfigFileBuilder::new()
        .color(false)
        .separator(" / ")
        .with_widget("bg", WidgetConfigBuilder::new("from-bg").run_async(true).build())
        .with_widget("fg", WidgetConfigBuilder::new("from-fg").build())
        .build();

    let runner = Arc::new(ScriptedRunner::echoing());
    let mut bar = Bar::with_runner(&cfg, runner.clone());

    let line = with_timeout(bar.run_once()).await;

    assert_eq!(line, "from-bg / from-fg");
    assert_eq!(runner.call_count(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn unconfigured_widget_end_to_end() {
    let cfg = ConfigFileBuilder::new()
        .color(false)
        .with_widget("nothing", WidgetConfigBuilder::unconfigured().build())
        .build();

    let mut bar = Bar::from_config(&cfg);
    let line = with_timeout(bar.run_once()).await;

    assert_eq!(line, PLACEHOLDER_TEXT);
    let widget = bar.widgets().next().unwrap();
    assert_eq!(widget.severity(), Severity::Warning);
}

#[tokio::test]
async fn interval_past_the_clock_parks_the_widget() {
    let runner = Arc::new(ScriptedRunner::new());
    let widget = CommandWidget::with_runner(
        "forever",
        WidgetConfig::new("once").with_interval(Duration::MAX),
        runner.clone(),
    );
    let mut bar = Bar::new(BarConfig::default(), vec![widget]);

    let t0 = Instant::now();
    assert_eq!(bar.tick_due(t0).await, 1);
    assert_eq!(bar.tick_due(t0 + Duration::from_secs(365 * 24 * 60 * 60)).await, 0);
    assert_eq!(runner.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn run_loop_writes_a_line_per_host_tick() {
    init_tracing();

    let runner = Arc::new(ScriptedRunner::echoing());
    let bar = Bar::with_runner(&two_widget_config(false), runner.clone());

    let mut out: Vec<u8> = Vec::new();
    let res = tokio::time::timeout(Duration::from_millis(2500), bar.run(&mut out)).await;
    assert!(res.is_err(), "host loop should still be running");

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|line| *line == "fast | slow"), "{lines:?}");
    assert!(runner.call_count() >= 2);
}
