// tests/widget_sync.rs

mod common;
use crate::common::{init_tracing, ScriptedRunner};

use std::sync::Arc;

use shellbar::config::{WidgetConfig, DEFAULT_COMMAND};
use shellbar::exec::LAUNCH_FAILURE_STATUS;
use shellbar::widget::{CommandWidget, Severity, PLACEHOLDER_TEXT};

fn shell_widget(command: &str) -> CommandWidget {
    CommandWidget::new("test", WidgetConfig::new(command))
}

#[test]
fn fresh_sync_widget_shows_placeholder_as_warning() {
    let w = shell_widget("echo never-run");
    assert_eq!(w.render(), PLACEHOLDER_TEXT);
    assert_eq!(w.severity(), Severity::Warning);
    assert!(!w.is_in_flight());
}

#[cfg(unix)]
#[tokio::test]
async fn echo_hello_renders_hello() {
    init_tracing();

    let mut w = shell_widget("echo hello");
    w.tick().await;

    assert_eq!(w.render(), "hello");
    assert_eq!(w.severity(), Severity::Normal);
}

#[cfg(unix)]
#[tokio::test]
async fn exit_code_is_rendered_and_critical() {
    init_tracing();

    let mut w = shell_widget("echo something; exit 3");
    w.tick().await;

    assert_eq!(w.render(), "3");
    assert_eq!(w.severity(), Severity::Critical);
    assert_eq!(w.snapshot().output, "something");
}

#[cfg(unix)]
#[tokio::test]
async fn trailing_whitespace_is_trimmed() {
    let mut w = shell_widget("printf '  padded \\n\\n\\t'");
    w.tick().await;

    assert_eq!(w.render(), "  padded");
}

#[cfg(unix)]
#[tokio::test]
async fn stderr_is_captured_with_stdout() {
    let mut w = shell_widget("echo to-stderr 1>&2");
    w.tick().await;

    assert_eq!(w.render(), "to-stderr");
    assert_eq!(w.severity(), Severity::Normal);
}

#[cfg(unix)]
#[tokio::test]
async fn default_command_yields_placeholder_warning() {
    let mut w = CommandWidget::new("default", WidgetConfig::default());
    assert_eq!(w.config().command, DEFAULT_COMMAND);

    w.tick().await;

    assert_eq!(w.render(), PLACEHOLDER_TEXT);
    assert_eq!(w.severity(), Severity::Warning);
}

#[cfg(unix)]
#[tokio::test]
async fn command_can_report_its_own_severity() {
    let mut warn = shell_widget("printf '\\033[0;33mbattery 15%%'");
    warn.tick().await;
    assert_eq!(warn.severity(), Severity::Warning);
    assert_eq!(warn.render(), "battery 15%");

    let mut crit = shell_widget("printf '\\033[0;31mbattery 3%%'");
    crit.tick().await;
    assert_eq!(crit.severity(), Severity::Critical);
    assert_eq!(crit.render(), "battery 3%");
}

#[cfg(unix)]
#[tokio::test]
async fn each_tick_replaces_the_previous_result() {
    let dir = tempfile::tempdir().unwrap();
    let counter = dir.path().join("count");
    let cmd = format!(
        "n=$(cat '{p}' 2>/dev/null || echo 0); n=$((n+1)); echo $n > '{p}'; echo run $n; [ $n -lt 2 ]",
        p = counter.display()
    );

    let mut w = shell_widget(&cmd);

    w.tick().await;
    assert_eq!(w.render(), "run 1");
    assert_eq!(w.severity(), Severity::Normal);

    w.tick().await;
    assert_eq!(w.render(), "1");
    assert_eq!(w.severity(), Severity::Critical);
}

#[cfg(unix)]
#[tokio::test]
async fn shell_killed_by_signal_reports_negative_status() {
    let mut w = shell_widget("kill -9 $$");
    w.tick().await;

    assert_eq!(w.snapshot().status, -9);
    assert_eq!(w.render(), "-9");
    assert_eq!(w.severity(), Severity::Normal);
}

#[tokio::test]
async fn launch_failure_is_captured_not_propagated() {
    init_tracing();

    let runner = Arc::new(ScriptedRunner::new().fail_launch("sh: permission denied"));
    let mut w = CommandWidget::with_runner("broken", WidgetConfig::new("anything"), runner.clone());

    w.tick().await;

    assert_eq!(w.render(), LAUNCH_FAILURE_STATUS.to_string());
    assert_eq!(w.severity(), Severity::Critical);
    assert_eq!(w.snapshot().output, "sh: permission denied");
    assert_eq!(runner.calls(), vec!["anything".to_string()]);
}

#[tokio::test]
async fn render_and_severity_are_idempotent() {
    let runner = Arc::new(ScriptedRunner::new().respond(0, "\x1b[0;33mlow disk"));
    let mut w = CommandWidget::with_runner("disk", WidgetConfig::new("df"), runner);

    w.tick().await;

    let first = (w.render(), w.severity());
    for _ in 0..5 {
        assert_eq!((w.render(), w.severity()), first);
    }
    assert_eq!(first, ("low disk".to_string(), Severity::Warning));
}

#[tokio::test]
async fn sync_tick_runs_every_time() {
    let runner = Arc::new(ScriptedRunner::new().respond(0, "a").respond(0, "b"));
    let mut w = CommandWidget::with_runner("seq", WidgetConfig::new("next"), runner.clone());

    w.tick().await;
    assert_eq!(w.render(), "a");
    w.tick().await;
    assert_eq!(w.render(), "b");
    w.tick().await;
    assert_eq!(w.render(), "ok");

    assert_eq!(runner.call_count(), 3);
}
