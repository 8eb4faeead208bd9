// src/widget/command.rs

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::config::WidgetConfig;
use crate::exec::{CommandRunner, Execution, ShellRunner};
use crate::widget::state::{display_text, severity_of, Severity, PENDING_TEXT, PLACEHOLDER_TEXT};

/// Periodically runs one shell command and exposes its last result.
///
/// In synchronous mode `tick` resolves only once the command has exited. In
/// async mode `tick` starts the command on a spawned Tokio task and returns
/// at once; while that task is running further ticks do nothing.
///
/// The last [`Execution`] sits behind a lock and is replaced as a whole, so
/// `render` and `severity` never observe a half-written result.
pub struct CommandWidget {
    name: String,
    config: WidgetConfig,
    runner: Arc<dyn CommandRunner>,
    last: Arc<RwLock<Execution>>,
    in_flight: Option<JoinHandle<()>>,
}

impl CommandWidget {
    /// Widget backed by the platform shell.
    pub fn new(name: impl Into<String>, config: WidgetConfig) -> Self {
        Self::with_runner(name, config, Arc::new(ShellRunner))
    }

    pub fn with_runner(
        name: impl Into<String>,
        config: WidgetConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        let initial = if config.run_async {
            PENDING_TEXT
        } else {
            PLACEHOLDER_TEXT
        };

        Self {
            name: name.into(),
            config,
            runner,
            last: Arc::new(RwLock::new(Execution::new(0, initial))),
            in_flight: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Run the configured command (sync mode) or start it in the background
    /// (async mode). Never fails: launch errors become the displayed result.
    pub async fn tick(&mut self) {
        if !self.config.run_async {
            let execution = execute(self.runner.as_ref(), &self.name, &self.config.command).await;
            store(&self.last, execution);
            return;
        }

        if self.is_in_flight() {
            debug!(widget = %self.name, "previous run still in flight; skipping tick");
            return;
        }

        let runner = Arc::clone(&self.runner);
        let last = Arc::clone(&self.last);
        let name = self.name.clone();
        let command = self.config.command.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let execution = execute(runner.as_ref(), &name, &command).await;
            store(&last, execution);
        }));
    }

    /// Text for the host to display.
    pub fn render(&self) -> String {
        display_text(&self.read())
    }

    /// Display state for the host.
    pub fn severity(&self) -> Severity {
        severity_of(&self.read())
    }

    /// Whether a background run has been started and not yet stored its result.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Wait for the background run, if any, to finish.
    pub async fn wait_idle(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if let Err(err) = handle.await {
                warn!(widget = %self.name, error = %err, "background run did not complete");
            }
        }
    }

    /// Copy of the most recently completed execution.
    pub fn snapshot(&self) -> Execution {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Execution> {
        self.last.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CommandWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandWidget")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("in_flight", &self.is_in_flight())
            .finish_non_exhaustive()
    }
}

async fn execute(runner: &dyn CommandRunner, name: &str, command: &str) -> Execution {
    debug!(widget = %name, command = %command, "running widget command");

    match runner.run(command).await {
        Ok(execution) => {
            if !execution.success() {
                debug!(widget = %name, exit_code = execution.status, "widget command failed");
            }
            execution
        }
        Err(err) => {
            error!(widget = %name, error = %err, "could not launch widget command");
            Execution::launch_failure(&err)
        }
    }
}

fn store(slot: &RwLock<Execution>, execution: Execution) {
    let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
    *guard = execution;
}
