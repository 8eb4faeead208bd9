use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::anyhow;
use tokio::sync::Semaphore;

use shellbar::exec::{CommandRunner, Execution, RunFuture};

/// A fake runner that:
/// - records every command it was asked to run
/// - answers with scripted results, in order, then a fallback
/// - optionally holds each run until the test releases it, so a widget can
///   be kept "in flight" deterministically.
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<Result<Execution, String>>>,
    fallback: Execution,
    echo: bool,
    calls: Mutex<Vec<String>>,
    gate: Option<Semaphore>,
}

impl ScriptedRunner {
    /// Every run completes immediately with status 0 and `"ok"`.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: Execution::new(0, "ok"),
            echo: false,
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Runs block until [`ScriptedRunner::release`] hands out a permit.
    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new()
        }
    }

    /// Once the script is exhausted, answer with the command text itself.
    pub fn echoing() -> Self {
        Self {
            echo: true,
            ..Self::new()
        }
    }

    /// Queue a completed result.
    pub fn respond(self, status: i32, output: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(Execution::new(status, output)));
        self
    }

    /// Queue a launch failure.
    pub fn fail_launch(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Let `n` held runs complete.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run<'a>(&'a self, command: &'a str) -> RunFuture<'a> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(command.to_string());

            if let Some(gate) = &self.gate {
                gate.acquire().await?.forget();
            }

            let next = self.responses.lock().unwrap().pop_front();
            match next {
                Some(Ok(execution)) => Ok(execution),
                Some(Err(message)) => Err(anyhow!(message)),
                None if self.echo => Ok(Execution::new(0, command)),
                None => Ok(self.fallback.clone()),
            }
        })
    }
}
