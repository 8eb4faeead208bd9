// src/exec/shell.rs

use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::exec::execution::Execution;

/// Run `command` through the platform shell and wait for it to exit.
///
/// stdout and stderr are read concurrently and merged line by line in the
/// order they arrive. Only a failure to start or wait on the shell is an
/// error; a non-zero exit is a normal `Execution`.
pub async fn run_shell(command: &str) -> Result<Execution> {
    let mut cmd = shell_command(command);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning shell for command '{command}'"))?;

    let stdout = child.stdout.take().context("child stdout was not piped")?;
    let stderr = child.stderr.take().context("child stderr was not piped")?;

    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    tokio::spawn(forward_lines(stdout, line_tx.clone()));
    tokio::spawn(forward_lines(stderr, line_tx));

    // Closes once both readers hit EOF and drop their senders.
    let mut output = String::new();
    while let Some(line) = line_rx.recv().await {
        output.push_str(&line);
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for shell running '{command}'"))?;

    let code = exit_code(status);
    debug!(command = %command, exit_code = code, "shell exited");

    Ok(Execution::new(code, output))
}

fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}

async fn forward_lines<R>(reader: R, tx: mpsc::UnboundedSender<String>)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf).into_owned();
                trace!(line = %line.trim_end(), "captured output");
                if tx.send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                debug!(error = %e, "output stream read failed");
                break;
            }
        }
    }
}

/// Exit code of the shell. A signal-terminated process has none; on Unix it
/// is reported as `-signal`, so it renders as e.g. `-9` and is not critical.
/// Elsewhere it falls back to `1`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    1
}
