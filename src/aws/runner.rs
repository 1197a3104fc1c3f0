//! Process runners

use super::CommandRunner;
use crate::error::{KreatisiteError, Result};
use crate::types::CommandInvocation;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// Spawns the external tool as a child process and waits for it
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, argv: &[String]) -> Result<CommandInvocation> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| KreatisiteError::invocation("empty command line"))?;

        let start_time = Instant::now();

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                tracing::debug!(program = %program, error = %e, "Failed to spawn external tool");
                KreatisiteError::invocation(e.to_string())
            })?;

        let exit_status = output.status.code();

        tracing::debug!(
            program = %program,
            exit_status = ?exit_status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            duration_ms = %start_time.elapsed().as_millis(),
            "External tool finished"
        );

        Ok(CommandInvocation::new(
            argv.to_vec(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
            exit_status,
        ))
    }
}

/// Scripted reply of a [`RecordingRunner`]
#[derive(Debug, Clone)]
enum Reply {
    Finished {
        stdout: String,
        stderr: String,
        exit_status: Option<i32>,
    },
    Failed(String),
}

/// Test double that records each command line and answers with a scripted reply
#[derive(Debug)]
pub struct RecordingRunner {
    reply: Reply,
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingRunner {
    /// Reply as if the tool exited with `exit_status` after writing both streams
    pub fn replying(stdout: impl Into<String>, stderr: impl Into<String>, exit_status: i32) -> Self {
        Self {
            reply: Reply::Finished {
                stdout: stdout.into(),
                stderr: stderr.into(),
                exit_status: Some(exit_status),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Reply as if the tool could not be started
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Reply::Failed(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every command line received so far
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }

    /// The most recent command line, if any
    pub fn last_call(&self) -> Option<Vec<String>> {
        self.calls.lock().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, argv: &[String]) -> Result<CommandInvocation> {
        self.calls.lock().push(argv.to_vec());

        match &self.reply {
            Reply::Finished {
                stdout,
                stderr,
                exit_status,
            } => Ok(CommandInvocation::new(
                argv.to_vec(),
                stdout.clone(),
                stderr.clone(),
                *exit_status,
            )),
            Reply::Failed(message) => Err(KreatisiteError::invocation(message.clone())),
        }
    }
}
