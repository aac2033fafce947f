//! Running external programs.
//!
//! The child inherits the shell's standard streams, environment and current
//! working directory, so a prior `cd` decides where it starts. The shell
//! blocks until the child has exited or been killed by a signal; a child that
//! is merely stopped does not end the wait.

use crate::control_state::ControlFlow;
use crate::input::tokenizer::TokenList;
use crate::process::sink::Channels;
use std::fmt;
use std::io;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// How a child process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Exited(i32),
    Signaled(i32),
}

impl ChildStatus {
    pub fn success(&self) -> bool {
        *self == ChildStatus::Exited(0)
    }
}

impl From<ExitStatus> for ChildStatus {
    fn from(status: ExitStatus) -> Self {
        match (status.code(), signal_of(&status)) {
            (Some(code), _) => ChildStatus::Exited(code),
            (None, Some(signal)) => ChildStatus::Signaled(signal),
            // waitpid without WUNTRACED only reports exit or signal
            (None, None) => ChildStatus::Exited(-1),
        }
    }
}

impl fmt::Display for ChildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildStatus::Exited(code) => write!(f, "exited with status {code}"),
            ChildStatus::Signaled(signal) => write!(f, "terminated by signal {signal}"),
        }
    }
}

#[cfg(unix)]
fn signal_of(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: &ExitStatus) -> Option<i32> {
    None
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("command not found: {0}")]
    NotFound(String),
    #[error("{0}: {1}")]
    Spawn(String, #[source] io::Error),
    #[error("{0}: wait failed: {1}")]
    Wait(String, #[source] io::Error),
}

/// Spawn `tokens[0]` with the remaining tokens as arguments and wait for it.
///
/// An empty token list is treated as a program that could not be found.
pub fn spawn_and_wait(tokens: &TokenList<'_>) -> Result<ChildStatus, LaunchError> {
    let program = tokens
        .command()
        .ok_or_else(|| LaunchError::NotFound(String::new()))?;

    let mut child = Command::new(program)
        .args(tokens.operands())
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LaunchError::NotFound(program.to_string()),
            _ => LaunchError::Spawn(program.to_string(), e),
        })?;

    child
        .wait()
        .map(ChildStatus::from)
        .map_err(|e| LaunchError::Wait(program.to_string(), e))
}

/// Runs external commands on behalf of the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Launcher {
    report_status: bool,
}

impl Launcher {
    /// With `report_status`, unsuccessful completions are described on the
    /// error channel.
    pub fn new(report_status: bool) -> Self {
        Launcher { report_status }
    }

    /// Run the command and wait for it. Failures never stop the shell.
    pub fn launch(&self, tokens: &TokenList<'_>, io: &Channels) -> ControlFlow {
        match spawn_and_wait(tokens) {
            Ok(status) => {
                if self.report_status && !status.success() {
                    io.err.write_line(format_args!(
                        "osmium: {}: {}",
                        tokens.command().unwrap_or_default(),
                        status
                    ));
                }
            }
            Err(e) => io.err.write_line(format_args!("osmium: {}", e)),
        }

        ControlFlow::CONTINUE
    }
}
