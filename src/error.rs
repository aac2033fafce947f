//! Fatal error taxonomy for the shell.
//!
//! Only conditions that leave the shell unable to keep reading input end up
//! here. Bad commands are reported by the builtins and the launcher directly
//! and never surface as a `ShellError`.

use rustyline::error::ReadlineError;
use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("allocation failure in {0}: {1}")]
    Allocation(&'static str, #[source] TryReserveError),
    #[error("unable to read input: {0}")]
    Input(#[from] io::Error),
    #[error("line editor failure: {0}")]
    Editor(#[from] ReadlineError),
}

pub type ShellResult<T> = Result<T, ShellError>;
