//! Line acquisition and whitespace tokenization.

pub mod reader;
pub mod tokenizer;

use crate::error::{ShellError, ShellResult};

/// One unit of input handed to the control loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A complete line with its newline removed.
    Line(String),
    /// The stream ended. Carries whatever was read after the last newline,
    /// which is empty when the stream ended on a line boundary.
    EndOfStream(String),
    /// The user interrupted the prompt (Ctrl-C on a terminal).
    Interrupted,
}

/// Make room for `additional` more elements, doubling capacity from `initial`
/// until it fits. Allocation failure is reported instead of aborting so the
/// caller can exit through the regular fatal-error path.
pub(crate) fn reserve_doubling<T>(
    buffer: &mut Vec<T>,
    additional: usize,
    initial: usize,
    owner: &'static str,
) -> ShellResult<()> {
    let needed = buffer.len().saturating_add(additional);
    if buffer.capacity() > 0 && needed <= buffer.capacity() {
        return Ok(());
    }

    let mut capacity = buffer.capacity().max(initial).max(1);
    while capacity < needed {
        capacity = capacity.saturating_mul(2);
    }

    buffer
        .try_reserve_exact(capacity - buffer.len())
        .map_err(|e| ShellError::Allocation(owner, e))
}
