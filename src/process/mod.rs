//! Builtin implementations, external process launching, and the dispatcher
//! that chooses between them.

pub mod builtin;
pub mod cd;
pub mod exit;
pub mod help;
pub mod launch;
pub mod sink;

use crate::control_state::ControlFlow;
use crate::input::tokenizer::TokenList;
use crate::process::builtin::map::BuiltinMap;
use crate::process::launch::Launcher;
use crate::process::sink::Channels;

/// Execute a command, dispatching to builtins or spawning external processes.
///
/// Builtins are looked up first, so they shadow any program of the same
/// name. A blank line does nothing.
pub fn execute(
    builtin_map: &BuiltinMap,
    launcher: &Launcher,
    tokens: &TokenList<'_>,
    io: &Channels,
) -> ControlFlow {
    let Some(command) = tokens.command() else {
        return ControlFlow::CONTINUE;
    };

    // Determine if command is builtin, and call function
    if let Some(flow) = builtin_map.invoke(command, tokens, io) {
        return flow;
    }

    launcher.launch(tokens, io)
}
