pub mod map;

use crate::control_state::ControlFlow;
use crate::input::tokenizer::TokenList;
use crate::process::sink::Channels;

/// Names of the commands handled inside the shell process, in the order
/// `help` lists them.
pub const BUILTIN_NAMES: [&str; 3] = ["cd", "help", "exit"];

/// A command run in-process. Receives the full token list, command name
/// included.
pub trait Builtin {
    fn call(&self, tokens: &TokenList<'_>, io: &Channels) -> ControlFlow;
}
