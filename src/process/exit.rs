use crate::control_state::ControlFlow;
use crate::input::tokenizer::TokenList;
use crate::process::builtin::Builtin;
use crate::process::sink::Channels;

/// Implements the `exit` builtin, allowing the shell to terminate cleanly.
pub struct Exit {}

impl Builtin for Exit {
    /// Operands are ignored; the loop always stops.
    fn call(&self, _tokens: &TokenList<'_>, _io: &Channels) -> ControlFlow {
        ControlFlow::EXIT
    }
}

impl Exit {
    /// Construct a new exit builtin instance.
    pub fn new() -> Self {
        Exit {}
    }
}
