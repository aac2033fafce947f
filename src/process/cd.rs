use crate::control_state::ControlFlow;
use crate::input::tokenizer::TokenList;
use crate::process::builtin::Builtin;
use crate::process::sink::Channels;
use std::env;
use std::path::Path;

/// Changes the working directory of the shell process. Every program
/// launched afterwards starts in the new directory.
pub struct Cd {}

impl Builtin for Cd {
    /// Never stops the shell; failures are reported on the error channel.
    fn call(&self, tokens: &TokenList<'_>, io: &Channels) -> ControlFlow {
        let target = match tokens.operands() {
            [target] => *target,
            [] => {
                io.err.write_line(format_args!("cd: expected argument to \"cd\""));
                return ControlFlow::CONTINUE;
            }
            _ => {
                io.err.write_line(format_args!("cd: too many arguments"));
                return ControlFlow::CONTINUE;
            }
        };

        if let Err(e) = env::set_current_dir(Path::new(target)) {
            io.err.write_line(format_args!("cd: {}: {}", target, e));
        }

        ControlFlow::CONTINUE
    }
}

impl Cd {
    pub fn new() -> Self {
        Cd {}
    }
}
