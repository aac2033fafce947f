use crate::control_state::ControlFlow;
use crate::input::tokenizer::TokenList;
use crate::process::builtin::Builtin;
use crate::process::sink::Channels;

/// Builtin that prints a short usage banner and the builtin names on the
/// error channel, keeping stdout free for program output.
pub struct Help {
    names: Vec<&'static str>,
}

impl Builtin for Help {
    /// Operands are ignored.
    fn call(&self, _tokens: &TokenList<'_>, io: &Channels) -> ControlFlow {
        io.err.write_line(format_args!("osmium {}", env!("CARGO_PKG_VERSION")));
        io.err.write_line(format_args!("Type program names and arguments, and hit enter."));
        io.err.write_line(format_args!("The following are built in:"));
        for name in &self.names {
            io.err.write_line(format_args!("  {}", name));
        }
        io.err.write_line(format_args!("Use the man command for information on other programs."));

        ControlFlow::CONTINUE
    }
}

impl Help {
    /// Create a help builtin listing `names`.
    pub fn new(names: Vec<&'static str>) -> Self {
        Help { names }
    }
}
