//! Output channels shared by the builtins and the launcher.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

/// Destination for text the shell itself produces.
#[derive(Debug, Clone)]
pub enum OutputSink {
    Stdout,
    Stderr,
    /// In-memory capture, used to observe output without a terminal.
    Buffer(Rc<RefCell<Vec<u8>>>),
}

impl OutputSink {
    /// Create a capturing sink together with a handle on its contents.
    pub fn buffer() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let buffer = Rc::new(RefCell::new(Vec::new()));
        (OutputSink::Buffer(buffer.clone()), buffer)
    }

    pub fn write_line(&self, args: fmt::Arguments<'_>) {
        // Nowhere left to report a failing diagnostic channel.
        let _ = self.write_fmt_inner(format_args!("{args}\n"));
    }

    /// Write without a trailing newline and flush, as a prompt needs.
    pub fn write_str(&self, text: &str) {
        let _ = self.write_fmt_inner(format_args!("{text}"));
        self.flush();
    }

    pub fn flush(&self) {
        let _ = match self {
            OutputSink::Stdout => io::stdout().flush(),
            OutputSink::Stderr => io::stderr().flush(),
            OutputSink::Buffer(_) => Ok(()),
        };
    }

    fn write_fmt_inner(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        match self {
            OutputSink::Stdout => io::stdout().lock().write_fmt(args),
            OutputSink::Stderr => io::stderr().lock().write_fmt(args),
            OutputSink::Buffer(buffer) => buffer.borrow_mut().write_fmt(args),
        }
    }
}

/// The pair of channels a command writes to.
#[derive(Debug, Clone)]
pub struct Channels {
    pub out: OutputSink,
    pub err: OutputSink,
}

impl Channels {
    pub fn new(out: OutputSink, err: OutputSink) -> Self {
        Channels { out, err }
    }

    pub fn flush(&self) {
        self.out.flush();
        self.err.flush();
    }
}

impl Default for Channels {
    fn default() -> Self {
        Channels::new(OutputSink::Stdout, OutputSink::Stderr)
    }
}
