//! State machine backing the interactive control loop.

use crate::conf::ConfigurationModel;
use crate::error::ShellResult;
use crate::input::tokenizer::parse_tokens;
use crate::process;
use crate::process::builtin::map::BuiltinMap;
use crate::process::launch::Launcher;
use crate::process::sink::Channels;

/// Signals whether the control loop should continue or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading user input.
    CONTINUE,
    /// Terminate the control loop.
    EXIT,
}

/// Whether the loop is still accepting lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Halted,
}

/// Shared state that backs the interactive control loop.
pub struct ControlState {
    state: LoopState,
    prompt: String,
    builtin_map: BuiltinMap,
    launcher: Launcher,
    io: Channels,
}

impl ControlState {
    /// Build a new control state with the default builtin set and settings.
    pub fn new() -> Self {
        Self::with_config(&ConfigurationModel::default())
    }

    pub fn with_config(config: &ConfigurationModel) -> Self {
        Self {
            state: LoopState::Running,
            prompt: config.ui.prompt().to_string(),
            builtin_map: BuiltinMap::new(),
            launcher: Launcher::new(config.control.report_status()),
            io: Channels::default(),
        }
    }

    /// Route builtin output and diagnostics somewhere other than stdout/stderr.
    pub fn with_channels(mut self, io: Channels) -> Self {
        self.io = io;
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn channels(&self) -> &Channels {
        &self.io
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn halt(&mut self) {
        self.state = LoopState::Halted;
    }

    /// Tokenize and execute a single line of user input.
    ///
    /// The tokens borrow from `line` and are dropped before this returns.
    /// Only allocation failure is an error; a failing command still yields
    /// `CONTINUE`.
    pub fn handle_line(&mut self, line: &str) -> ShellResult<ControlFlow> {
        let tokens = parse_tokens(line)?;
        let flow = process::execute(&self.builtin_map, &self.launcher, &tokens, &self.io);

        if flow == ControlFlow::EXIT {
            self.halt();
        }
        Ok(flow)
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}
