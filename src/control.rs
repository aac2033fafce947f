use crate::conf::{ConfigurationModel, EditorMode};
use crate::control_state::ControlState;
use crate::error::ShellResult;
use crate::input::Input;
use crate::input::reader::read_line;
use crate::process::sink::OutputSink;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, IsTerminal};

/// Source of input lines for the control loop.
pub trait LineEditor {
    fn read_line(&mut self, prompt: &str) -> ShellResult<Input>;
}

/// Reads lines from any buffered stream, writing the prompt to a sink first.
pub struct StreamEditor<R> {
    reader: R,
    prompt_sink: OutputSink,
}

impl<R: BufRead> StreamEditor<R> {
    pub fn new(reader: R, prompt_sink: OutputSink) -> Self {
        Self {
            reader,
            prompt_sink,
        }
    }
}

impl<R: BufRead> LineEditor for StreamEditor<R> {
    fn read_line(&mut self, prompt: &str) -> ShellResult<Input> {
        self.prompt_sink.write_str(prompt);
        read_line(&mut self.reader)
    }
}

/// Interactive line editing on a terminal.
pub struct ReadlineEditor {
    editor: DefaultEditor,
    warnings: OutputSink,
}

impl ReadlineEditor {
    /// Non-fatal editor problems are written to `warnings`.
    pub fn new(warnings: OutputSink) -> ShellResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            warnings,
        })
    }
}

impl LineEditor for ReadlineEditor {
    fn read_line(&mut self, prompt: &str) -> ShellResult<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let added = self.editor.add_history_entry(line.as_str());
                    warn_history_failure(&self.warnings, added);
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::EndOfStream(String::new())),
            Err(e) => Err(e.into()),
        }
    }
}

fn warn_history_failure(warnings: &OutputSink, added: rustyline::Result<bool>) {
    if let Err(e) = added {
        warnings.write_line(format_args!("Warning: couldn't add to history: {e}"));
    }
}

/// Drive `control_state` with lines from `editor` until it halts.
///
/// A partial line left at end of stream is executed before halting. Only
/// fatal errors end the loop early.
pub fn run_loop_with_editor<E: LineEditor + ?Sized>(
    control_state: &mut ControlState,
    editor: &mut E,
) -> ShellResult<()> {
    while control_state.is_running() {
        match editor.read_line(control_state.prompt())? {
            Input::Line(line) => {
                control_state.handle_line(&line)?;
            }
            Input::Interrupted => continue,
            Input::EndOfStream(rest) => {
                control_state.handle_line(&rest)?;
                control_state.halt();
            }
        }
    }

    Ok(())
}

/// Main command control loop: pick an input source, run until halted, then
/// run the shutdown step.
pub fn control_loop(config: &ConfigurationModel) -> ShellResult<()> {
    let mut control_state = ControlState::with_config(config);

    let result = if use_line_editor(config.control.editor_mode()) {
        ReadlineEditor::new(control_state.channels().err.clone())
            .and_then(|mut editor| run_loop_with_editor(&mut control_state, &mut editor))
    } else {
        let stdin = io::stdin();
        let mut editor = StreamEditor::new(stdin.lock(), OutputSink::Stdout);
        run_loop_with_editor(&mut control_state, &mut editor)
    };

    shutdown(&control_state);
    result
}

fn use_line_editor(mode: EditorMode) -> bool {
    match mode {
        EditorMode::Auto => io::stdin().is_terminal(),
        EditorMode::Readline => true,
        EditorMode::Stream => false,
    }
}

/// Cleanup run once after the loop ends.
pub fn shutdown(control_state: &ControlState) {
    control_state.channels().flush();
}
