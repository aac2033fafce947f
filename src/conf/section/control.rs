use serde::Deserialize;

/// Where input lines come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Line editing on a terminal, plain stream reading otherwise.
    #[default]
    Auto,
    Readline,
    Stream,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ControlConfigSection {
    pub editor: Option<EditorMode>,
    pub report_status: Option<bool>,
}

impl ControlConfigSection {
    pub fn editor_mode(&self) -> EditorMode {
        self.editor.unwrap_or_default()
    }

    pub fn report_status(&self) -> bool {
        self.report_status.unwrap_or(false)
    }
}
