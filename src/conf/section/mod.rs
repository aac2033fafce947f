mod control;
mod ui;

pub use control::{ControlConfigSection, EditorMode};
pub use ui::UiConfigSection;
