// src/config/state.rs
use super::options::AppOptions;
use super::scale::GradeScale;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Text in the "page file" field
    pub input_text: String,

    /// Show rows the engine does not count (greyed out)
    pub show_uncounted: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 900,
            window_h: 600,
            input_text: s!(),
            show_uncounted: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub scale: GradeScale,
    pub gui: GuiState,
}
