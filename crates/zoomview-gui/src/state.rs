use std::path::PathBuf;

use zoomview_core::consts::RESOLUTION_PERCENT_MAX;

/// UI-only state that the viewer core does not track.
pub struct UIState {
    pub file_path: Option<PathBuf>,
    /// Resolution slider position, 0..=100.
    pub resolution_percent: u8,
    pub loading: bool,
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            file_path: None,
            resolution_percent: RESOLUTION_PERCENT_MAX,
            loading: false,
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
