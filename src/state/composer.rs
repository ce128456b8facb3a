//! Message composer draft and auto-resize layout.
//!
//! The textarea grows with its content between 40px and 120px, and the
//! conversation pane shrinks by the same amount so the page never scrolls.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

pub const MIN_INPUT_HEIGHT_PX: f64 = 40.0;
pub const MAX_INPUT_HEIGHT_PX: f64 = 120.0;
const BASE_VIEWPORT_VH: f64 = 99.5;
const BASE_INPUT_AREA_PX: f64 = 250.0;

/// Clamp a textarea's content height to the allowed range.
pub fn clamp_input_height(scroll_height: f64) -> f64 {
    scroll_height.clamp(MIN_INPUT_HEIGHT_PX, MAX_INPUT_HEIGHT_PX)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComposerState {
    pub draft: String,
    pub user_id_draft: String,
    pub input_height_px: f64,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self {
            draft: String::new(),
            user_id_draft: String::new(),
            input_height_px: MIN_INPUT_HEIGHT_PX,
        }
    }
}

impl ComposerState {
    /// Draft text ready to send, or `None` when blank.
    pub fn outgoing(&self) -> Option<String> {
        let text = self.draft.trim();
        if text.is_empty() { None } else { Some(text.to_owned()) }
    }

    pub fn set_input_height(&mut self, scroll_height: f64) -> bool {
        let next = clamp_input_height(scroll_height);
        if (next - self.input_height_px).abs() < f64::EPSILON {
            return false;
        }
        self.input_height_px = next;
        true
    }

    pub fn reset_draft(&mut self) {
        self.draft.clear();
        self.input_height_px = MIN_INPUT_HEIGHT_PX;
    }

    /// CSS height for the conversation pane given the current input height.
    pub fn conversation_height_css(&self) -> String {
        let extra = self.input_height_px - MIN_INPUT_HEIGHT_PX;
        format!("calc({BASE_VIEWPORT_VH}vh - {}px)", BASE_INPUT_AREA_PX + extra)
    }
}
