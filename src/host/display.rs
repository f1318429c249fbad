//! Display projection pushed to the host UI after every engine call.

use serde::{Deserialize, Serialize};

use crate::color::{Palette, Rgb, PALETTE_SIZE};
use crate::round::RoundState;

/// Everything the host UI shows for a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    /// `"Time: N"` while active, the end reason once ended.
    pub timer_text: String,
    pub score_text: String,
    /// Empty when no best score is known.
    pub best_score_text: String,
    pub button_colors: [Rgb; PALETTE_SIZE],
    pub buttons_enabled: bool,
    pub end_popup_visible: bool,
    /// Errors reported since the round was built, oldest first.
    pub error_log: Vec<String>,
}

impl DisplayState {
    /// Project a round into display text and colors.
    #[must_use]
    pub fn project(
        state: &RoundState,
        palette: &Palette,
        best_score: Option<u32>,
        error_log: &[String],
    ) -> Self {
        let timer_text = match state.end_reason() {
            None => format!("Time: {}", state.displayed_seconds()),
            Some(reason) => reason.message().to_string(),
        };

        Self {
            timer_text,
            score_text: format!("Score: {}", state.score()),
            best_score_text: best_score.map(|b| format!("Best: {b}")).unwrap_or_default(),
            button_colors: palette.rgb(),
            buttons_enabled: state.is_active(),
            end_popup_visible: !state.is_active(),
            error_log: error_log.to_vec(),
        }
    }
}
