//! Events emitted by the round engine.
//!
//! Every engine call returns the events it produced, in order. Hosts use them
//! to drive effects the engine does not own (sounds, popups, analytics).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color::Palette;
use crate::host::ShapeParams;
use crate::oracle::ButtonIndex;

use super::state::EndReason;

/// Something that happened during an engine call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A new round began.
    Started {
        initial_time: f32,
        best_score: Option<u32>,
    },

    /// An answer was judged against the current attributes.
    AnswerJudged {
        submitted: ButtonIndex,
        correct: ButtonIndex,
    },

    /// The button palette changed.
    PaletteChanged(Palette),

    /// The shape backend was asked to apply new parameters and regenerate.
    RegenerateShape(ShapeParams),

    /// The round ended.
    Ended { reason: EndReason, final_score: u32 },

    /// The final score beat the stored best and a write was requested.
    BestScoreBeaten { previous: u32, new: u32 },
}

impl RoundEvent {
    /// Check if this is an `Ended` event.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, RoundEvent::Ended { .. })
    }
}

/// Events produced by one engine call. Rarely more than four.
pub type RoundEvents = SmallVec<[RoundEvent; 4]>;
