//! # chroma-round
//!
//! Round logic for a short timed color-matching quiz.
//!
//! A procedurally varying shape exposes four numeric totals. The player has
//! to press the colored button matching the largest one. Correct answers
//! score a point, add time and repaint the buttons with a fresh palette; a
//! wrong answer or an empty clock ends the round.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: Rendering, input, storage and shape generation are
//!    collaborators injected at construction, never looked up at call time.
//!
//! 2. **Errors Are Values**: Every collaborator call returns a `Result`.
//!    Rejected calls leave the round untouched and land in the error log.
//!
//! 3. **Deterministic**: All randomness comes from a seeded ChaCha8 stream,
//!    so a seed reproduces every palette and shape parameter.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `color`: HSV/RGB colors, contrast, square-harmony palette generation
//! - `oracle`: attribute vectors and the largest-total answer oracle
//! - `round`: round state machine and events
//! - `host`: collaborator traits and the display projection
//! - `engine`: `RoundEngine`, the orchestrator hosts drive each frame

pub mod color;
pub mod core;
pub mod engine;
pub mod host;
pub mod oracle;
pub mod round;

// Re-export commonly used types
pub use crate::core::{CollaboratorError, Result, RoundConfig, RoundError, RoundRng};

pub use crate::color::{contrast, HarmonyGenerator, Hsv, Palette, PaletteGenerator, Rgb};

pub use crate::oracle::{largest_index, AttributeVector, ButtonIndex};

pub use crate::round::{AnswerOutcome, EndReason, RoundEvent, RoundEvents, RoundPhase, RoundState};

pub use crate::host::{
    AttributeSource, DisplayState, DisplaySurface, MemoryScoreStore, ScoreStore, ShapeBackend,
    ShapeParams,
};

pub use crate::engine::{RoundEngine, RoundEngineBuilder};
