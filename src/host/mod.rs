//! Host collaborators.
//!
//! The round engine owns no rendering, input, storage or geometry. The host
//! supplies these as trait objects when building the engine:
//!
//! - [`AttributeSource`]: the four totals the player is comparing
//! - [`ShapeBackend`]: applies palette and shape parameters, regenerates the shape
//! - [`ScoreStore`]: reads and writes the best score
//! - [`DisplaySurface`]: receives a [`DisplayState`] after every engine call
//!
//! Every collaborator call returns a `Result` so failures flow back to the
//! engine as values.

mod display;
mod memory;

pub use display::DisplayState;
pub use memory::MemoryScoreStore;

use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::core::CollaboratorError;
use crate::oracle::AttributeVector;

/// Result of a collaborator call.
pub type HostResult<T> = std::result::Result<T, CollaboratorError>;

/// Parameters handed to the shape backend on every palette refresh.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    /// Button colors, also used to paint the shape.
    pub palette: Palette,
    /// How the shape's area is split between the four colors.
    pub color_balance: f32,
    /// Shape variation parameter.
    pub shape: f32,
}

/// Supplies the attribute vector the current answer is judged against.
pub trait AttributeSource {
    /// Read the current totals. Fails when the backend is unavailable.
    fn attributes(&mut self) -> HostResult<AttributeVector>;
}

/// The procedural shape the player is looking at.
pub trait ShapeBackend {
    /// Apply a palette and shape parameters.
    fn apply_params(&mut self, params: &ShapeParams) -> HostResult<()>;

    /// Recompute the shape (and with it the attribute totals).
    fn regenerate(&mut self) -> HostResult<()>;
}

/// Persistent best-score record.
pub trait ScoreStore {
    fn read_best_score(&mut self) -> HostResult<u32>;

    fn write_best_score(&mut self, score: u32) -> HostResult<()>;
}

/// Outbound projection of the round for the host UI.
pub trait DisplaySurface {
    fn present(&mut self, state: &DisplayState) -> HostResult<()>;
}
