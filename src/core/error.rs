//! Round engine errors.

use thiserror::Error;

/// Round engine result type.
pub type Result<T> = std::result::Result<T, RoundError>;

/// Errors surfaced by the round engine.
///
/// `InvalidInput`, `MissingCollaborator` and attribute-source failures abort
/// the triggering call before any state changes. `GenerationStall` is
/// recovered from inside the engine by falling back to a known palette.
#[derive(Debug, Error)]
pub enum RoundError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("palette generation stalled after {attempts} attempts (min contrast {min_contrast})")]
    GenerationStall { attempts: u32, min_contrast: f32 },

    #[error("{collaborator} failed: {source}")]
    Collaborator {
        collaborator: &'static str,
        #[source]
        source: CollaboratorError,
    },

    #[error("config: {0}")]
    Config(String),
}

impl RoundError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Wrap a collaborator failure with the collaborator's name.
    pub fn collaborator(collaborator: &'static str, source: CollaboratorError) -> Self {
        Self::Collaborator {
            collaborator,
            source,
        }
    }
}

/// Failure reported by a host collaborator (shape backend, attribute source,
/// score store, display surface).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CollaboratorError {
    message: String,
}

impl CollaboratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
