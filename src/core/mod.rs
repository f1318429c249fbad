//! Core engine types: RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! rounds, colors or buttons.

pub mod config;
pub mod error;
pub mod rng;

pub use config::RoundConfig;
pub use error::{CollaboratorError, Result, RoundError};
pub use rng::RoundRng;
