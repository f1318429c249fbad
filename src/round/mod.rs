//! Round session: the timer/score state machine and the events it produces.

pub mod event;
pub mod state;

pub use event::{RoundEvent, RoundEvents};
pub use state::{AnswerOutcome, EndReason, RoundPhase, RoundState, Transition};
