//! Round state machine.
//!
//! A round is either `Active` or `Ended`. `Ended` is terminal: every later
//! `tick` or answer leaves the state untouched. Each mutating call makes at
//! most one phase transition.

use serde::{Deserialize, Serialize};

use crate::oracle::ButtonIndex;

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The countdown reached zero.
    TimeUp,
    /// The player picked a button that was not the largest attribute.
    IncorrectGuess,
}

impl EndReason {
    /// Player-facing text for the end reason.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            EndReason::TimeUp => "Time's up!",
            EndReason::IncorrectGuess => "Incorrect guess!",
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Round phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Active,
    Ended(EndReason),
}

/// Result of a state mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// State unchanged or changed without leaving `Active`.
    None,
    /// The round just ended.
    Ended(EndReason),
}

/// Outcome of a judged answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    /// Score and timer were increased.
    Correct,
    /// The round ended.
    Incorrect,
    /// The round had already ended; nothing changed.
    Ignored,
}

/// Timer, score and phase of a single round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    time_remaining: f32,
    score: u32,
    phase: RoundPhase,
    last_correct: Option<ButtonIndex>,
}

impl RoundState {
    /// A fresh active round with `initial_time` seconds on the clock.
    #[must_use]
    pub fn new(initial_time: f32) -> Self {
        Self {
            time_remaining: initial_time,
            score: 0,
            phase: RoundPhase::Active,
            last_correct: None,
        }
    }

    /// Seconds left. May be negative once the final tick overshoots.
    #[must_use]
    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    /// End reason, if the round has ended.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            RoundPhase::Active => None,
            RoundPhase::Ended(reason) => Some(reason),
        }
    }

    /// The correct button for the most recently judged attribute vector.
    #[must_use]
    pub fn last_correct(&self) -> Option<ButtonIndex> {
        self.last_correct
    }

    /// Whole seconds shown to the player: rounded half away from zero,
    /// never negative.
    #[must_use]
    pub fn displayed_seconds(&self) -> u32 {
        self.time_remaining.round().max(0.0) as u32
    }

    /// Advance the countdown by `dt` seconds.
    ///
    /// Ends the round when the resulting time is at or below zero.
    pub fn tick(&mut self, dt: f32) -> Transition {
        if !self.is_active() {
            return Transition::None;
        }

        self.time_remaining -= dt;
        if self.time_remaining <= 0.0 {
            self.end(EndReason::TimeUp)
        } else {
            Transition::None
        }
    }

    /// Judge `submitted` against `correct`.
    ///
    /// A correct answer scores a point and adds `bonus` seconds; a wrong one
    /// ends the round.
    pub fn answer(&mut self, submitted: ButtonIndex, correct: ButtonIndex, bonus: f32) -> AnswerOutcome {
        if !self.is_active() {
            return AnswerOutcome::Ignored;
        }

        self.last_correct = Some(correct);
        if submitted == correct {
            self.score += 1;
            self.time_remaining += bonus;
            AnswerOutcome::Correct
        } else {
            self.end(EndReason::IncorrectGuess);
            AnswerOutcome::Incorrect
        }
    }

    fn end(&mut self, reason: EndReason) -> Transition {
        self.phase = RoundPhase::Ended(reason);
        Transition::Ended(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(i: u8) -> ButtonIndex {
        ButtonIndex::new(i).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = RoundState::new(60.0);
        assert_eq!(state.time_remaining(), 60.0);
        assert_eq!(state.score(), 0);
        assert!(state.is_active());
        assert_eq!(state.end_reason(), None);
        assert_eq!(state.last_correct(), None);
    }

    #[test]
    fn test_tick_counts_down() {
        let mut state = RoundState::new(60.0);
        assert_eq!(state.tick(1.5), Transition::None);
        assert!((state.time_remaining() - 58.5).abs() < 1e-5);
        assert!(state.is_active());
    }

    #[test]
    fn test_tick_to_zero_ends() {
        let mut state = RoundState::new(1.0);
        assert_eq!(state.tick(1.0), Transition::Ended(EndReason::TimeUp));
        assert_eq!(state.end_reason(), Some(EndReason::TimeUp));
        assert!(!state.is_active());
    }

    #[test]
    fn test_ended_is_terminal() {
        let mut state = RoundState::new(1.0);
        state.tick(1.5);
        let snapshot = state.clone();

        assert_eq!(state.tick(1.0), Transition::None);
        assert_eq!(state.answer(button(1), button(1), 2.0), AnswerOutcome::Ignored);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_correct_answer() {
        let mut state = RoundState::new(60.0);
        assert_eq!(state.answer(button(3), button(3), 2.0), AnswerOutcome::Correct);
        assert_eq!(state.score(), 1);
        assert!((state.time_remaining() - 62.0).abs() < 1e-5);
        assert_eq!(state.last_correct(), Some(button(3)));
        assert!(state.is_active());
    }

    #[test]
    fn test_wrong_answer_ends() {
        let mut state = RoundState::new(60.0);
        assert_eq!(state.answer(button(1), button(2), 2.0), AnswerOutcome::Incorrect);
        assert_eq!(state.end_reason(), Some(EndReason::IncorrectGuess));
        assert_eq!(state.last_correct(), Some(button(2)));
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_displayed_seconds() {
        assert_eq!(RoundState::new(2.4).displayed_seconds(), 2);
        assert_eq!(RoundState::new(2.5).displayed_seconds(), 3);
        assert_eq!(RoundState::new(59.6).displayed_seconds(), 60);

        let mut state = RoundState::new(0.25);
        state.tick(0.75);
        assert!((state.time_remaining() + 0.5).abs() < 1e-6);
        assert_eq!(state.displayed_seconds(), 0);
    }

    #[test]
    fn test_end_reason_messages() {
        assert_eq!(EndReason::TimeUp.message(), "Time's up!");
        assert_eq!(EndReason::IncorrectGuess.to_string(), "Incorrect guess!");
    }
}
