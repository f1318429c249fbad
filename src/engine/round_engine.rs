use tracing::{debug, error, info, warn};

use crate::color::{HarmonyGenerator, Palette, PaletteGenerator};
use crate::core::{Result, RoundConfig, RoundError, RoundRng};
use crate::host::{
    AttributeSource, DisplayState, DisplaySurface, ScoreStore, ShapeBackend, ShapeParams,
};
use crate::oracle::{largest_index, ButtonIndex};
use crate::round::{AnswerOutcome, EndReason, RoundEvent, RoundEvents, RoundState, Transition};

const ATTRIBUTE_SOURCE: &str = "attribute source";
const SHAPE_BACKEND: &str = "shape backend";
const SCORE_STORE: &str = "score store";
const DISPLAY: &str = "display surface";

/// Orchestrates a round for a frame-driven host.
///
/// The host calls [`tick`](Self::tick) once per frame and
/// [`submit_answer`](Self::submit_answer) on button presses. Every call
/// makes at most one state transition, pushes a fresh [`DisplayState`] to
/// the display surface and returns the events it produced.
///
/// Single-threaded: the engine assumes one owner drives all calls.
pub struct RoundEngine {
    config: RoundConfig,
    state: RoundState,
    palette: Palette,
    best_score: Option<u32>,
    error_log: Vec<String>,

    generator: Box<dyn PaletteGenerator>,
    shape_rng: RoundRng,

    attributes: Option<Box<dyn AttributeSource>>,
    backend: Option<Box<dyn ShapeBackend>>,
    scores: Option<Box<dyn ScoreStore>>,
    display: Option<Box<dyn DisplaySurface>>,
}

/// Builder for a [`RoundEngine`].
///
/// Collaborators left unset are reported as `MissingCollaborator` by the
/// operations that need them. The score store is optional.
pub struct RoundEngineBuilder {
    config: RoundConfig,
    generator: Option<Box<dyn PaletteGenerator>>,
    attributes: Option<Box<dyn AttributeSource>>,
    backend: Option<Box<dyn ShapeBackend>>,
    scores: Option<Box<dyn ScoreStore>>,
    display: Option<Box<dyn DisplaySurface>>,
}

impl RoundEngineBuilder {
    pub fn new(config: RoundConfig) -> Self {
        Self {
            config,
            generator: None,
            attributes: None,
            backend: None,
            scores: None,
            display: None,
        }
    }

    pub fn attribute_source(mut self, source: impl AttributeSource + 'static) -> Self {
        self.attributes = Some(Box::new(source));
        self
    }

    pub fn shape_backend(mut self, backend: impl ShapeBackend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    pub fn score_store(mut self, store: impl ScoreStore + 'static) -> Self {
        self.scores = Some(Box::new(store));
        self
    }

    pub fn display(mut self, display: impl DisplaySurface + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    /// Replace the default [`HarmonyGenerator`].
    pub fn generator(mut self, generator: impl PaletteGenerator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    /// Validate the config and build the engine.
    pub fn build(self) -> Result<RoundEngine> {
        self.config.validate()?;

        let rng = match self.config.seed {
            Some(seed) => RoundRng::new(seed),
            None => RoundRng::from_entropy(),
        };
        let generator = match self.generator {
            Some(generator) => generator,
            None => Box::new(HarmonyGenerator::from_config(
                rng.for_context("palette"),
                &self.config,
            )),
        };

        debug!(seed = rng.seed(), "round engine built");

        Ok(RoundEngine {
            state: RoundState::new(self.config.initial_time),
            palette: Palette::default(),
            best_score: None,
            error_log: Vec::new(),
            generator,
            shape_rng: rng.for_context("shape"),
            attributes: self.attributes,
            backend: self.backend,
            scores: self.scores,
            display: self.display,
            config: self.config,
        })
    }
}

impl RoundEngine {
    /// Start building an engine.
    pub fn builder(config: RoundConfig) -> RoundEngineBuilder {
        RoundEngineBuilder::new(config)
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// The palette currently painted on the buttons.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Best score as last read from (or written to) the score store.
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    /// Every error reported so far, oldest first.
    #[must_use]
    pub fn error_log(&self) -> &[String] {
        &self.error_log
    }

    /// Snapshot of what the display surface is showing.
    #[must_use]
    pub fn current_display_state(&self) -> DisplayState {
        DisplayState::project(&self.state, &self.palette, self.best_score, &self.error_log)
    }

    // === Operations ===

    /// Begin a fresh round.
    ///
    /// Resets the timer and score, reads the best score, generates the first
    /// palette and asks the shape backend to apply it and regenerate.
    pub fn start(&mut self) -> Result<RoundEvents> {
        self.require_display()?;
        if self.backend.is_none() {
            return Err(self.reject(RoundError::MissingCollaborator(SHAPE_BACKEND)));
        }

        self.state = RoundState::new(self.config.initial_time);
        self.best_score = self.read_best_score();

        let mut events = RoundEvents::new();
        events.push(RoundEvent::Started {
            initial_time: self.config.initial_time,
            best_score: self.best_score,
        });
        self.refresh_palette(&mut events);

        info!(
            initial_time = self.config.initial_time,
            best_score = ?self.best_score,
            "round started"
        );

        self.present();
        Ok(events)
    }

    /// Advance the countdown by `dt` seconds.
    ///
    /// A no-op once the round has ended, whatever `dt` is.
    pub fn tick(&mut self, dt: f32) -> Result<RoundEvents> {
        self.require_display()?;

        let mut events = RoundEvents::new();
        if !self.state.is_active() {
            return Ok(events);
        }
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(self.reject(RoundError::invalid(format!(
                "tick delta must be a non-negative number, got {dt}"
            ))));
        }

        let shown = self.state.displayed_seconds();
        let transition = self.state.tick(dt);
        if self.state.displayed_seconds() != shown {
            debug!(seconds = self.state.displayed_seconds(), "timer display changed");
        }
        if let Transition::Ended(reason) = transition {
            self.finish(reason, &mut events);
        }

        self.present();
        Ok(events)
    }

    /// Judge a press of the 1-based button `index`.
    ///
    /// A no-op once the round has ended. Invalid indices and unavailable
    /// attributes are rejected without touching the round.
    pub fn submit_answer(&mut self, index: u8) -> Result<RoundEvents> {
        self.require_display()?;

        let mut events = RoundEvents::new();
        if !self.state.is_active() {
            return Ok(events);
        }

        let submitted = match ButtonIndex::new(index) {
            Ok(button) => button,
            Err(err) => return Err(self.reject(err)),
        };
        if self.backend.is_none() {
            return Err(self.reject(RoundError::MissingCollaborator(SHAPE_BACKEND)));
        }
        let attributes = match self.attributes.as_mut() {
            Some(source) => source
                .attributes()
                .map_err(|source| RoundError::collaborator(ATTRIBUTE_SOURCE, source)),
            None => Err(RoundError::MissingCollaborator(ATTRIBUTE_SOURCE)),
        };
        let attributes = match attributes {
            Ok(attributes) => attributes,
            Err(err) => return Err(self.reject(err)),
        };

        let correct = largest_index(&attributes);
        let outcome = self.state.answer(submitted, correct, self.config.correct_bonus);
        debug!(%submitted, %correct, ?outcome, "answer judged");
        events.push(RoundEvent::AnswerJudged { submitted, correct });

        match outcome {
            AnswerOutcome::Correct => self.refresh_palette(&mut events),
            AnswerOutcome::Incorrect => self.finish(EndReason::IncorrectGuess, &mut events),
            AnswerOutcome::Ignored => {}
        }

        self.present();
        Ok(events)
    }

    // === Internals ===

    fn require_display(&mut self) -> Result<()> {
        if self.display.is_none() {
            return Err(self.reject(RoundError::MissingCollaborator(DISPLAY)));
        }
        Ok(())
    }

    /// Record a rejected call and hand the error back to the caller.
    fn reject(&mut self, err: RoundError) -> RoundError {
        warn!(error = %err, "call rejected");
        self.error_log.push(err.to_string());
        self.present();
        err
    }

    fn log_error(&mut self, err: &RoundError) {
        error!(error = %err, "collaborator failure");
        self.error_log.push(err.to_string());
    }

    /// A stall keeps the current palette and emits no `PaletteChanged`.
    fn refresh_palette(&mut self, events: &mut RoundEvents) {
        match self.generator.generate(self.config.min_contrast) {
            Ok(palette) => {
                self.palette = palette;
                events.push(RoundEvent::PaletteChanged(palette));
            }
            Err(err) => {
                warn!(error = %err, "keeping previous palette");
                self.error_log.push(err.to_string());
            }
        }

        let (low, high) = self.config.shape_param_range;
        let params = ShapeParams {
            palette: self.palette,
            color_balance: self.shape_rng.range_inclusive(low, high),
            shape: self.shape_rng.range_inclusive(low, high),
        };

        let applied = match self.backend.as_mut() {
            Some(backend) => backend
                .apply_params(&params)
                .and_then(|()| backend.regenerate())
                .map_err(|source| RoundError::collaborator(SHAPE_BACKEND, source)),
            None => Err(RoundError::MissingCollaborator(SHAPE_BACKEND)),
        };
        if let Err(err) = applied {
            self.log_error(&err);
        }
        events.push(RoundEvent::RegenerateShape(params));
    }

    fn read_best_score(&mut self) -> Option<u32> {
        let read = self.scores.as_mut()?.read_best_score();
        match read {
            Ok(best) => Some(best),
            Err(source) => {
                self.log_error(&RoundError::collaborator(SCORE_STORE, source));
                None
            }
        }
    }

    fn finish(&mut self, reason: EndReason, events: &mut RoundEvents) {
        let final_score = self.state.score();
        info!(%reason, final_score, "round ended");
        events.push(RoundEvent::Ended { reason, final_score });

        if self.scores.is_none() {
            warn!("no score store, best score not recorded");
            return;
        }
        let Some(previous) = self.read_best_score() else {
            return;
        };
        self.best_score = Some(previous);
        if final_score <= previous {
            debug!(final_score, previous, "best score stands");
            return;
        }

        let written = match self.scores.as_mut() {
            Some(store) => store.write_best_score(final_score),
            None => return,
        };
        match written {
            Ok(()) => {
                info!(previous, new = final_score, "new best score");
                self.best_score = Some(final_score);
                events.push(RoundEvent::BestScoreBeaten {
                    previous,
                    new: final_score,
                });
            }
            Err(source) => self.log_error(&RoundError::collaborator(SCORE_STORE, source)),
        }
    }

    fn present(&mut self) {
        let view = self.current_display_state();
        let presented = match self.display.as_mut() {
            Some(display) => display.present(&view),
            None => return,
        };
        if let Err(source) = presented {
            self.log_error(&RoundError::collaborator(DISPLAY, source));
        }
    }
}
