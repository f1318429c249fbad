//! Headless round simulator.
//!
//! Plays one round against a synthetic shape whose totals are redrawn on
//! every regeneration, with a bot that answers correctly with a given
//! probability after a fixed thinking time.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use chroma_round::host::HostResult;
use chroma_round::{
    largest_index, AttributeSource, AttributeVector, ButtonIndex, CollaboratorError, DisplayState,
    DisplaySurface, MemoryScoreStore, RoundConfig, RoundEngine, RoundEvent, RoundRng,
    ShapeBackend, ShapeParams,
};

#[derive(Parser, Debug)]
#[command(name = "round-sim", about = "Simulate a color-quiz round headlessly")]
struct Cli {
    /// TOML round config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config).
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that the bot picks the correct button.
    #[arg(long, default_value_t = 0.9)]
    accuracy: f64,

    /// Frame step in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Seconds the bot spends before each answer.
    #[arg(long, default_value_t = 1.5)]
    think: f32,

    /// Stored best score before the round.
    #[arg(long, default_value_t = 0)]
    best: u32,

    /// Stop after this many answers even if the round is still running.
    #[arg(long, default_value_t = 1000)]
    max_answers: u32,
}

type Totals = Rc<RefCell<[f32; 4]>>;

/// Synthetic shape: regeneration draws four fresh totals.
struct SimShape {
    totals: Totals,
    rng: RoundRng,
}

impl ShapeBackend for SimShape {
    fn apply_params(&mut self, _params: &ShapeParams) -> HostResult<()> {
        Ok(())
    }

    fn regenerate(&mut self) -> HostResult<()> {
        let mut totals = self.totals.borrow_mut();
        for total in totals.iter_mut() {
            *total = self.rng.range_inclusive(0.0, 100.0);
        }
        Ok(())
    }
}

struct SimAttributes(Totals);

impl AttributeSource for SimAttributes {
    fn attributes(&mut self) -> HostResult<AttributeVector> {
        AttributeVector::new(*self.0.borrow()).map_err(|e| CollaboratorError::new(e.to_string()))
    }
}

/// Keeps the last projection for the final summary.
#[derive(Clone, Default)]
struct SimDisplay(Rc<RefCell<Option<DisplayState>>>);

impl DisplaySurface for SimDisplay {
    fn present(&mut self, state: &DisplayState) -> HostResult<()> {
        *self.0.borrow_mut() = Some(state.clone());
        Ok(())
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).compact().init();

    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RoundConfig::load(path).context("loading round config")?,
        None => RoundConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    anyhow::ensure!(cli.dt > 0.0, "--dt must be positive");

    let seed = config.seed.unwrap_or_else(|| RoundRng::from_entropy().seed());
    config.seed = Some(seed);
    let root = RoundRng::new(seed);

    let totals: Totals = Rc::new(RefCell::new([0.0; 4]));
    let display = SimDisplay::default();
    let store = MemoryScoreStore::with_best(cli.best);

    let mut engine = RoundEngine::builder(config)
        .attribute_source(SimAttributes(totals.clone()))
        .shape_backend(SimShape {
            totals: totals.clone(),
            rng: root.for_context("sim-shape"),
        })
        .score_store(store.clone())
        .display(display.clone())
        .build()?;
    let mut bot = root.for_context("sim-bot");

    engine.start()?;

    let mut answers = 0;
    'round: while engine.state().is_active() && answers < cli.max_answers {
        let mut waited = 0.0;
        while waited < cli.think {
            engine.tick(cli.dt)?;
            if !engine.state().is_active() {
                break 'round;
            }
            waited += cli.dt;
        }

        let attributes = AttributeVector::new(*totals.borrow())?;
        let correct = largest_index(&attributes);
        let choice = if bot.gen_bool(cli.accuracy) {
            correct
        } else {
            let wrong: Vec<ButtonIndex> = ButtonIndex::all().filter(|b| *b != correct).collect();
            wrong[bot.gen_range_usize(0..wrong.len())]
        };

        for event in engine.submit_answer(choice.get())? {
            if let RoundEvent::BestScoreBeaten { previous, new } = event {
                println!("new best score: {new} (was {previous})");
            }
        }
        answers += 1;
    }

    let view = display.0.borrow().clone().unwrap_or_else(|| engine.current_display_state());
    println!("seed:    {seed}");
    println!("result:  {}", view.timer_text);
    println!("{}", view.score_text);
    println!("Best: {}", store.best());
    for line in &view.error_log {
        println!("error:   {line}");
    }
    Ok(())
}
