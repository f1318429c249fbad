//! Round engine: wires the state machine, the answer oracle and the palette
//! generator to the host's collaborators.
//!
//! ## Example
//!
//! ```
//! use chroma_round::core::{CollaboratorError, RoundConfig};
//! use chroma_round::engine::RoundEngine;
//! use chroma_round::host::{
//!     AttributeSource, DisplayState, DisplaySurface, HostResult, MemoryScoreStore,
//!     ShapeBackend, ShapeParams,
//! };
//! use chroma_round::oracle::AttributeVector;
//!
//! struct Totals;
//! impl AttributeSource for Totals {
//!     fn attributes(&mut self) -> HostResult<AttributeVector> {
//!         AttributeVector::new([1.0, 4.0, 2.0, 3.0])
//!             .map_err(|e| CollaboratorError::new(e.to_string()))
//!     }
//! }
//!
//! struct Shape;
//! impl ShapeBackend for Shape {
//!     fn apply_params(&mut self, _: &ShapeParams) -> HostResult<()> { Ok(()) }
//!     fn regenerate(&mut self) -> HostResult<()> { Ok(()) }
//! }
//!
//! struct Screen;
//! impl DisplaySurface for Screen {
//!     fn present(&mut self, _: &DisplayState) -> HostResult<()> { Ok(()) }
//! }
//!
//! let mut engine = RoundEngine::builder(RoundConfig::new().with_seed(1))
//!     .attribute_source(Totals)
//!     .shape_backend(Shape)
//!     .score_store(MemoryScoreStore::with_best(0))
//!     .display(Screen)
//!     .build()
//!     .unwrap();
//!
//! engine.start().unwrap();
//! engine.tick(0.5).unwrap();
//! engine.submit_answer(2).unwrap();
//! assert_eq!(engine.state().score(), 1);
//! ```

mod round_engine;

pub use round_engine::{RoundEngine, RoundEngineBuilder};
