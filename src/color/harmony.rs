//! Square-harmony palette generation.
//!
//! Four hues spaced a quarter turn apart around a random base hue, each with
//! independently sampled saturation and value. Whole batches are rejected and
//! redrawn until every pair of colors clears the contrast threshold, up to a
//! configured number of attempts.

use tracing::debug;

use crate::core::{Result, RoundConfig, RoundError, RoundRng};

use super::hsv::Hsv;
use super::palette::{Palette, PALETTE_SIZE};

/// Hue step between neighboring palette colors (90 degrees).
pub const HUE_STEP: f32 = 1.0 / PALETTE_SIZE as f32;

/// Source of palettes for the round engine.
///
/// The engine only ever draws colors through this trait, so tests can swap in
/// a scripted generator.
pub trait PaletteGenerator {
    /// Produce four colors whose pairwise contrast is at least `min_contrast`.
    ///
    /// Returns `GenerationStall` when the generator gives up.
    fn generate(&mut self, min_contrast: f32) -> Result<Palette>;
}

/// Rejection-sampling square-harmony generator.
#[derive(Clone, Debug)]
pub struct HarmonyGenerator {
    rng: RoundRng,
    saturation_range: (f32, f32),
    value_range: (f32, f32),
    max_attempts: u32,
}

impl HarmonyGenerator {
    /// Create a generator with the default sampling ranges and retry cap.
    #[must_use]
    pub fn new(rng: RoundRng) -> Self {
        Self::from_config(rng, &RoundConfig::default())
    }

    /// Create a generator using the ranges and retry cap from `config`.
    #[must_use]
    pub fn from_config(rng: RoundRng, config: &RoundConfig) -> Self {
        Self {
            rng,
            saturation_range: config.saturation_range,
            value_range: config.value_range,
            max_attempts: config.max_generation_attempts.max(1),
        }
    }

    fn sample(&mut self) -> Palette {
        let base = self.rng.unit();
        let (s_lo, s_hi) = self.saturation_range;
        let (v_lo, v_hi) = self.value_range;

        let mut colors = [Hsv::new(0.0, 0.0, 0.0); PALETTE_SIZE];
        for (i, color) in colors.iter_mut().enumerate() {
            let hue = base + i as f32 * HUE_STEP;
            let saturation = self.rng.range_inclusive(s_lo, s_hi);
            let value = self.rng.range_inclusive(v_lo, v_hi);
            *color = Hsv::new(hue, saturation, value);
        }
        Palette::new(colors)
    }
}

impl PaletteGenerator for HarmonyGenerator {
    fn generate(&mut self, min_contrast: f32) -> Result<Palette> {
        for attempt in 1..=self.max_attempts {
            let palette = self.sample();
            if palette.min_pairwise_contrast() >= min_contrast {
                debug!(attempt, min_contrast, "palette accepted");
                return Ok(palette);
            }
        }

        Err(RoundError::GenerationStall {
            attempts: self.max_attempts,
            min_contrast,
        })
    }
}
