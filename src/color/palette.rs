//! The four button colors of a round.

use serde::{Deserialize, Serialize};

use super::hsv::{contrast, Hsv, Rgb};

/// Number of colors (and answer buttons) in a palette.
pub const PALETTE_SIZE: usize = 4;

/// Four colors, one per answer button, in button order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: [Hsv; PALETTE_SIZE],
}

impl Palette {
    #[must_use]
    pub const fn new(colors: [Hsv; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// The colors in HSV, in button order.
    #[must_use]
    pub fn colors(&self) -> &[Hsv; PALETTE_SIZE] {
        &self.colors
    }

    /// The colors converted to RGB, in button order.
    #[must_use]
    pub fn rgb(&self) -> [Rgb; PALETTE_SIZE] {
        self.colors.map(Hsv::to_rgb)
    }

    /// Smallest contrast between any two colors of the palette.
    #[must_use]
    pub fn min_pairwise_contrast(&self) -> f32 {
        let rgb = self.rgb();
        let mut min = f32::INFINITY;
        for i in 0..PALETTE_SIZE {
            for j in (i + 1)..PALETTE_SIZE {
                min = min.min(contrast(rgb[i], rgb[j]));
            }
        }
        min
    }
}

/// Fully saturated quarter hues: red, chartreuse, cyan, violet.
///
/// Used when generation stalls before any palette was produced.
impl Default for Palette {
    fn default() -> Self {
        Self::new([
            Hsv::new(0.0, 1.0, 1.0),
            Hsv::new(0.25, 1.0, 1.0),
            Hsv::new(0.5, 1.0, 1.0),
            Hsv::new(0.75, 1.0, 1.0),
        ])
    }
}
