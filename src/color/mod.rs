//! Button palettes.
//!
//! - `hsv`: HSV/RGB color types and the contrast metric
//! - `palette`: the four-color `Palette`
//! - `harmony`: square-harmony generator behind the `PaletteGenerator` trait

pub mod harmony;
pub mod hsv;
pub mod palette;

pub use harmony::{HarmonyGenerator, PaletteGenerator, HUE_STEP};
pub use hsv::{contrast, Hsv, Rgb};
pub use palette::{Palette, PALETTE_SIZE};
