//! Color spaces and perceptual contrast.
//!
//! All channels are normalized to `[0, 1]`. Hue wraps: `1.0` is the same
//! hue as `0.0`.

use serde::{Deserialize, Serialize};

/// Hue/saturation/value color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    /// Create a new HSV color. Hue is wrapped into `[0, 1)`.
    #[must_use]
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue: hue.rem_euclid(1.0),
            saturation,
            value,
        }
    }

    /// Convert to RGB using the standard sextant formula.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.value.clamp(0.0, 1.0);
        if s == 0.0 {
            return Rgb::new(v, v, v);
        }

        let h6 = self.hue.rem_euclid(1.0) * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u32 % 6 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}

/// Red/green/blue color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// 8-bit channels, for hosts that paint with byte colors.
    #[must_use]
    pub fn to_u8(self) -> [u8; 3] {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }

    /// `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Perceptual difference: sum of absolute channel differences, in `[0, 3]`.
#[must_use]
pub fn contrast(a: Rgb, b: Rgb) -> f32 {
    (a.r - b.r).abs() + (a.g - b.g).abs() + (a.b - b.b).abs()
}
