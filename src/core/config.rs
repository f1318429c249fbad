//! Round configuration.
//!
//! Every tunable of a round lives in `RoundConfig`: timer length, answer
//! bonus, palette constraints and the shape-parameter range. Hosts either use
//! the defaults, tweak them with the `with_*` builders, or load a TOML file:
//!
//! ```
//! use chroma_round::core::RoundConfig;
//!
//! let config = RoundConfig::from_toml_str(r#"
//!     initial_time = 30.0
//!     min_contrast = 0.3
//!     seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.initial_time, 30.0);
//! assert_eq!(config.correct_bonus, 2.0);
//! assert_eq!(config.seed, Some(7));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, RoundError};

/// Round configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Seconds on the clock when a round starts.
    pub initial_time: f32,

    /// Seconds added to the clock for each correct answer.
    pub correct_bonus: f32,

    /// Minimum pairwise contrast between palette colors.
    /// Contrast is the sum of absolute RGB channel differences, so the
    /// achievable maximum is 3.0.
    pub min_contrast: f32,

    /// Rejection-sampling cap for palette generation.
    pub max_generation_attempts: u32,

    /// Saturation sampling range, inclusive.
    pub saturation_range: (f32, f32),

    /// Value (brightness) sampling range, inclusive.
    pub value_range: (f32, f32),

    /// Range for the color-balance and shape parameters handed to the
    /// shape backend.
    pub shape_param_range: (f32, f32),

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            initial_time: 60.0,
            correct_bonus: 2.0,
            min_contrast: 0.4,
            max_generation_attempts: 10_000,
            saturation_range: (0.8, 1.0),
            value_range: (0.8, 1.0),
            shape_param_range: (0.0, 10.0),
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML. Missing keys take their default value.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| RoundError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| RoundError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Set the starting time.
    #[must_use]
    pub fn with_initial_time(mut self, seconds: f32) -> Self {
        self.initial_time = seconds;
        self
    }

    /// Set the bonus for a correct answer.
    #[must_use]
    pub fn with_correct_bonus(mut self, seconds: f32) -> Self {
        self.correct_bonus = seconds;
        self
    }

    /// Set the palette contrast threshold.
    #[must_use]
    pub fn with_min_contrast(mut self, contrast: f32) -> Self {
        self.min_contrast = contrast;
        self
    }

    /// Set the palette retry cap.
    #[must_use]
    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.max_generation_attempts = attempts;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_time.is_finite() && self.initial_time > 0.0) {
            return Err(RoundError::Config(format!(
                "initial_time must be positive, got {}",
                self.initial_time
            )));
        }
        if !(self.correct_bonus.is_finite() && self.correct_bonus >= 0.0) {
            return Err(RoundError::Config(format!(
                "correct_bonus must be non-negative, got {}",
                self.correct_bonus
            )));
        }
        if !(self.min_contrast.is_finite() && self.min_contrast >= 0.0) {
            return Err(RoundError::Config(format!(
                "min_contrast must be non-negative, got {}",
                self.min_contrast
            )));
        }
        if self.max_generation_attempts == 0 {
            return Err(RoundError::Config("max_generation_attempts must be at least 1".into()));
        }
        check_unit_range("saturation_range", self.saturation_range)?;
        check_unit_range("value_range", self.value_range)?;

        let (low, high) = self.shape_param_range;
        if !(low.is_finite() && high.is_finite() && low <= high) {
            return Err(RoundError::Config(format!(
                "shape_param_range must be an ordered finite range, got ({low}, {high})"
            )));
        }
        Ok(())
    }
}

fn check_unit_range(name: &str, (low, high): (f32, f32)) -> Result<()> {
    if (0.0..=1.0).contains(&low) && (0.0..=1.0).contains(&high) && low <= high {
        Ok(())
    } else {
        Err(RoundError::Config(format!(
            "{name} must be an ordered range within [0, 1], got ({low}, {high})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.initial_time, 60.0);
        assert_eq!(config.correct_bonus, 2.0);
        assert_eq!(config.min_contrast, 0.4);
        assert_eq!(config.max_generation_attempts, 10_000);
        assert_eq!(config.saturation_range, (0.8, 1.0));
        assert_eq!(config.value_range, (0.8, 1.0));
        assert_eq!(config.shape_param_range, (0.0, 10.0));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RoundConfig::new()
            .with_initial_time(10.0)
            .with_correct_bonus(1.5)
            .with_min_contrast(0.2)
            .with_max_generation_attempts(50)
            .with_seed(99);

        assert_eq!(config.initial_time, 10.0);
        assert_eq!(config.correct_bonus, 1.5);
        assert_eq!(config.min_contrast, 0.2);
        assert_eq!(config.max_generation_attempts, 50);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_toml_partial() {
        let config = RoundConfig::from_toml_str(
            r#"
            correct_bonus = 3.0
            saturation_range = [0.5, 0.9]
            "#,
        )
        .unwrap();

        assert_eq!(config.correct_bonus, 3.0);
        assert_eq!(config.saturation_range, (0.5, 0.9));
        assert_eq!(config.initial_time, 60.0);
    }

    #[test]
    fn test_toml_syntax_error() {
        let err = RoundConfig::from_toml_str("initial_time = ").unwrap_err();
        assert!(matches!(err, RoundError::Config(_)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(RoundConfig::new().with_initial_time(0.0).validate().is_err());
        assert!(RoundConfig::new().with_correct_bonus(-1.0).validate().is_err());
        assert!(RoundConfig::new().with_min_contrast(f32::NAN).validate().is_err());
        assert!(RoundConfig::new().with_max_generation_attempts(0).validate().is_err());

        let mut config = RoundConfig::new();
        config.value_range = (0.9, 0.1);
        assert!(config.validate().is_err());

        let mut config = RoundConfig::new();
        config.saturation_range = (0.5, 1.5);
        assert!(config.validate().is_err());

        let mut config = RoundConfig::new();
        config.shape_param_range = (5.0, 1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = RoundConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, RoundError::Config(_)));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = RoundConfig::new().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let restored: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
