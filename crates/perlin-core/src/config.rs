//! Configuration types for noise kernels
//!
//! A [`NoiseConfig`] fully determines a kernel's output: two configs with
//! identical fields always produce identical noise.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default frequency used by the application when none is given
pub const DEFAULT_FREQUENCY: f64 = 0.005;

/// Parameters of the multi-octave fractal compositor
///
/// Only consulted when fractal composition is requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    /// Amplitude of the first octave
    pub amplitude: f64,
    /// Number of octaves to sum
    pub octaves: u32,
    /// Per-octave amplitude multiplier
    pub persistence: f64,
    /// Per-octave frequency multiplier
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            octaves: 8,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl FractalParams {
    /// Check that the octave count and multipliers are usable
    pub fn validate(&self) -> Result<()> {
        if self.octaves < 1 {
            return Err(Error::invalid_octaves(self.octaves));
        }
        for (name, value) in [
            ("amplitude", self.amplitude),
            ("persistence", self.persistence),
            ("lacunarity", self.lacunarity),
        ] {
            if !value.is_finite() {
                return Err(Error::non_finite(name));
            }
        }
        Ok(())
    }
}

/// Full description of a noise kernel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Width of the noise domain
    pub width: i64,
    /// Height of the noise domain
    pub height: i64,
    /// Sampling frequency, must lie in `[0, 1]`
    pub frequency: f64,
    /// Seed of the gradient and permutation generators
    pub seed: u64,
    /// Fractal shaping parameters
    pub fractal: FractalParams,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            frequency: DEFAULT_FREQUENCY,
            seed: 0,
            fractal: FractalParams::default(),
        }
    }
}

impl NoiseConfig {
    /// Create a config for the given domain with default shaping parameters
    pub fn new(width: i64, height: i64, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            ..Default::default()
        }
    }

    /// Start a builder with default values
    pub fn builder() -> NoiseConfigBuilder {
        NoiseConfigBuilder::default()
    }

    /// Validate the config
    ///
    /// Fractal parameters are only checked when `want_fractal` is set.
    pub fn validate(&self, want_fractal: bool) -> Result<()> {
        self.domain()?;
        validate_frequency(self.frequency)?;
        if want_fractal {
            self.fractal.validate()?;
        }
        Ok(())
    }

    /// The validated domain size as unsigned extents
    ///
    /// Also checks that the bordered gradient field for the domain has an
    /// addressable length.
    pub fn domain(&self) -> Result<(usize, usize)> {
        let width = usize::try_from(self.width)
            .map_err(|_| Error::negative_extent("width", self.width))?;
        let height = usize::try_from(self.height)
            .map_err(|_| Error::negative_extent("height", self.height))?;
        field_len(width, height)?;
        Ok((width, height))
    }

    /// Parse a config from JSON, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Number of gradients in the bordered field of a `width x height` domain
///
/// `(width + 2) * (height + 2)`, or `InvalidConfiguration` if that
/// overflows `usize`.
pub fn field_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_add(2)
        .zip(height.checked_add(2))
        .and_then(|(w, h)| w.checked_mul(h))
        .ok_or_else(|| Error::domain_too_large(width, height))
}

/// Check that a frequency is finite and lies in `[0, 1]`
pub fn validate_frequency(frequency: f64) -> Result<()> {
    // NaN fails the range check as well
    if !(0.0..=1.0).contains(&frequency) {
        return Err(Error::invalid_frequency(frequency));
    }
    Ok(())
}

/// Builder for [`NoiseConfig`]
#[derive(Debug, Clone, Default)]
pub struct NoiseConfigBuilder {
    config: NoiseConfig,
    want_fractal: bool,
}

impl NoiseConfigBuilder {
    /// Sets the domain size
    pub fn size(mut self, width: i64, height: i64) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Sets the sampling frequency
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.config.frequency = frequency;
        self
    }

    /// Sets the generator seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets the amplitude of the first octave
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.config.fractal.amplitude = amplitude;
        self.want_fractal = true;
        self
    }

    /// Sets the number of octaves
    pub fn octaves(mut self, octaves: u32) -> Self {
        self.config.fractal.octaves = octaves;
        self.want_fractal = true;
        self
    }

    /// Sets the per-octave amplitude multiplier
    pub fn persistence(mut self, persistence: f64) -> Self {
        self.config.fractal.persistence = persistence;
        self.want_fractal = true;
        self
    }

    /// Sets the per-octave frequency multiplier
    pub fn lacunarity(mut self, lacunarity: f64) -> Self {
        self.config.fractal.lacunarity = lacunarity;
        self.want_fractal = true;
        self
    }

    /// Validate and return the config
    ///
    /// Fractal parameters are validated once any of them was set explicitly.
    pub fn build(self) -> Result<NoiseConfig> {
        self.config.validate(self.want_fractal)?;
        Ok(self.config)
    }
}
