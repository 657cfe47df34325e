//! Error types for gradient noise generation
//!
//! Provides a unified error type for all perlin crates.

use thiserror::Error;

/// Core error type for noise kernel construction and evaluation
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value is outside its permitted domain
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A gradient was requested outside the field's extended domain
    #[error("Index out of range: ({x}, {y}) outside gradient field of {width}x{height}")]
    IndexOutOfRange {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// Malformed serialized configuration
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a frequency outside `[0, 1]`
    pub fn invalid_frequency(frequency: f64) -> Self {
        Self::InvalidConfiguration(format!("Frequency {frequency} must be in [0, 1]"))
    }

    /// Create an error for a negative domain or batch extent
    pub fn negative_extent(name: &str, value: i64) -> Self {
        Self::InvalidConfiguration(format!("{name} must be non-negative, got {value}"))
    }

    /// Create an error for a domain whose bordered field size overflows
    pub fn domain_too_large(width: usize, height: usize) -> Self {
        Self::InvalidConfiguration(format!(
            "Domain {width}x{height} is too large for a gradient field"
        ))
    }

    /// Create an error for a fractal octave count below one
    pub fn invalid_octaves(octaves: u32) -> Self {
        Self::InvalidConfiguration(format!("Octaves must be at least 1, got {octaves}"))
    }

    /// Create an error for a permutation table of the wrong length
    pub fn invalid_permutation_len(expected: usize, actual: usize) -> Self {
        Self::InvalidConfiguration(format!(
            "Permutation table must have {expected} entries, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf parameters
    pub fn non_finite(name: &str) -> Self {
        Self::InvalidConfiguration(format!("{name} must be finite"))
    }
}
