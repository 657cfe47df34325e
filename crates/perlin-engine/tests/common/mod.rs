//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use perlin_engine::NoiseConfig;

/// Application defaults on a domain small enough for exhaustive checks
///
/// The default frequency keeps every octave of the default fractal inside
/// the gradient field, so simple kernels can be evaluated everywhere.
pub fn small_config(seed: u64) -> NoiseConfig {
    NoiseConfig::new(48, 32, seed)
}

/// Every `(want_improved, want_fractal)` combination
pub fn all_variants() -> [(bool, bool); 4] {
    [(false, false), (true, false), (false, true), (true, true)]
}

/// Whether every value lies in `[0, 1]`
pub fn in_unit_interval(field: &[Vec<f64>]) -> bool {
    field.iter().flatten().all(|v| (0.0..=1.0).contains(v))
}
