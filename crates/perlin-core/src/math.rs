//! Mathematical utilities for gradient noise
//!
//! This module provides the small numeric building blocks shared by every
//! noise kernel: the gradient vector type, the quintic fade curve and
//! linear interpolation.

use serde::{Deserialize, Serialize};

/// A 2D gradient vector with both components in `[-1, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GradientVector {
    pub x: f64,
    pub y: f64,
}

impl GradientVector {
    /// Create a new gradient vector
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product with the offset vector `(dx, dy)`
    #[inline]
    pub fn dot(&self, dx: f64, dy: f64) -> f64 {
        self.x * dx + self.y * dy
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`
///
/// Has zero first and second derivatives at `t = 0` and `t = 1`, which
/// hides the lattice structure in the interpolated field.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f64, b: f64, alpha: f64) -> f64 {
    a + alpha * (b - a)
}
