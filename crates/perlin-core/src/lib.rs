//! Core traits and types for gradient noise generation
//!
//! This crate provides the pieces every noise kernel shares: the error
//! type, the [`NoiseConfig`] that fully determines a kernel, the
//! [`NoiseKernel`] capability, the bounded LRU cache used to memoize kernel
//! construction, and batch evaluation over rectangular regions.
//!
//! # Example
//!
//! ```rust
//! use perlin_core::{evaluate, GradientVector, NoiseKernel, Result};
//!
//! struct Flat;
//!
//! impl NoiseKernel for Flat {
//!     fn width(&self) -> usize { 4 }
//!     fn height(&self) -> usize { 4 }
//!     fn frequency(&self) -> f64 { 0.5 }
//!     fn seed(&self) -> u64 { 0 }
//!     fn gradient(&self, _x: i64, _y: i64) -> Result<GradientVector> {
//!         Ok(GradientVector::new(0.0, 0.0))
//!     }
//! }
//!
//! let field = evaluate(&Flat, 0, 0, 4, 4).unwrap();
//! assert!(field.iter().flatten().all(|&v| v == 0.0));
//! ```

pub mod batch;
pub mod cache;
pub mod config;
pub mod error;
pub mod kernels;
pub mod math;

// Re-export core types
pub use error::{Error, Result};

pub use batch::{evaluate, value_range};
#[cfg(feature = "parallel")]
pub use batch::evaluate_parallel;
pub use cache::{BoundedCache, CacheStats};
pub use config::{field_len, validate_frequency, FractalParams, NoiseConfig, NoiseConfigBuilder};
pub use kernels::NoiseKernel;
pub use math::{fade, lerp, GradientVector};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        evaluate, BoundedCache, Error, FractalParams, GradientVector, NoiseConfig, NoiseKernel,
        Result,
    };
}
