//! Kernel factory and value field rendering
//!
//! The entry points used by applications:
//!
//! - [`KernelFactory::build_kernel`] composes a normalized kernel from a
//!   [`NoiseConfig`], reusing cached gradient fields and improved kernels
//! - [`evaluate`] samples a kernel over a rectangle
//! - [`last_kernel`] and [`KernelFactory::rebuild`] let a caller skip
//!   redraws when nothing changed
//! - [`color::render`] turns a value field into a terrain-colored image
//!
//! # Example
//!
//! ```rust
//! use perlin_engine::{color, evaluate, last_kernel, KernelFactory, LastKernel, NoiseConfig};
//!
//! let factory = KernelFactory::new();
//! let mut last = LastKernel::new();
//! let config = NoiseConfig { frequency: 0.05, ..NoiseConfig::new(32, 16, 42) };
//!
//! let kernel = factory.rebuild(&config, true, true, &mut last).unwrap().unwrap();
//! let field = evaluate(&kernel, 0, 0, 32, 16).unwrap();
//! let image = color::render(&field).unwrap();
//! assert_eq!(image.len(), 32 * 16);
//!
//! // Same configuration again: nothing to redraw
//! assert!(factory.rebuild(&config, true, true, &mut last).unwrap().is_none());
//! assert!(last_kernel(&last).is_some());
//! ```

pub mod color;
pub mod factory;
pub mod last;

pub use color::{render, terrain, Rgb};
pub use factory::{FieldKey, ImprovedKey, KernelFactory, DEFAULT_CACHE_CAPACITY};
pub use last::{last_kernel, LastKernel};

// Re-export what callers need alongside the factory
#[cfg(feature = "parallel")]
pub use perlin_core::evaluate_parallel;
pub use perlin_core::{evaluate, value_range, Error, FractalParams, NoiseConfig, NoiseKernel, Result};
pub use perlin_kernels::Kernel;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        evaluate, last_kernel, Error, FractalParams, Kernel, KernelFactory, LastKernel,
        NoiseConfig, NoiseKernel, Result,
    };
}
