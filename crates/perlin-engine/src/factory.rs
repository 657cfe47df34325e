//! Kernel construction from configuration
//!
//! [`KernelFactory`] turns a [`NoiseConfig`] into a finished [`Kernel`]
//! chain, memoizing the two expensive steps:
//!
//! 1. gradient fields, keyed by `(seed, width, height)`
//! 2. improved kernels, keyed by the identity of the simple kernel they wrap
//!    (`seed`, `width`, `height`, `frequency`)
//!
//! Fractal and normalizing decorators are cheap and rebuilt on every call.

use crate::last::LastKernel;
use ordered_float::OrderedFloat;
use perlin_core::{BoundedCache, CacheStats, NoiseConfig, NoiseKernel, Result};
use perlin_kernels::{GradientField, ImprovedNoise, Kernel, SimpleNoise};
use tracing::{debug, instrument};

/// Entries kept by each cache unless configured otherwise
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Cache key of a gradient field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub seed: u64,
    pub width: usize,
    pub height: usize,
}

/// Cache key of an improved kernel: the identity of its simple kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImprovedKey {
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub frequency: OrderedFloat<f64>,
}

impl ImprovedKey {
    /// Key identifying `base`
    pub fn of(base: &SimpleNoise) -> Self {
        Self {
            seed: base.seed(),
            width: base.width(),
            height: base.height(),
            frequency: OrderedFloat(base.frequency()),
        }
    }
}

/// Builds noise kernels, reusing previously generated gradients and tables
///
/// # Example
///
/// ```rust
/// use perlin_core::{NoiseConfig, NoiseKernel};
/// use perlin_engine::KernelFactory;
///
/// let factory = KernelFactory::new();
/// let config = NoiseConfig::builder().size(64, 64).frequency(0.05).seed(9).build().unwrap();
///
/// let first = factory.build_kernel(&config, true, false).unwrap();
/// let second = factory.build_kernel(&config, true, false).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(factory.improved_cache_stats().hits, 1);
/// assert!(first.is_normalized());
/// ```
pub struct KernelFactory {
    fields: BoundedCache<FieldKey, GradientField>,
    improved: BoundedCache<ImprovedKey, ImprovedNoise>,
}

impl KernelFactory {
    /// Factory whose caches each hold [`DEFAULT_CACHE_CAPACITY`] entries
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Factory whose caches each hold `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: BoundedCache::new(capacity),
            improved: BoundedCache::new(capacity),
        }
    }

    /// Build a normalized kernel described by `config`
    ///
    /// The config is validated before any gradient is generated. The simple
    /// kernel is replaced by its permutation-hashed variant when
    /// `want_improved` is set, wrapped in a fractal compositor when
    /// `want_fractal` is set, and the result is always normalized.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for negative extents, a domain whose gradient
    /// field length overflows, a frequency outside `[0, 1]`, or (with
    /// `want_fractal`) invalid octave parameters.
    #[instrument(skip(self), level = "debug")]
    pub fn build_kernel(
        &self,
        config: &NoiseConfig,
        want_improved: bool,
        want_fractal: bool,
    ) -> Result<Kernel> {
        config.validate(want_fractal)?;
        let (width, height) = config.domain()?;

        let key = FieldKey {
            seed: config.seed,
            width,
            height,
        };
        let field = self
            .fields
            .try_get_or_create(key, |k| GradientField::generate(k.width, k.height, k.seed))?;
        let simple = SimpleNoise::from_field(field, config.frequency)?;

        let mut kernel = if want_improved {
            let improved = self
                .improved
                .get_or_create(ImprovedKey::of(&simple), |_| ImprovedNoise::new(&simple));
            Kernel::Improved(improved)
        } else {
            Kernel::from(simple)
        };

        if want_fractal {
            kernel = kernel.fractal(config.fractal)?;
        }
        let kernel = kernel.normalized();

        debug!(kernel = kernel.base().name(), width, height, "built kernel");
        Ok(kernel)
    }

    /// Build a kernel and record it in `last`
    ///
    /// Returns `Ok(None)` when the new kernel is configured exactly like the
    /// one already held by `last`, signalling that a redraw can be skipped.
    pub fn rebuild(
        &self,
        config: &NoiseConfig,
        want_improved: bool,
        want_fractal: bool,
        last: &mut LastKernel,
    ) -> Result<Option<Kernel>> {
        let kernel = self.build_kernel(config, want_improved, want_fractal)?;
        if last.get() == Some(&kernel) {
            debug!("configuration unchanged, skipping redraw");
            return Ok(None);
        }
        last.replace(kernel.clone());
        Ok(Some(kernel))
    }

    /// Hit/miss counters of the gradient field cache
    pub fn field_cache_stats(&self) -> CacheStats {
        self.fields.stats()
    }

    /// Hit/miss counters of the improved kernel cache
    pub fn improved_cache_stats(&self) -> CacheStats {
        self.improved.stats()
    }

    /// Drop every cached field and improved kernel
    pub fn clear(&self) {
        self.fields.clear();
        self.improved.clear();
    }
}

impl Default for KernelFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perlin_core::Error;

    fn config(seed: u64) -> NoiseConfig {
        NoiseConfig {
            frequency: 0.1,
            ..NoiseConfig::new(32, 32, seed)
        }
    }

    #[test]
    fn test_field_is_shared_between_variants() {
        let factory = KernelFactory::new();
        let simple = factory.build_kernel(&config(1), false, false).unwrap();
        let improved = factory.build_kernel(&config(1), true, false).unwrap();

        let (Kernel::Simple(s), Kernel::Improved(i)) = (simple.base(), improved.base()) else {
            panic!("unexpected base kernels");
        };
        assert!(std::sync::Arc::ptr_eq(s.field(), i.field()));

        let stats = factory.field_cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_improved_kernel_is_reused() {
        let factory = KernelFactory::new();
        let a = factory.build_kernel(&config(2), true, true).unwrap();
        let b = factory.build_kernel(&config(2), true, true).unwrap();
        assert!(a.base().ptr_eq(b.base()));
        assert_eq!(factory.improved_cache_stats().misses, 1);
    }

    #[test]
    fn test_frequency_is_part_of_improved_key() {
        let factory = KernelFactory::new();
        let a = factory.build_kernel(&config(3), true, false).unwrap();
        let retuned = NoiseConfig {
            frequency: 0.2,
            ..config(3)
        };
        let b = factory.build_kernel(&retuned, true, false).unwrap();
        assert!(!a.base().ptr_eq(b.base()));
        assert_eq!(factory.improved_cache_stats().misses, 2);
        assert_eq!(factory.field_cache_stats().misses, 1);
    }

    #[test]
    fn test_validates_before_generating() {
        let factory = KernelFactory::new();
        let bad = NoiseConfig {
            frequency: 1.5,
            ..config(4)
        };
        assert!(matches!(
            factory.build_kernel(&bad, false, false),
            Err(Error::InvalidConfiguration(_))
        ));
        assert_eq!(factory.field_cache_stats().entries, 0);
        assert_eq!(factory.field_cache_stats().misses, 0);
    }

    #[test]
    fn test_rejects_domain_too_large_for_field() {
        let factory = KernelFactory::new();
        for (width, height) in [(i64::MAX, 1), (1 << 32, 1 << 32)] {
            let huge = NoiseConfig::new(width, height, 0);
            assert!(matches!(
                factory.build_kernel(&huge, false, false),
                Err(Error::InvalidConfiguration(_))
            ));
        }
        assert_eq!(factory.field_cache_stats().misses, 0);
    }

    #[test]
    fn test_simple_fractal_can_leave_field() {
        // Octave frequencies 0.1 * 2^i pass 1 by the fifth octave
        let factory = KernelFactory::new();
        let kernel = factory.build_kernel(&config(8), false, true).unwrap();
        assert!(matches!(
            perlin_core::evaluate(&kernel, 0, 0, 32, 32),
            Err(Error::IndexOutOfRange { .. })
        ));

        let improved = factory.build_kernel(&config(8), true, true).unwrap();
        assert!(perlin_core::evaluate(&improved, 0, 0, 32, 32).is_ok());
    }

    #[test]
    fn test_fractal_octaves_checked_only_when_requested() {
        let factory = KernelFactory::new();
        let mut zero_octaves = config(5);
        zero_octaves.fractal.octaves = 0;
        assert!(factory.build_kernel(&zero_octaves, false, false).is_ok());
        assert!(factory.build_kernel(&zero_octaves, false, true).is_err());
    }

    #[test]
    fn test_decorator_chain() {
        let factory = KernelFactory::new();
        let kernel = factory.build_kernel(&config(6), true, true).unwrap();
        assert_eq!(kernel.name(), "normalized");
        let fractal = kernel.inner().unwrap();
        assert_eq!(fractal.name(), "fractal");
        assert_eq!(fractal.inner().unwrap().name(), "improved");
    }

    #[test]
    fn test_clear_empties_caches() {
        let factory = KernelFactory::with_capacity(2);
        factory.build_kernel(&config(7), true, false).unwrap();
        factory.clear();
        assert_eq!(factory.field_cache_stats().entries, 0);
        assert_eq!(factory.improved_cache_stats().entries, 0);
    }
}
