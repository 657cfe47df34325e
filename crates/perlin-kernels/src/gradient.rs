//! Seeded gradient fields
//!
//! A field covers the noise domain plus a one-cell border on every side, so
//! each lattice cell of `[0, width) x [0, height)` can reach all four of its
//! corner gradients. Visual layout for a `w x h` domain:
//!
//! ```text
//!  (0, h+1)  ...........................  (w+1, h+1)
//!            +-------------------------+
//!            | (1, h)    ...    (w, h) |
//!            |       noise domain      |
//!            | (1, 1)    ...    (w, 1) |
//!            +-------------------------+
//!  (0, 0)    ...........................  (w+1, 0)
//! ```

use perlin_core::{field_len, Error, GradientVector, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;
use tracing::debug;

/// Dense row-major grid of random gradient vectors
#[derive(Clone)]
pub struct GradientField {
    width: usize,
    height: usize,
    seed: u64,
    gradients: Vec<GradientVector>,
}

impl GradientField {
    /// Generate `(width + 2) * (height + 2)` gradients from `seed`
    ///
    /// Each component is drawn uniformly from `[-1, 1]`; the same seed always
    /// yields the same field.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the field length overflows `usize`.
    pub fn generate(width: usize, height: usize, seed: u64) -> Result<Self> {
        let len = field_len(width, height)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let gradients = (0..len)
            .map(|_| GradientVector::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)))
            .collect();

        debug!(width, height, seed, len, "generated gradient field");
        Ok(Self {
            width,
            height,
            seed,
            gradients,
        })
    }

    /// Gradient at `(x, y)` of the bordered grid
    ///
    /// Valid coordinates are `x` in `[0, width + 1]` and `y` in
    /// `[0, height + 1]`; anything else is `IndexOutOfRange`.
    pub fn get(&self, x: i64, y: i64) -> Result<GradientVector> {
        let stride = self.width + 2;
        let in_range = |v: i64, limit: usize| usize::try_from(v).ok().filter(|&v| v < limit);

        match (in_range(x, stride), in_range(y, self.height + 2)) {
            (Some(col), Some(row)) => Ok(self.gradients[stride * row + col]),
            _ => Err(Error::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Gradient at a flat index, wrapped around the field length
    pub fn wrapped(&self, index: usize) -> GradientVector {
        self.gradients[index % self.gradients.len()]
    }

    /// Width of the noise domain (without border)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the noise domain (without border)
    pub fn height(&self) -> usize {
        self.height
    }

    /// Seed the field was generated from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of gradients including the border
    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    /// Always false, the border guarantees at least four gradients
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    /// All gradients in row-major order
    pub fn as_slice(&self) -> &[GradientVector] {
        &self.gradients
    }
}

// Fields are a pure function of (width, height, seed)
impl PartialEq for GradientField {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.seed == other.seed
    }
}

impl fmt::Debug for GradientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientField")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("seed", &self.seed)
            .field("len", &self.gradients.len())
            .finish()
    }
}
