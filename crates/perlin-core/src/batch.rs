//! Batch evaluation over rectangular regions
//!
//! Every cell of a region is independent, so evaluation is a plain nested
//! loop. With the `parallel` feature, [`evaluate_parallel`] spreads columns
//! across the rayon pool and returns exactly the same values.

use crate::{Error, NoiseKernel, Result};
use tracing::instrument;

/// Validate batch extents and convert them to sizes
fn extents(w: i64, h: i64) -> Result<(usize, usize)> {
    let w = usize::try_from(w).map_err(|_| Error::negative_extent("batch width", w))?;
    let h = usize::try_from(h).map_err(|_| Error::negative_extent("batch height", h))?;
    Ok((w, h))
}

/// Evaluate one column of a region
fn column<K: NoiseKernel + ?Sized>(kernel: &K, x: i64, y0: i64, h: usize) -> Result<Vec<f64>> {
    (0..h as i64).map(|dy| kernel.compute_at(x, y0 + dy)).collect()
}

/// Evaluate `kernel` over the `w x h` region starting at `(x0, y0)`
///
/// The result is indexed `[x][y]` relative to the region origin. Each cell
/// holds `kernel.compute_at(x0 + x, y0 + y)`.
///
/// # Errors
///
/// `InvalidConfiguration` for negative extents; any error from the kernel
/// (typically `IndexOutOfRange`) aborts the whole batch.
#[instrument(skip(kernel), fields(kernel_name = kernel.name()))]
pub fn evaluate<K: NoiseKernel + ?Sized>(
    kernel: &K,
    x0: i64,
    y0: i64,
    w: i64,
    h: i64,
) -> Result<Vec<Vec<f64>>> {
    let (w, h) = extents(w, h)?;
    (0..w as i64)
        .map(|dx| column(kernel, x0 + dx, y0, h))
        .collect()
}

/// Parallel variant of [`evaluate`]
#[cfg(feature = "parallel")]
#[instrument(skip(kernel), fields(kernel_name = kernel.name()))]
pub fn evaluate_parallel<K: NoiseKernel + ?Sized>(
    kernel: &K,
    x0: i64,
    y0: i64,
    w: i64,
    h: i64,
) -> Result<Vec<Vec<f64>>> {
    use rayon::prelude::*;

    let (w, h) = extents(w, h)?;
    (0..w as i64)
        .into_par_iter()
        .map(|dx| column(kernel, x0 + dx, y0, h))
        .collect()
}

/// Smallest and largest value of an evaluated field
///
/// Returns `None` for an empty field.
pub fn value_range(field: &[Vec<f64>]) -> Option<(f64, f64)> {
    field.iter().flatten().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
