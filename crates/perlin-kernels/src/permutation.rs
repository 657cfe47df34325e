//! Permutation tables for hashed gradient lookup
//!
//! The table holds a shuffled copy of `0..=255` followed by a second copy of
//! the same sequence, the classic layout of the reference algorithm.

use perlin_core::{Error, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

/// Number of distinct entries in a permutation
pub const PERMUTATION_SIZE: usize = 256;

/// Total table length, the permutation stored twice
pub const TABLE_LEN: usize = PERMUTATION_SIZE * 2;

const MASK: i64 = PERMUTATION_SIZE as i64 - 1;

/// 512-entry lookup table hashing lattice coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    table: Vec<usize>,
}

impl PermutationTable {
    /// Shuffle `0..=255` with a generator seeded from `seed`
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut lower: Vec<usize> = (0..PERMUTATION_SIZE).collect();
        lower.shuffle(&mut rng);

        let mut table = Vec::with_capacity(TABLE_LEN);
        table.extend_from_slice(&lower);
        table.extend_from_slice(&lower);

        debug!(seed, "built permutation table");
        Self { table }
    }

    /// Adopt an explicit table
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` unless the table has exactly 512 entries, the
    /// first 256 are a permutation of `0..=255` and the rest repeat them.
    pub fn from_vec(table: Vec<usize>) -> Result<Self> {
        if table.len() != TABLE_LEN {
            return Err(Error::invalid_permutation_len(TABLE_LEN, table.len()));
        }

        let (lower, upper) = table.split_at(PERMUTATION_SIZE);
        let mut seen = [false; PERMUTATION_SIZE];
        for &value in lower {
            if value >= PERMUTATION_SIZE || std::mem::replace(&mut seen[value], true) {
                return Err(Error::InvalidConfiguration(format!(
                    "Permutation table value {value} is out of range or repeated"
                )));
            }
        }
        if lower != upper {
            return Err(Error::InvalidConfiguration(
                "Upper half of permutation table must repeat the lower half".to_string(),
            ));
        }

        Ok(Self { table })
    }

    /// Hash a lattice point: `table[(x + table[y & 255]) & 255]`
    ///
    /// Total over all coordinates, negative ones included.
    #[inline]
    pub fn hash(&self, x: i64, y: i64) -> usize {
        let row = self.table[(y & MASK) as usize];
        self.table[(x.wrapping_add(row as i64) & MASK) as usize]
    }

    /// Number of entries, always 512
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false for a constructed table
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All entries
    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(values: &[usize]) -> bool {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted == (0..PERMUTATION_SIZE).collect::<Vec<_>>()
    }

    #[test]
    fn test_shuffled_is_bijective_and_duplicated() {
        for seed in [0, 1, 42, u64::MAX] {
            let table = PermutationTable::shuffled(seed);
            assert_eq!(table.len(), TABLE_LEN);
            let (lower, upper) = table.as_slice().split_at(PERMUTATION_SIZE);
            assert!(is_permutation(lower));
            assert_eq!(lower, upper);
        }
    }

    #[test]
    fn test_shuffled_is_deterministic() {
        assert_eq!(PermutationTable::shuffled(7), PermutationTable::shuffled(7));
        assert_ne!(PermutationTable::shuffled(7), PermutationTable::shuffled(8));
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        let err = PermutationTable::from_vec((0..PERMUTATION_SIZE).collect()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(err.to_string().contains("512"));
    }

    #[test]
    fn test_from_vec_rejects_repeats_and_mismatched_halves() {
        let mut repeated: Vec<usize> = (0..PERMUTATION_SIZE).chain(0..PERMUTATION_SIZE).collect();
        repeated[1] = 0;
        repeated[PERMUTATION_SIZE + 1] = 0;
        assert!(PermutationTable::from_vec(repeated).is_err());

        let sorted_upper: Vec<usize> = (0..PERMUTATION_SIZE)
            .rev()
            .chain(0..PERMUTATION_SIZE)
            .collect();
        assert!(PermutationTable::from_vec(sorted_upper).is_err());
    }

    #[test]
    fn test_identity_hash() {
        let identity: Vec<usize> = (0..PERMUTATION_SIZE).chain(0..PERMUTATION_SIZE).collect();
        let table = PermutationTable::from_vec(identity).unwrap();
        assert_eq!(table.hash(3, 4), 7);
        assert_eq!(table.hash(250, 10), 4);
        assert_eq!(table.hash(-1, 0), 255);
        assert_eq!(table.hash(0, -1), 255);
    }

    #[test]
    fn test_hash_wraps_every_256() {
        let table = PermutationTable::shuffled(3);
        for (x, y) in [(0, 0), (17, 200), (-5, -9)] {
            assert_eq!(table.hash(x, y), table.hash(x + 256, y));
            assert_eq!(table.hash(x, y), table.hash(x, y - 512));
            assert!(table.hash(x, y) < PERMUTATION_SIZE);
        }
        // No overflow at the extremes
        let _ = table.hash(i64::MAX, i64::MIN);
    }
}
