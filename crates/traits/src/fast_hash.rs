//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash producing a raw wide state.
///
/// This is the value an algorithm computes before any narrowing to a SQL
/// integer width. It is suitable for fingerprints, sharding, and other
/// non-adversarial settings. It is **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is intentionally one-shot. Fingerprints are computed over a
/// complete column value; there is no incremental state across calls.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type.
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using the algorithm's default seed.
  ///
  /// Algorithms whose published initial state is not `Seed::default()`
  /// override this.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed` as the initial state.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
