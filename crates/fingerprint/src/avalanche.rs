//! Permutation-table avalanche checksum (**NOT CRYPTO**).
//!
//! Two 32-bit accumulators are folded over the input one byte at a time. Each
//! step mixes the accumulators with the byte and its position through four
//! sub-hashes built on the [`PERMUTATION`](crate::permutation::PERMUTATION)
//! table. The wide state is `c1 << 32 | c2`.
//!
//! Absent input fingerprints to `0` at every width. A zero-length input
//! yields the untouched seed state, folded.
//!
//! # Usage
//!
//! ```
//! use fingerprint::{Avalanche, Fingerprint};
//!
//! assert_eq!(Avalanche::fingerprint64(Some(b"abc")), 0x272d_6e12_03e8_fee8);
//! assert_eq!(Avalanche::fingerprint32(None), 0);
//! ```

// Const-evaluable byte loop; every index is bounded by `data.len()`.
#![allow(clippy::indexing_slicing)]

use traits::{FastHash, Fingerprint};

use crate::{
  fold::{fold64_to_16, fold64_to_32},
  permutation::permute,
};

/// Permutation-table avalanche checksum.
#[derive(Clone, Copy, Debug, Default)]
pub struct Avalanche;

/// Initial accumulator values `[c1, c2]`.
pub const SEED: [u32; 2] = [0xfab1_c0e1, 0xca14_0be5];

/// Modulus of the third sub-hash. Opaque; changing it changes every result.
const MIX_MODULUS: u32 = 104_851;

#[inline(always)]
const fn mix(h: u32, c: u32, n: u32) -> u32 {
  let h1 = h ^ permute(h.wrapping_add(c.wrapping_mul(7)).wrapping_add(n.wrapping_mul(11)));
  let h2 = c ^ h.wrapping_mul(3) ^ c.wrapping_mul(5) ^ n.wrapping_mul(13) ^ permute(c);
  let h3 = permute(
    (h.wrapping_mul(c.wrapping_add(n)).wrapping_mul(c.wrapping_sub(n)) % MIX_MODULUS)
      .wrapping_add(h)
      .wrapping_add(c)
      .wrapping_add(n),
  );
  let h4 = n ^ permute((h >> (n % 17)).wrapping_add(c));
  h1.rotate_left(24) ^ h2.rotate_left(16) ^ h3.rotate_left(8) ^ h4
}

/// Run the checksum over `data` starting from `seed`.
///
/// Bytes are widened as signed chars, so `0x80..=0xff` enter the mixer as
/// `0xffff_ff80..=0xffff_ffff`. Positions are 32-bit and wrap.
#[must_use]
pub const fn avalanche(seed: [u32; 2], data: &[u8]) -> u64 {
  let [mut c1, mut c2] = seed;
  let mut i = 0;
  while i < data.len() {
    let c = data[i] as i8 as u32;
    let pos = i as u32;
    c1 = c1.rotate_left(7) ^ mix(c1 ^ c2, c.wrapping_add(pos), pos);
    // Uses the c1 just computed above.
    c2 = c2.rotate_left(9) ^ mix(c1.wrapping_add(c2), c ^ pos, c);
    i += 1;
  }
  ((c1 as u64) << 32) | c2 as u64
}

impl FastHash for Avalanche {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = [u32; 2];

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    avalanche(SEED, data)
  }

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    avalanche(seed, data)
  }
}

impl Fingerprint for Avalanche {
  const NAME: &'static str = "avalanche";

  #[inline]
  fn fingerprint16(data: Option<&[u8]>) -> i16 {
    data.map_or(0, |d| fold64_to_16(avalanche(SEED, d)))
  }

  #[inline]
  fn fingerprint32(data: Option<&[u8]>) -> i32 {
    data.map_or(0, |d| fold64_to_32(avalanche(SEED, d)))
  }

  #[inline]
  fn fingerprint64(data: Option<&[u8]>) -> i64 {
    data.map_or(0, |d| avalanche(SEED, d) as i64)
  }
}
