//! Jenkins one-at-a-time fingerprint (**NOT CRYPTO**).
//!
//! Bob Jenkins' one-at-a-time hash, with the input length mixed into every
//! byte step and into the final avalanche. A zero seed leaves the empty input
//! at exactly `0`.
//!
//! # Widths
//!
//! | Width | Derivation | Absent input |
//! |-------|------------|--------------|
//! | 16 | `h >> 16 ^ h` | `15401` |
//! | 32 | `h` | `433494437` |
//! | 64 | `h1 << 32 \| h2`, `h2` reseeded from `h1` | `780291637 << 32 \| 1073676287` |
//!
//! A present zero-length input is `0` at every width.
//!
//! The 32-bit result collides on short numeric strings, for example
//! `"16667"` and `"53827"`. This is a known property of the hash.

#![allow(clippy::indexing_slicing)]

use traits::{FastHash, Fingerprint};

use crate::fold::fold32_to_16;

/// Jenkins one-at-a-time fingerprint.
#[derive(Clone, Copy, Debug, Default)]
pub struct Jenkins;

/// 16-bit result for absent input.
pub const ABSENT_16: u32 = 15_401;
/// 32-bit result for absent input.
pub const ABSENT_32: u32 = 433_494_437;
/// High half of the 64-bit result for absent input.
pub const ABSENT_64_HIGH: u32 = 780_291_637;
/// Low half of the 64-bit result for absent input.
pub const ABSENT_64_LOW: u32 = 1_073_676_287;
/// XORed into the first half to seed the second half of the 64-bit result.
pub const RESEED: u32 = 1_873_012_681;

/// One-at-a-time hash of `data` from `seed`.
///
/// The length is mixed modulo 2^32.
#[must_use]
pub const fn one_at_a_time(seed: u32, data: &[u8]) -> u32 {
  let len = data.len() as u32;
  let mut h = seed;
  let mut i = 0;
  while i < data.len() {
    h = h.wrapping_add(data[i] as u32 ^ len);
    h = h.wrapping_add(h << 10);
    h ^= h >> 6;
    i += 1;
  }
  h = h.wrapping_add(h << 3);
  h ^= (h >> 11).wrapping_add(len);
  h.wrapping_add(h << 15)
}

/// Two decorrelated halves over the same bytes.
#[inline]
#[must_use]
pub const fn wide(data: &[u8]) -> u64 {
  let h1 = one_at_a_time(0, data);
  let h2 = if data.is_empty() {
    0
  } else {
    one_at_a_time(h1 ^ RESEED, data)
  };
  ((h1 as u64) << 32) | h2 as u64
}

impl FastHash for Jenkins {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    one_at_a_time(seed, data)
  }
}

impl Fingerprint for Jenkins {
  const NAME: &'static str = "jenkins";

  #[inline]
  fn fingerprint16(data: Option<&[u8]>) -> i16 {
    fold32_to_16(data.map_or(ABSENT_16, |d| one_at_a_time(0, d)))
  }

  #[inline]
  fn fingerprint32(data: Option<&[u8]>) -> i32 {
    data.map_or(ABSENT_32, |d| one_at_a_time(0, d)) as i32
  }

  #[inline]
  fn fingerprint64(data: Option<&[u8]>) -> i64 {
    data.map_or(((ABSENT_64_HIGH as u64) << 32) | ABSENT_64_LOW as u64, wide) as i64
  }
}
