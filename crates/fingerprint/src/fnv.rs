//! FNV-1a 64 fingerprints (**NOT CRYPTO**).
//!
//! [`Fnv`] is the row-fingerprint variant: before each multiply, the byte is
//! added and XORed at several bit offsets so that high state bits change
//! from the first byte onward. [`Fnv1a`] is the textbook FNV-1a 64 step.
//!
//! Both take the standard 64-bit offset basis as the initial state, so a
//! zero-length input returns the basis. Absent input is `0` at every width.
//! The 16- and 32-bit results are XOR folds of the 64-bit state.
//!
//! # Usage
//!
//! ```
//! use fingerprint::{Fingerprint, Fnv, Fnv1a};
//!
//! assert_eq!(Fnv::fingerprint64(Some(b"")) as u64, 0xcbf2_9ce4_8422_2325);
//! assert_eq!(Fnv1a::fingerprint64(Some(b"a")) as u64, 0xaf63_dc4c_8601_ec8c);
//! assert_eq!(Fnv::fingerprint16(None), 0);
//! ```

#![allow(clippy::indexing_slicing)]

use traits::{FastHash, Fingerprint};

use crate::fold::{fold64_to_16, fold64_to_32};

/// FNV-1a 64 with spread byte injection.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fnv;

/// Textbook FNV-1a 64.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fnv1a;

/// FNV-1a 64 offset basis.
pub const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV 64 prime.
pub const PRIME: u64 = 0x0000_0100_0000_01b3;

/// Spread FNV-1a 64 of `data` from `basis`.
#[must_use]
pub const fn fnv1a64_spread(basis: u64, data: &[u8]) -> u64 {
  let mut h = basis;
  let mut i = 0;
  while i < data.len() {
    let b = data[i] as u64;
    h = h.wrapping_add((b << 11) | (b << 31) | (b << 53));
    h ^= b | (b << 23) | (b << 43);
    h = h.wrapping_mul(PRIME);
    i += 1;
  }
  h
}

/// Textbook FNV-1a 64 of `data` from `basis`.
#[must_use]
pub const fn fnv1a64(basis: u64, data: &[u8]) -> u64 {
  let mut h = basis;
  let mut i = 0;
  while i < data.len() {
    h ^= data[i] as u64;
    h = h.wrapping_mul(PRIME);
    i += 1;
  }
  h
}

macro_rules! impl_fnv {
  ($ty:ty, $name:literal, $kernel:ident) => {
    impl FastHash for $ty {
      const OUTPUT_SIZE: usize = 8;
      type Output = u64;
      type Seed = u64;

      #[inline]
      fn hash(data: &[u8]) -> Self::Output {
        $kernel(OFFSET_BASIS, data)
      }

      #[inline]
      fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
        $kernel(seed, data)
      }
    }

    impl Fingerprint for $ty {
      const NAME: &'static str = $name;

      #[inline]
      fn fingerprint16(data: Option<&[u8]>) -> i16 {
        fold64_to_16(data.map_or(0, |d| $kernel(OFFSET_BASIS, d)))
      }

      #[inline]
      fn fingerprint32(data: Option<&[u8]>) -> i32 {
        fold64_to_32(data.map_or(0, |d| $kernel(OFFSET_BASIS, d)))
      }

      #[inline]
      fn fingerprint64(data: Option<&[u8]>) -> i64 {
        data.map_or(0, |d| $kernel(OFFSET_BASIS, d)) as i64
      }
    }
  };
}

impl_fnv!(Fnv, "fnv", fnv1a64_spread);
impl_fnv!(Fnv1a, "fnv1a", fnv1a64);
