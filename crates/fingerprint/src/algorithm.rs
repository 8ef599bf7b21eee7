//! Runtime algorithm selection.
//!
//! Host bindings and configuration pick an algorithm by name; [`Algorithm`]
//! dispatches to the matching [`Fingerprint`] implementation.

use core::{fmt, str::FromStr};

use traits::{Fingerprint, HashValue, Width};

use crate::{Avalanche, Fnv, Fnv1a, Jenkins};

/// A fingerprint algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
  /// Permutation-table avalanche checksum ([`Avalanche`]).
  Avalanche,
  /// Jenkins one-at-a-time ([`Jenkins`]), the `cksum2/4/8` host functions.
  #[default]
  Jenkins,
  /// Spread FNV-1a 64 ([`Fnv`]).
  Fnv,
  /// Textbook FNV-1a 64 ([`Fnv1a`]).
  Fnv1a,
}

impl Algorithm {
  /// All algorithms.
  pub const ALL: [Self; 4] = [Self::Avalanche, Self::Jenkins, Self::Fnv, Self::Fnv1a];

  /// Canonical name.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Avalanche => Avalanche::NAME,
      Self::Jenkins => Jenkins::NAME,
      Self::Fnv => Fnv::NAME,
      Self::Fnv1a => Fnv1a::NAME,
    }
  }

  /// Fingerprint `data` at `width`.
  #[inline]
  #[must_use]
  pub fn fingerprint(self, data: Option<&[u8]>, width: Width) -> HashValue {
    match self {
      Self::Avalanche => Avalanche::fingerprint(data, width),
      Self::Jenkins => Jenkins::fingerprint(data, width),
      Self::Fnv => Fnv::fingerprint(data, width),
      Self::Fnv1a => Fnv1a::fingerprint(data, width),
    }
  }

  /// 16-bit fingerprint of `data`.
  #[inline]
  #[must_use]
  pub fn fingerprint16(self, data: Option<&[u8]>) -> i16 {
    match self {
      Self::Avalanche => Avalanche::fingerprint16(data),
      Self::Jenkins => Jenkins::fingerprint16(data),
      Self::Fnv => Fnv::fingerprint16(data),
      Self::Fnv1a => Fnv1a::fingerprint16(data),
    }
  }

  /// 32-bit fingerprint of `data`.
  #[inline]
  #[must_use]
  pub fn fingerprint32(self, data: Option<&[u8]>) -> i32 {
    match self {
      Self::Avalanche => Avalanche::fingerprint32(data),
      Self::Jenkins => Jenkins::fingerprint32(data),
      Self::Fnv => Fnv::fingerprint32(data),
      Self::Fnv1a => Fnv1a::fingerprint32(data),
    }
  }

  /// 64-bit fingerprint of `data`.
  #[inline]
  #[must_use]
  pub fn fingerprint64(self, data: Option<&[u8]>) -> i64 {
    match self {
      Self::Avalanche => Avalanche::fingerprint64(data),
      Self::Jenkins => Jenkins::fingerprint64(data),
      Self::Fnv => Fnv::fingerprint64(data),
      Self::Fnv1a => Fnv1a::fingerprint64(data),
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Algorithm {
  type Err = UnknownAlgorithm;

  /// Accepts canonical names and the host function names they back,
  /// case-insensitively.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = s.trim();
    let matches = |names: &[&str]| names.iter().any(|name| value.eq_ignore_ascii_case(name));

    if matches(&["avalanche", "checksum", "text_checksum"]) {
      return Ok(Self::Avalanche);
    }
    if matches(&["jenkins", "cksum", "ck"]) {
      return Ok(Self::Jenkins);
    }
    if matches(&["fnv"]) {
      return Ok(Self::Fnv);
    }
    if matches(&["fnv1a", "fnv-1a"]) {
      return Ok(Self::Fnv1a);
    }
    Err(UnknownAlgorithm)
  }
}

/// Text that does not name a fingerprint algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub struct UnknownAlgorithm;

impl fmt::Display for UnknownAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown fingerprint algorithm (expected avalanche, jenkins, fnv or fnv1a)")
  }
}

impl core::error::Error for UnknownAlgorithm {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn names_round_trip() {
    for algorithm in Algorithm::ALL {
      assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
    }
  }

  #[test]
  fn host_aliases() {
    assert_eq!("CKSUM".parse::<Algorithm>(), Ok(Algorithm::Jenkins));
    assert_eq!("ck".parse::<Algorithm>(), Ok(Algorithm::Jenkins));
    assert_eq!(" text_checksum ".parse::<Algorithm>(), Ok(Algorithm::Avalanche));
    assert_eq!("FNV-1a".parse::<Algorithm>(), Ok(Algorithm::Fnv1a));
  }

  #[test]
  fn rejects_unknown() {
    assert_eq!("md5".parse::<Algorithm>(), Err(UnknownAlgorithm));
    assert_eq!("".parse::<Algorithm>(), Err(UnknownAlgorithm));
  }

  #[test]
  fn default_is_jenkins() {
    assert_eq!(Algorithm::default(), Algorithm::Jenkins);
  }

  #[test]
  fn dispatch_matches_width_methods() {
    let data = Some(&b"dispatch"[..]);
    for algorithm in Algorithm::ALL {
      assert_eq!(algorithm.fingerprint(data, Width::W16), HashValue::Int2(algorithm.fingerprint16(data)));
      assert_eq!(algorithm.fingerprint(data, Width::W32), HashValue::Int4(algorithm.fingerprint32(data)));
      assert_eq!(algorithm.fingerprint(data, Width::W64), HashValue::Int8(algorithm.fingerprint64(data)));
    }
  }

  #[test]
  fn dispatch_reaches_each_algorithm() {
    let data = Some(&b"abc"[..]);
    assert_eq!(Algorithm::Avalanche.fingerprint64(data), Avalanche::fingerprint64(data));
    assert_eq!(Algorithm::Jenkins.fingerprint64(data), Jenkins::fingerprint64(data));
    assert_eq!(Algorithm::Fnv.fingerprint64(data), Fnv::fingerprint64(data));
    assert_eq!(Algorithm::Fnv1a.fingerprint64(data), Fnv1a::fingerprint64(data));
  }
}
