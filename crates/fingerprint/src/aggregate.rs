//! Integer aggregates over row fingerprints.
//!
//! A table (or a key range of it) is summarised by aggregating the
//! fingerprints of its rows. Both aggregates are order-independent, so two
//! replicas that hold the same rows agree on the result no matter how their
//! scans are ordered.
//!
//! # Usage
//!
//! ```
//! use fingerprint::{Aggregate, Fingerprint, Jenkins, XorAggregate};
//!
//! let rows: [&[u8]; 3] = [b"alice", b"bob", b"carol"];
//! let mut acc = XorAggregate::new();
//! for row in rows {
//!   acc.update(Some(Jenkins::fingerprint64(Some(row))));
//! }
//! let forward = acc.finalize();
//!
//! let backward = XorAggregate::aggregate(rows.iter().rev().map(|r| Some(Jenkins::fingerprint64(Some(*r)))));
//! assert_eq!(forward, backward);
//! ```

use traits::Aggregate;

/// Running XOR of 64-bit integers.
///
/// XOR cancels pairs: a row present twice contributes nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XorAggregate {
  state: i64,
}

/// Running wrapping sum of 64-bit integers.
///
/// Overflow wraps modulo 2^64, so the result stays order-independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SumAggregate {
  state: i64,
}

impl XorAggregate {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { state: 0 }
  }

  /// Resume from a previously finalized value.
  #[inline]
  #[must_use]
  pub const fn resume(state: i64) -> Self {
    Self { state }
  }
}

impl SumAggregate {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { state: 0 }
  }

  /// Resume from a previously finalized value.
  #[inline]
  #[must_use]
  pub const fn resume(state: i64) -> Self {
    Self { state }
  }
}

impl Aggregate for XorAggregate {
  #[inline]
  fn new() -> Self {
    XorAggregate::new()
  }

  #[inline]
  fn update(&mut self, value: Option<i64>) {
    if let Some(v) = value {
      self.state ^= v;
    }
  }

  #[inline]
  fn finalize(&self) -> i64 {
    self.state
  }

  #[inline]
  fn reset(&mut self) {
    self.state = 0;
  }

  #[inline]
  fn combine(a: i64, b: i64) -> i64 {
    a ^ b
  }
}

impl Aggregate for SumAggregate {
  #[inline]
  fn new() -> Self {
    SumAggregate::new()
  }

  #[inline]
  fn update(&mut self, value: Option<i64>) {
    if let Some(v) = value {
      self.state = self.state.wrapping_add(v);
    }
  }

  #[inline]
  fn finalize(&self) -> i64 {
    self.state
  }

  #[inline]
  fn reset(&mut self) {
    self.state = 0;
  }

  #[inline]
  fn combine(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
  }
}

impl Extend<Option<i64>> for XorAggregate {
  fn extend<I: IntoIterator<Item = Option<i64>>>(&mut self, iter: I) {
    for value in iter {
      self.update(value);
    }
  }
}

impl Extend<Option<i64>> for SumAggregate {
  fn extend<I: IntoIterator<Item = Option<i64>>>(&mut self, iter: I) {
    for value in iter {
      self.update(value);
    }
  }
}
