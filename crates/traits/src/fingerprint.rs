//! Absent-aware fingerprint trait.

use crate::{HashValue, Width};

/// A fingerprint algorithm with 16-, 32- and 64-bit signed results.
///
/// `None` is the absent marker (SQL `NULL`). `Some(&[])` is a present,
/// zero-length value. The two are distinct input classes, and every
/// implementation maps `None` to a fixed constant per width rather than
/// propagating absence: null in, constant out.
///
/// # Usage
///
/// ```rust,ignore
/// use fingerprint::{Fingerprint, Jenkins};
///
/// assert_eq!(Jenkins::fingerprint32(Some(b"")), 0);
/// assert_ne!(Jenkins::fingerprint32(None), 0);
/// ```
///
/// # Implementor Requirements
///
/// - Every method is a pure function of its input: identical bytes give
///   identical results across calls, threads and processes.
/// - No method panics, for any input length.
pub trait Fingerprint {
  /// Short algorithm name (e.g. `"jenkins"`).
  const NAME: &'static str;

  /// 16-bit fingerprint of `data`.
  #[must_use]
  fn fingerprint16(data: Option<&[u8]>) -> i16;

  /// 32-bit fingerprint of `data`.
  #[must_use]
  fn fingerprint32(data: Option<&[u8]>) -> i32;

  /// 64-bit fingerprint of `data`.
  #[must_use]
  fn fingerprint64(data: Option<&[u8]>) -> i64;

  /// Fingerprint of `data` at the requested `width`.
  #[inline]
  #[must_use]
  fn fingerprint(data: Option<&[u8]>, width: Width) -> HashValue {
    match width {
      Width::W16 => HashValue::Int2(Self::fingerprint16(data)),
      Width::W32 => HashValue::Int4(Self::fingerprint32(data)),
      Width::W64 => HashValue::Int8(Self::fingerprint64(data)),
    }
  }
}
