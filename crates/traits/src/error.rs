//! Error types for width and configuration parsing.
//!
//! Minimal, allocation-free error types. The hashing functions themselves are
//! total and never return errors; these only arise when a caller turns
//! untyped input (a bit count, a config string) into a [`Width`](crate::Width).
//! Individual crates may define additional errors as needed.

use core::fmt;

/// A bit count that is not a supported fingerprint width.
///
/// # Examples
///
/// ```
/// use traits::{UnsupportedWidth, Width};
///
/// let err = Width::try_from(24).unwrap_err();
/// assert_eq!(err, UnsupportedWidth::new(24));
/// assert_eq!(err.bits(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct UnsupportedWidth {
  bits: u32,
}

impl UnsupportedWidth {
  /// Create a new error for the rejected bit count.
  #[inline]
  #[must_use]
  pub const fn new(bits: u32) -> Self {
    Self { bits }
  }

  /// The rejected bit count.
  #[inline]
  #[must_use]
  pub const fn bits(&self) -> u32 {
    self.bits
  }
}

impl fmt::Display for UnsupportedWidth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unsupported fingerprint width: {} bits (expected 16, 32 or 64)", self.bits)
  }
}

impl core::error::Error for UnsupportedWidth {}

/// Text that does not name a fingerprint width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ParseWidthError;

impl ParseWidthError {
  /// Create a new parse error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for ParseWidthError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for ParseWidthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("invalid fingerprint width")
  }
}

impl core::error::Error for ParseWidthError {}
