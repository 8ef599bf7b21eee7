//! Output widths and width-tagged fingerprint values.

use core::{fmt, str::FromStr};

use crate::error::{ParseWidthError, UnsupportedWidth};

/// Width of a fingerprint result.
///
/// The three widths line up with the SQL integer types `int2`, `int4` and
/// `int8` that host engines return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Width {
  /// 16 bits (`int2` / `smallint`).
  W16,
  /// 32 bits (`int4` / `integer`).
  W32,
  /// 64 bits (`int8` / `bigint`).
  #[default]
  W64,
}

impl Width {
  /// All widths, narrowest first.
  pub const ALL: [Self; 3] = [Self::W16, Self::W32, Self::W64];

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::W16 => 16,
      Self::W32 => 32,
      Self::W64 => 64,
    }
  }

  /// Width in bytes.
  #[inline]
  #[must_use]
  pub const fn bytes(self) -> usize {
    match self {
      Self::W16 => 2,
      Self::W32 => 4,
      Self::W64 => 8,
    }
  }

  /// SQL type name of the width.
  #[inline]
  #[must_use]
  pub const fn sql_name(self) -> &'static str {
    match self {
      Self::W16 => "int2",
      Self::W32 => "int4",
      Self::W64 => "int8",
    }
  }
}

impl fmt::Display for Width {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.sql_name())
  }
}

impl TryFrom<u32> for Width {
  type Error = UnsupportedWidth;

  /// Build a width from a bit count.
  fn try_from(bits: u32) -> Result<Self, Self::Error> {
    match bits {
      16 => Ok(Self::W16),
      32 => Ok(Self::W32),
      64 => Ok(Self::W64),
      other => Err(UnsupportedWidth::new(other)),
    }
  }
}

impl FromStr for Width {
  type Err = ParseWidthError;

  /// Accepts bit counts (`16`), byte counts (`2`) and SQL type names
  /// (`int2`, `smallint`, ...), case-insensitively.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = s.trim();
    let matches = |names: &[&str]| names.iter().any(|name| value.eq_ignore_ascii_case(name));

    if matches(&["16", "2", "int2", "smallint"]) {
      return Ok(Self::W16);
    }
    if matches(&["32", "4", "int4", "int", "integer"]) {
      return Ok(Self::W32);
    }
    if matches(&["64", "8", "int8", "bigint"]) {
      return Ok(Self::W64);
    }
    Err(ParseWidthError::new())
  }
}

/// A fingerprint tagged with its width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashValue {
  /// 16-bit result.
  Int2(i16),
  /// 32-bit result.
  Int4(i32),
  /// 64-bit result.
  Int8(i64),
}

impl HashValue {
  /// Width of this value.
  #[inline]
  #[must_use]
  pub const fn width(self) -> Width {
    match self {
      Self::Int2(_) => Width::W16,
      Self::Int4(_) => Width::W32,
      Self::Int8(_) => Width::W64,
    }
  }

  /// Sign-extend to 64 bits.
  ///
  /// Hosts whose UDF protocol returns one 64-bit integer type for every
  /// width hand back this value.
  #[inline]
  #[must_use]
  pub const fn as_i64(self) -> i64 {
    match self {
      Self::Int2(v) => v as i64,
      Self::Int4(v) => v as i64,
      Self::Int8(v) => v,
    }
  }

  /// Keep the low `width` bits of `value`, reinterpreted as signed.
  #[inline]
  #[must_use]
  pub const fn truncate(value: i64, width: Width) -> Self {
    match width {
      Width::W16 => Self::Int2(value as i16),
      Width::W32 => Self::Int4(value as i32),
      Width::W64 => Self::Int8(value),
    }
  }
}

impl From<i16> for HashValue {
  #[inline]
  fn from(value: i16) -> Self {
    Self::Int2(value)
  }
}

impl From<i32> for HashValue {
  #[inline]
  fn from(value: i32) -> Self {
    Self::Int4(value)
  }
}

impl From<i64> for HashValue {
  #[inline]
  fn from(value: i64) -> Self {
    Self::Int8(value)
  }
}

impl From<HashValue> for i64 {
  #[inline]
  fn from(value: HashValue) -> Self {
    value.as_i64()
  }
}

impl fmt::Display for HashValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Int2(v) => fmt::Display::fmt(v, f),
      Self::Int4(v) => fmt::Display::fmt(v, f),
      Self::Int8(v) => fmt::Display::fmt(v, f),
    }
  }
}
