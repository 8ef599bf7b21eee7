//! Narrowing a wide hash state to a signed SQL integer.
//!
//! Every narrowing is an XOR of non-overlapping shifted slices that together
//! cover the whole input, so high bits always reach the kept bits. Plain
//! truncation is never used on its own.
//!
//! | From | To | Formula |
//! |------|----|---------|
//! | `u64` | `i16` | `h>>48 ^ h>>32 ^ h>>16 ^ h`, low 16 bits |
//! | `u64` | `i32` | `h>>32 ^ h`, low 32 bits |
//! | `u32` | `i16` | `h>>16 ^ h`, low 16 bits |
//!
//! Same-width conversions reinterpret the bits as signed.

use traits::{HashValue, Width};

/// Fold a 64-bit state to 16 bits.
#[inline]
#[must_use]
pub const fn fold64_to_16(h: u64) -> i16 {
  ((h >> 48) ^ (h >> 32) ^ (h >> 16) ^ h) as u16 as i16
}

/// Fold a 64-bit state to 32 bits.
#[inline]
#[must_use]
pub const fn fold64_to_32(h: u64) -> i32 {
  ((h >> 32) ^ h) as u32 as i32
}

/// Fold a 32-bit state to 16 bits.
#[inline]
#[must_use]
pub const fn fold32_to_16(h: u32) -> i16 {
  ((h >> 16) ^ h) as u16 as i16
}

/// Fold a 64-bit state to any width.
#[inline]
#[must_use]
pub const fn fold64(h: u64, width: Width) -> HashValue {
  match width {
    Width::W16 => HashValue::Int2(fold64_to_16(h)),
    Width::W32 => HashValue::Int4(fold64_to_32(h)),
    Width::W64 => HashValue::Int8(h as i64),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_folds_to_zero() {
    assert_eq!(fold64_to_16(0), 0);
    assert_eq!(fold64_to_32(0), 0);
    assert_eq!(fold32_to_16(0), 0);
  }

  #[test]
  fn every_slice_reaches_the_result() {
    for shift in [0, 16, 32, 48] {
      assert_eq!(fold64_to_16(0x1234 << shift), 0x1234);
    }
    for shift in [0, 32] {
      assert_eq!(fold64_to_32(0x1234_5678 << shift), 0x1234_5678);
    }
    for shift in [0, 16] {
      assert_eq!(fold32_to_16(0x1234 << shift), 0x1234);
    }
  }

  #[test]
  fn equal_slices_cancel() {
    assert_eq!(fold64_to_16(0xabcd_abcd_abcd_abcd), 0);
    assert_eq!(fold64_to_32(0xdead_beef_dead_beef), 0);
    assert_eq!(fold32_to_16(0x5a5a_5a5a), 0);
  }

  #[test]
  fn results_are_signed() {
    assert_eq!(fold64_to_16(0x8000), i16::MIN);
    assert_eq!(fold64_to_32(0xffff_ffff), -1);
    assert_eq!(fold32_to_16(0xffff), -1);
  }

  #[test]
  fn fold64_dispatches_by_width() {
    let h = 0xcbf2_9ce4_8422_2325;
    assert_eq!(fold64(h, Width::W16), HashValue::Int2(fold64_to_16(h)));
    assert_eq!(fold64(h, Width::W32), HashValue::Int4(fold64_to_32(h)));
    assert_eq!(fold64(h, Width::W64), HashValue::Int8(h as i64));
  }
}
