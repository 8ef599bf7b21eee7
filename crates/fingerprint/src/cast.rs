//! Integer narrowing casts.
//!
//! Some hosts only hand 64-bit integers to user functions. These casts bring
//! a 64-bit value down to a narrower SQL type by keeping its low bits and
//! reinterpreting them as signed, matching a C cast to `int32_t`/`int16_t`.

/// Keep the low 32 bits of `value`.
#[inline]
#[must_use]
pub const fn int8_to_int4(value: i64) -> i32 {
  value as i32
}

/// Keep the low 16 bits of `value`.
#[inline]
#[must_use]
pub const fn int8_to_int2(value: i64) -> i16 {
  value as i16
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn in_range_values_are_unchanged() {
    assert_eq!(int8_to_int4(-12_345), -12_345);
    assert_eq!(int8_to_int2(15_401), 15_401);
  }

  #[test]
  fn high_bits_are_dropped() {
    assert_eq!(int8_to_int4(0x0000_0001_0000_0002), 2);
    assert_eq!(int8_to_int2(0x0001_0000_0000_7fff), 0x7fff);
  }

  #[test]
  fn sign_comes_from_the_kept_bits() {
    assert_eq!(int8_to_int4(0x0000_0000_8000_0000), i32::MIN);
    assert_eq!(int8_to_int2(0x0000_0000_0000_ffff), -1);
    assert_eq!(int8_to_int4(-1), -1);
    assert_eq!(int8_to_int2(i64::MIN), 0);
  }
}
