//! Fixed byte permutation used by the [`Avalanche`](crate::Avalanche) mixer.
//!
//! The table is a bijection over `0..=255`: every byte value appears exactly
//! once. It is fixed data, not derived, and must be reproduced bit-for-bit by
//! every implementation that wants to agree on fingerprints.

/// The 256-entry permutation.
#[rustfmt::skip]
pub const PERMUTATION: [u8; 256] = [
  195, 202,  56, 230,  40,  57, 148, 222, 192,  92,  55,  76, 116, 204,  24,  90,
  227,  15, 134, 245, 141,  10, 129, 177, 235, 197,  39, 188,  18, 214, 109, 108,
   87, 117,  73, 114, 168,  71, 216,  58,  74, 154, 130,  93,  34,  26, 221, 242,
   41,  46, 118, 207,  83, 110,  32,   6,  77,  44,  20, 172,  66, 219, 106, 145,
   88, 149,   1, 120, 194, 228, 136,  50, 155, 107,  94,  29, 211, 200,  70, 184,
   16, 166, 165,  43, 224, 132,  51,  98, 217,  64, 156,  91,  78, 201, 254,  67,
  138,  89,  38, 183, 232, 203,  96, 180, 210, 119,  60, 248, 250, 236, 208, 218,
  178, 174,  63,  11,  14,  13, 182,  82,  31, 143,  36, 212, 251,  61,   2,  68,
  193,  84,  72, 160, 229,   0, 190,   4,  80, 115, 237, 231, 186, 127, 133, 191,
  142, 198, 147, 233, 249, 137,   9, 135, 104, 179,  81,   7, 225, 246,  69,  37,
  103,  33, 234, 151, 163, 226, 175,  12, 152, 244,  52, 125,  62,  85, 124, 238,
   53, 169, 139, 153, 206, 220, 170, 213,   8, 239, 128, 187, 162, 255,  25, 247,
  113, 252,   3,  27, 100, 112, 241, 199,  22, 159,  49,  65, 173, 215, 140, 167,
  158, 111, 105, 240, 196, 161,  17,  99, 157,  23, 164, 121,  54,  45,  21, 181,
  223, 150, 176, 209, 185,  19,  42,  97,  30,  59, 102,  47, 205,  48, 101, 131,
   28, 123, 189,   5, 243,  35, 253, 122,  95, 146, 144, 171,  79, 126,  75,  86,
];

const _: () = assert!(is_bijection(&PERMUTATION), "PERMUTATION must be a bijection");

/// Look up `index`, reduced modulo 256.
#[inline(always)]
#[must_use]
pub const fn permute(index: u32) -> u32 {
  // Masked to the table length: never out of bounds.
  #[allow(clippy::indexing_slicing)]
  let value = PERMUTATION[(index & 0xff) as usize];
  value as u32
}

/// Whether `table` maps `0..=255` onto itself one-to-one.
#[must_use]
#[allow(clippy::indexing_slicing)] // Indices are `u8` values and loop bounds of a 256-entry array.
pub const fn is_bijection(table: &[u8; 256]) -> bool {
  let mut seen = [false; 256];
  let mut i = 0;
  while i < table.len() {
    let value = table[i] as usize;
    if seen[value] {
      return false;
    }
    seen[value] = true;
    i += 1;
  }
  true
}
