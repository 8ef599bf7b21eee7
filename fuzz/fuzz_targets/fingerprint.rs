//! Fuzz target for the fingerprint family.
//!
//! Tests that:
//! - No panics on arbitrary input, at any width
//! - Results are deterministic
//! - Narrow widths are the documented folds of the wide state
//! - Textbook FNV-1a agrees with the `fnv` crate

#![no_main]

use fingerprint::{
  Algorithm, Avalanche, FastHash, Fingerprint, Fnv, Fnv1a, Jenkins, Width,
  fold::{fold32_to_16, fold64_to_16, fold64_to_32},
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  for algorithm in Algorithm::ALL {
    for width in Width::ALL {
      let first = algorithm.fingerprint(Some(data), width);
      let second = algorithm.fingerprint(Some(data), width);
      assert_eq!(first, second, "{algorithm} not deterministic at {width}");
    }
  }

  let h = Avalanche::hash(data);
  assert_eq!(Avalanche::fingerprint16(Some(data)), fold64_to_16(h));
  assert_eq!(Avalanche::fingerprint32(Some(data)), fold64_to_32(h));

  let h = Fnv::hash(data);
  assert_eq!(Fnv::fingerprint16(Some(data)), fold64_to_16(h));
  assert_eq!(Fnv::fingerprint32(Some(data)), fold64_to_32(h));

  let h = Jenkins::hash(data);
  assert_eq!(Jenkins::fingerprint16(Some(data)), fold32_to_16(h));
  assert_eq!((Jenkins::fingerprint64(Some(data)) as u64 >> 32) as u32, h);

  use core::hash::Hasher as _;
  let mut reference = fnv::FnvHasher::default();
  reference.write(data);
  assert_eq!(Fnv1a::hash(data), reference.finish(), "fnv1a mismatch");
});
