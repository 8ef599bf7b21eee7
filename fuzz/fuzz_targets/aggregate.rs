//! Fuzz target for XOR and SUM aggregates.
//!
//! Tests combine correctness with multiple splits and order independence.

#![no_main]

use arbitrary::Arbitrary;
use fingerprint::{Aggregate, SumAggregate, XorAggregate};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  values: Vec<Option<i64>>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let values = &input.values;

  // Normalize splits to valid range and sort
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (values.len() + 1)).collect();
  splits.sort();
  splits.dedup();

  test_combine_chain::<XorAggregate>(values, &splits);
  test_combine_chain::<SumAggregate>(values, &splits);
});

fn test_combine_chain<A: Aggregate>(values: &[Option<i64>], splits: &[usize]) {
  let expected = A::aggregate(values.iter().copied());

  let mut combined = A::new().finalize();
  let mut prev = 0;
  for &split in splits.iter().chain(core::iter::once(&values.len())) {
    if split < prev {
      continue;
    }
    let Some(chunk) = values.get(prev..split) else {
      continue;
    };
    combined = A::combine(combined, A::aggregate(chunk.iter().copied()));
    prev = split;
  }
  assert_eq!(combined, expected, "combine chain mismatch");

  let reversed = A::aggregate(values.iter().rev().copied());
  assert_eq!(reversed, expected, "aggregate depends on order");
}
