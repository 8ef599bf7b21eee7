//! Basic fingerprint usage: fixed algorithms, runtime selection, aggregation.
//!
//! Run with: `cargo run --example basic -p fingerprint`

use fingerprint::{Aggregate, Algorithm, Avalanche, Fingerprint, Fnv, Jenkins, Width, XorAggregate, config};

fn main() {
  println!("=== Fingerprint Basic Examples ===\n");

  fixed_algorithms();
  null_versus_empty();
  runtime_selection();
  table_summary();
}

/// Each algorithm at each width.
fn fixed_algorithms() {
  println!("--- Fixed Algorithms ---\n");

  let data = Some(&b"abc"[..]);

  let j = (Jenkins::fingerprint16(data), Jenkins::fingerprint32(data), Jenkins::fingerprint64(data));
  println!("jenkins   int2={:<7} int4={:<12} int8={}", j.0, j.1, j.2);
  assert_eq!(j, (21_403, 1_090_917_021, 4_685_452_928_347_608_720));

  let a = (Avalanche::fingerprint16(data), Avalanche::fingerprint32(data), Avalanche::fingerprint64(data));
  println!("avalanche int2={:<7} int4={:<12} int8={}", a.0, a.1, a.2);

  let f = (Fnv::fingerprint16(data), Fnv::fingerprint32(data), Fnv::fingerprint64(data));
  println!("fnv       int2={:<7} int4={:<12} int8={}", f.0, f.1, f.2);

  println!();
}

/// NULL and the empty string are different inputs.
fn null_versus_empty() {
  println!("--- NULL vs Empty ---\n");

  for algorithm in Algorithm::ALL {
    let null = algorithm.fingerprint(None, Width::W32);
    let empty = algorithm.fingerprint(Some(b""), Width::W32);
    println!("{algorithm:<9} NULL={null:<12} ''={empty}");
  }

  println!();
}

/// Algorithm and width chosen at runtime (`ROWSUM_ALGORITHM`, `ROWSUM_WIDTH`).
fn runtime_selection() {
  println!("--- Runtime Selection ---\n");

  let cfg = config::get();
  println!("configured: {} / {}", cfg.algorithm, cfg.width);
  println!("fingerprint('hello') = {}", cfg.fingerprint(Some(b"hello")));

  println!();
}

/// Summarise a table: XOR of row fingerprints, independent of row order.
fn table_summary() {
  println!("--- Table Summary ---\n");

  let replica_a: [&[u8]; 3] = [b"1|alice", b"2|bob", b"3|carol"];
  let replica_b: [&[u8]; 3] = [b"3|carol", b"1|alice", b"2|bob"];

  let sum_a = XorAggregate::aggregate(replica_a.iter().map(|row| Some(Jenkins::fingerprint64(Some(*row)))));
  let sum_b = XorAggregate::aggregate(replica_b.iter().map(|row| Some(Jenkins::fingerprint64(Some(*row)))));
  println!("replica a: {sum_a}");
  println!("replica b: {sum_b}");
  assert_eq!(sum_a, sum_b);

  println!();
}
