//! Fingerprint benchmarks.
//!
//! Run: `cargo bench -p fingerprint`
//!
//! This benchmarks every algorithm at every width across input sizes from a
//! short column value up to a large blob.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fingerprint::{Aggregate, Algorithm, Width, XorAggregate};

/// Standard benchmark sizes.
const SIZES: [usize; 6] = [8, 64, 256, 4096, 65536, 1048576];

fn gen_bytes(len: usize) -> Vec<u8> {
  let mut x = 0x0123_4567_89ab_cdefu64;
  (0..len)
    .map(|_| {
      x ^= x << 13;
      x ^= x >> 7;
      x ^= x << 17;
      x as u8
    })
    .collect()
}

fn bench_algorithms(c: &mut Criterion) {
  for algorithm in Algorithm::ALL {
    let mut group = c.benchmark_group(format!("fingerprint/{algorithm}"));

    for size in SIZES {
      let data = gen_bytes(size);
      group.throughput(Throughput::Bytes(size as u64));

      for width in Width::ALL {
        group.bench_with_input(BenchmarkId::new(width.sql_name(), size), &data, |b, data| {
          b.iter(|| black_box(algorithm.fingerprint(Some(black_box(data.as_slice())), width)));
        });
      }
    }

    group.finish();
  }
}

/// Fingerprint-and-aggregate over many short rows, the shape of a table scan.
fn bench_table_scan(c: &mut Criterion) {
  let rows: Vec<Vec<u8>> = (0..10_000u32).map(|i| format!("{i}|user-{i}|{}", i % 97).into_bytes()).collect();
  let mut group = c.benchmark_group("fingerprint/table-scan");
  group.throughput(Throughput::Elements(rows.len() as u64));

  for algorithm in Algorithm::ALL {
    group.bench_with_input(BenchmarkId::from_parameter(algorithm), &rows, |b, rows| {
      b.iter(|| {
        XorAggregate::aggregate(
          rows
            .iter()
            .map(|row| Some(algorithm.fingerprint64(Some(black_box(row.as_slice()))))),
        )
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_algorithms, bench_table_scan);
criterion_main!(benches);
