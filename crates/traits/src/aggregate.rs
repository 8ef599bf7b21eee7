//! Integer aggregate traits.

/// An accumulator folding nullable 64-bit integers into one value.
///
/// Used to collapse a set of row fingerprints into a single per-table or
/// per-range value. Implementations are order-independent, so a set can be
/// split into chunks, each chunk aggregated separately, and the partial
/// results merged with [`combine`](Self::combine).
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `update(None)` must leave the state unchanged
/// - `finalize()` of a fresh accumulator must be `0`
/// - `combine(a, b)` must equal the result of feeding both inputs to one
///   accumulator
pub trait Aggregate: Clone + Default {
  /// Create an empty accumulator.
  #[must_use]
  fn new() -> Self;

  /// Fold one value into the accumulator. Absent values are ignored.
  fn update(&mut self, value: Option<i64>);

  /// Current aggregate value.
  #[must_use]
  fn finalize(&self) -> i64;

  /// Reset the accumulator to its initial state.
  fn reset(&mut self);

  /// Merge two partial aggregates.
  #[must_use]
  fn combine(a: i64, b: i64) -> i64;

  /// Aggregate every value of `values` in one shot.
  #[inline]
  #[must_use]
  fn aggregate<I>(values: I) -> i64
  where
    I: IntoIterator<Item = Option<i64>>,
  {
    let mut acc = Self::new();
    for value in values {
      acc.update(value);
    }
    acc.finalize()
  }
}
