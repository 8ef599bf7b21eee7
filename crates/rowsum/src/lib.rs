//! Row fingerprints for comparing database replicas.
//!
//! `rowsum` bundles the fingerprint algorithms, the value types they produce,
//! and the aggregates used to summarise sets of rows. Zero required
//! dependencies, `no_std` compatible.
//!
//! # Quick Start
//!
//! ```
//! use rowsum::{Aggregate, Fingerprint, Fnv, XorAggregate};
//!
//! let rows: [Option<&[u8]>; 3] = [Some(b"1|alice"), None, Some(b"3|carol")];
//! let summary = XorAggregate::aggregate(rows.iter().map(|row| Some(Fnv::fingerprint64(*row))));
//!
//! // NULL fingerprints to a constant, never to NULL.
//! assert_eq!(Fnv::fingerprint64(None), 0);
//! assert_eq!(summary, Fnv::fingerprint64(rows[0]) ^ Fnv::fingerprint64(rows[2]));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Environment configuration overrides and logging |
//! | `fingerprints` | Yes | Avalanche, Jenkins, FNV algorithms and selection |
//! | `aggregates` | Yes | XOR and SUM aggregates, narrowing casts |
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Core types
// =============================================================================

pub use traits::{Aggregate, FastHash, Fingerprint, HashValue, ParseWidthError, UnsupportedWidth, Width};

// =============================================================================
// Fingerprints
// =============================================================================

#[cfg(feature = "fingerprints")]
pub use fingerprint::{
  // Algorithms
  Algorithm,
  Avalanche,
  // Configuration
  FingerprintConfig,
  Fnv,
  Fnv1a,
  Jenkins,
  UnknownAlgorithm,
  config,
  fold,
  permutation,
};

// =============================================================================
// Aggregates
// =============================================================================

#[cfg(feature = "aggregates")]
pub use fingerprint::{SumAggregate, XorAggregate, cast};
