//! Fast non-cryptographic row fingerprints.
//!
//! This crate computes small integer fingerprints of column values so that two
//! database replicas, possibly on different engines, can find the rows where
//! they differ without shipping row contents. Every algorithm is a pure,
//! total function of its input bytes and reproduces fixed constants
//! bit-for-bit, so any two processes agree on every fingerprint.
//!
//! # Supported Algorithms
//!
//! | Type | Wide state | Absent input | Empty input |
//! |------|------------|--------------|-------------|
//! | [`Avalanche`] | 2 × `u32`, permutation-table mixer | `0` | folded seed |
//! | [`Jenkins`] | `u32` one-at-a-time (two passes for 64 bits) | fixed per-width constants | `0` |
//! | [`Fnv`] | `u64` FNV-1a with spread byte injection | `0` | folded offset basis |
//! | [`Fnv1a`] | `u64` textbook FNV-1a | `0` | folded offset basis |
//!
//! Each result is available as a 16-, 32- or 64-bit signed integer (the SQL
//! types `int2`, `int4`, `int8`). Narrowing always XOR-folds the wide state
//! (see [`fold`]).
//!
//! # Example
//!
//! ```rust
//! use fingerprint::{Algorithm, Fingerprint, HashValue, Jenkins, Width};
//!
//! // Absent (NULL) and empty are different inputs.
//! assert_eq!(Jenkins::fingerprint32(None), 433_494_437);
//! assert_eq!(Jenkins::fingerprint32(Some(b"")), 0);
//!
//! // Runtime selection by name.
//! let algorithm: Algorithm = "cksum".parse().unwrap();
//! assert_eq!(algorithm.fingerprint(Some(b"abc"), Width::W16), HashValue::Int2(21_403));
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use;
//! the environment-driven [`config`] then always resolves to its defaults.
//!
//! ```toml
//! [dependencies]
//! fingerprint = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod aggregate;
mod algorithm;
pub mod avalanche;
pub mod cast;
pub mod config;
pub mod fnv;
pub mod fold;
pub mod jenkins;
pub mod permutation;

pub use aggregate::{SumAggregate, XorAggregate};
pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use avalanche::Avalanche;
pub use config::FingerprintConfig;
pub use fnv::{Fnv, Fnv1a};
pub use jenkins::Jenkins;
// Re-export traits for convenience
pub use traits::{Aggregate, FastHash, Fingerprint, HashValue, ParseWidthError, UnsupportedWidth, Width};
