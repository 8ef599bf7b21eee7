//! Core traits for row fingerprinting.
//!
//! This crate provides the contracts every fingerprint algorithm conforms to.
//! It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | Raw wide hash state, seedable | Jenkins one-at-a-time, FNV-1a 64 |
//! | [`Fingerprint`] | Absent-aware 16/32/64-bit signed results | `cksum2`, `cksum4`, `cksum8` |
//! | [`Aggregate`] | Order-free integer accumulation | XOR, wrapping SUM |
//!
//! # Value Types
//!
//! - [`Width`] - Requested output width (16, 32 or 64 bits)
//! - [`HashValue`] - A signed integer of one of those widths
//!
//! # Error Types
//!
//! - [`UnsupportedWidth`] - A bit count that is not 16, 32 or 64
//! - [`ParseWidthError`] - Text that does not name a width
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod aggregate;
pub mod error;
mod fast_hash;
mod fingerprint;
mod width;

pub use aggregate::Aggregate;
pub use error::{ParseWidthError, UnsupportedWidth};
pub use fast_hash::FastHash;
pub use fingerprint::Fingerprint;
pub use width::{HashValue, Width};
