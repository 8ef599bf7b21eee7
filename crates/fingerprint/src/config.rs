//! Fingerprint runtime configuration (defaults + overrides).
//!
//! Resolves which algorithm and width a process fingerprints with when the
//! caller does not choose explicitly. Overrides come from the environment:
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `ROWSUM_ALGORITHM` | `avalanche`, `jenkins`/`cksum`, `fnv`, `fnv1a` | `jenkins` |
//! | `ROWSUM_WIDTH` | `16`/`int2`, `32`/`int4`, `64`/`int8` | `int8` |
//!
//! Empty values are ignored. Invalid values are ignored and reported.

#[cfg(feature = "std")]
use std::string::String;

use traits::{HashValue, Width};

use crate::Algorithm;

/// Algorithm override variable.
pub const ENV_ALGORITHM: &str = "ROWSUM_ALGORITHM";
/// Width override variable.
pub const ENV_WIDTH: &str = "ROWSUM_WIDTH";

/// Full fingerprint configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FingerprintConfig {
  /// Selected algorithm.
  pub algorithm: Algorithm,
  /// Selected output width.
  pub width: Width,
}

impl FingerprintConfig {
  #[inline]
  #[must_use]
  pub const fn new(algorithm: Algorithm, width: Width) -> Self {
    Self { algorithm, width }
  }

  /// Fingerprint `data` with this configuration.
  #[inline]
  #[must_use]
  pub fn fingerprint(&self, data: Option<&[u8]>) -> HashValue {
    self.algorithm.fingerprint(data, self.width)
  }

  /// Resolve a configuration from `lookup`, starting from the defaults.
  ///
  /// `lookup` maps a variable name to its value, if set.
  #[cfg(feature = "std")]
  #[must_use]
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();
    if let Some(algorithm) = parse_override(&lookup, ENV_ALGORITHM) {
      config.algorithm = algorithm;
    }
    if let Some(width) = parse_override(&lookup, ENV_WIDTH) {
      config.width = width;
    }

    tracing::debug!(
      algorithm = config.algorithm.name(),
      width = config.width.sql_name(),
      "resolved fingerprint config"
    );

    config
  }
}

#[cfg(feature = "std")]
fn parse_override<T, F>(lookup: &F, name: &str) -> Option<T>
where
  T: core::str::FromStr,
  F: Fn(&str) -> Option<String>,
{
  let raw = lookup(name)?;
  let value = raw.trim();
  if value.is_empty() {
    return None;
  }
  match value.parse::<T>() {
    Ok(parsed) => Some(parsed),
    Err(_) => {
      tracing::warn!(variable = name, value, "ignoring invalid fingerprint override");
      None
    }
  }
}

#[cfg(feature = "std")]
fn read_env() -> FingerprintConfig {
  FingerprintConfig::from_lookup(|name| std::env::var(name).ok())
}

/// Cached process-wide fingerprint configuration.
#[inline]
#[must_use]
pub fn get() -> FingerprintConfig {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<FingerprintConfig> = OnceLock::new();
    *CACHED.get_or_init(read_env)
  }

  #[cfg(not(feature = "std"))]
  {
    FingerprintConfig::default()
  }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  use std::{
    collections::HashMap,
    string::{String, ToString},
  };

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
  }

  #[test]
  fn defaults_without_overrides() {
    let config = FingerprintConfig::from_lookup(lookup_from(&[]));
    assert_eq!(config, FingerprintConfig::new(Algorithm::Jenkins, Width::W64));
  }

  #[test]
  fn overrides_apply() {
    let config = FingerprintConfig::from_lookup(lookup_from(&[(ENV_ALGORITHM, "fnv"), (ENV_WIDTH, " int4 ")]));
    assert_eq!(config, FingerprintConfig::new(Algorithm::Fnv, Width::W32));
  }

  #[test]
  fn empty_values_are_ignored() {
    let config = FingerprintConfig::from_lookup(lookup_from(&[(ENV_ALGORITHM, "  "), (ENV_WIDTH, "")]));
    assert_eq!(config, FingerprintConfig::default());
  }

  #[test]
  fn invalid_values_fall_back_to_defaults() {
    let config = FingerprintConfig::from_lookup(lookup_from(&[(ENV_ALGORITHM, "sha1"), (ENV_WIDTH, "128")]));
    assert_eq!(config, FingerprintConfig::default());
  }

  #[test]
  fn one_bad_override_keeps_the_other() {
    let config = FingerprintConfig::from_lookup(lookup_from(&[(ENV_ALGORITHM, "avalanche"), (ENV_WIDTH, "int3")]));
    assert_eq!(config, FingerprintConfig::new(Algorithm::Avalanche, Width::W64));
  }

  #[test]
  fn fingerprint_uses_selection() {
    let config = FingerprintConfig::new(Algorithm::Jenkins, Width::W16);
    assert_eq!(config.fingerprint(None), HashValue::Int2(15_401));
    assert_eq!(config.fingerprint(Some(b"")), HashValue::Int2(0));
  }

  #[test]
  fn get_is_cached() {
    assert_eq!(get(), get());
  }
}
