//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The library never reads environment variables itself; the binary
//! resolves them and hands over a finished [`CoreConfig`].

use crate::constants::{DEFAULT_BIDS_ROOT, DEFAULT_BIDS_VERSION};
use crate::{BidsError, BidsResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    bids_root: PathBuf,
    bids_version: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(bids_root: PathBuf, bids_version: String) -> BidsResult<Self> {
        let bids_version = bids_version.trim().to_string();
        if bids_version.is_empty() {
            return Err(BidsError::InvalidInput(
                "bids_version cannot be empty".into(),
            ));
        }

        Ok(Self {
            bids_root,
            bids_version,
        })
    }

    /// Build a config from optional raw values, falling back to the defaults.
    ///
    /// Empty or whitespace-only values count as unset.
    pub fn from_values(bids_root: Option<String>, bids_version: Option<String>) -> BidsResult<Self> {
        fn non_empty(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        let bids_root = non_empty(bids_root).unwrap_or_else(|| DEFAULT_BIDS_ROOT.into());
        let bids_version =
            non_empty(bids_version).unwrap_or_else(|| DEFAULT_BIDS_VERSION.into());
        Self::new(PathBuf::from(bids_root), bids_version)
    }

    pub fn bids_root(&self) -> &Path {
        &self.bids_root
    }

    pub fn bids_version(&self) -> &str {
        &self.bids_version
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            bids_root: PathBuf::from(DEFAULT_BIDS_ROOT),
            bids_version: DEFAULT_BIDS_VERSION.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_version() {
        let err = CoreConfig::new(PathBuf::from("data"), "  ".into()).unwrap_err();
        assert!(matches!(err, BidsError::InvalidInput(msg) if msg.contains("bids_version")));
    }

    #[test]
    fn test_from_values_defaults() {
        let config = CoreConfig::from_values(None, Some("   ".into())).unwrap();
        assert_eq!(config.bids_root(), Path::new("."));
        assert_eq!(config.bids_version(), DEFAULT_BIDS_VERSION);
    }

    #[test]
    fn test_from_values_overrides() {
        let config =
            CoreConfig::from_values(Some("/data/bids".into()), Some(" 1.4.0 ".into())).unwrap();
        assert_eq!(config.bids_root(), Path::new("/data/bids"));
        assert_eq!(config.bids_version(), "1.4.0");
    }
}
