//! Constants used throughout the BIDS core crate.
//!
//! This module contains all path and filename constants to ensure
//! consistency across the codebase and make maintenance easier.

/// BIDS specification version written into `dataset_description.json` when none is configured.
pub const DEFAULT_BIDS_VERSION: &str = "1.1.1";

/// Default dataset root when no explicit directory is configured.
pub const DEFAULT_BIDS_ROOT: &str = ".";

/// Filename for the dataset description.
pub const DATASET_DESCRIPTION_FILENAME: &str = "dataset_description.json";

/// Separator between a key and its value inside one entity token.
pub const KEY_VALUE_SEPARATOR: &str = "-";

/// Separator between entity tokens (and the suffix) in a filename.
pub const TOKEN_SEPARATOR: &str = "_";

/// Indentation used for emitted JSON sidecars.
pub const JSON_INDENT: &[u8] = b"    ";

/// Prefix repeated once per nesting level in directory tree listings.
pub const TREE_INDENT: &str = "-----";
