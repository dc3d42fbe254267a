//! Validated value types shared across the BIDS crates.
//!
//! A BIDS filename is a sequence of `key-value` tokens joined by `_`, so entity values must never
//! contain `-` or `_`. A `/` would inject a spurious path segment. [`EntityLabel`] guarantees none
//! of these characters are present once constructed, and [`EntityKey`] carries the canonical
//! order in which entities appear in a filename.

use std::fmt;

/// Characters that may not appear in an entity value.
pub const RESERVED_CHARACTERS: [char; 3] = ['-', '_', '/'];

/// Errors that can occur when creating validated label types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LabelError {
    /// The value contains one of the BIDS separator characters.
    #[error("Unallowed `-`, `_`, or `/` found in key/value pair {key}: {value}")]
    ReservedCharacter { key: String, value: String },
}

/// The closed set of naming entities, in canonical filename order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKey {
    Subject,
    Session,
    Task,
    Acquisition,
    Run,
    Processing,
    Space,
    Recording,
}

impl EntityKey {
    /// Number of entity keys.
    pub const COUNT: usize = 8;

    /// Canonical entity order. Filenames always render entities in this sequence.
    pub const ORDER: [EntityKey; Self::COUNT] = [
        EntityKey::Subject,
        EntityKey::Session,
        EntityKey::Task,
        EntityKey::Acquisition,
        EntityKey::Run,
        EntityKey::Processing,
        EntityKey::Space,
        EntityKey::Recording,
    ];

    /// The short key used in filenames (e.g. `sub`, `ses`).
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKey::Subject => "sub",
            EntityKey::Session => "ses",
            EntityKey::Task => "task",
            EntityKey::Acquisition => "acq",
            EntityKey::Run => "run",
            EntityKey::Processing => "proc",
            EntityKey::Space => "space",
            EntityKey::Recording => "recording",
        }
    }

    /// Position of this key in [`EntityKey::ORDER`].
    pub const fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks that `value` contains none of [`RESERVED_CHARACTERS`].
///
/// Returns the pair unchanged when the value is acceptable.
///
/// # Errors
///
/// Returns [`LabelError::ReservedCharacter`] if `value` contains `-`, `_` or `/`.
pub fn check_key_val<'a>(key: &'a str, value: &'a str) -> Result<(&'a str, &'a str), LabelError> {
    if value.contains(&RESERVED_CHARACTERS[..]) {
        return Err(LabelError::ReservedCharacter {
            key: key.to_owned(),
            value: value.to_owned(),
        });
    }
    Ok((key, value))
}

/// An entity value that is safe to embed in a BIDS filename or folder name.
///
/// The value is kept verbatim (no trimming, no case folding); only the reserved separator
/// characters are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityLabel(String);

impl EntityLabel {
    /// Creates a new `EntityLabel` for the entity named `key`.
    ///
    /// `key` is only used to make the error message point at the offending entity.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::ReservedCharacter`] if the value contains `-`, `_` or `/`.
    pub fn new(key: &str, value: impl Into<String>) -> Result<Self, LabelError> {
        let value = value.into();
        check_key_val(key, &value)?;
        Ok(Self(value))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EntityLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for EntityLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EntityLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EntityLabel::new("label", s).map_err(serde::de::Error::custom)
    }
}

/// A `run` entity before normalisation.
///
/// Integer runs are rendered zero-padded to two digits (`7` becomes `07`, `123` stays `123`).
/// String runs are used verbatim, so `"7"` stays `7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    Index(u32),
    Label(String),
}

impl Run {
    /// Returns the string form that will appear after `run-`.
    pub fn normalise(&self) -> String {
        match self {
            Run::Index(index) => format!("{:02}", index),
            Run::Label(label) => label.clone(),
        }
    }
}

impl From<u32> for Run {
    fn from(index: u32) -> Self {
        Run::Index(index)
    }
}

impl From<&str> for Run {
    fn from(label: &str) -> Self {
        Run::Label(label.to_owned())
    }
}

impl From<String> for Run {
    fn from(label: String) -> Self {
        Run::Label(label)
    }
}
