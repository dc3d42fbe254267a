//! Entity-based BIDS filenames.
//!
//! A BIDS filename is an ordered sequence of `key-value` entity tokens joined by `_`, optionally
//! followed by a suffix such as `eeg.vhdr`:
//!
//! ```text
//! sub-01_ses-two_task-rest_run-07_eeg.vhdr
//! ```
//!
//! Entities always appear in the order given by [`EntityKey::ORDER`], however the builder was
//! called.

use crate::constants::{KEY_VALUE_SEPARATOR, TOKEN_SEPARATOR};
use crate::{BidsError, BidsResult};
use bids_types::{EntityKey, EntityLabel, Run};
use std::path::Path;

/// Builder for a BIDS filename.
///
/// Values are validated when [`BidsFilename::build`] runs, so a bad value anywhere fails the whole
/// build and no partial name is produced.
///
/// # Example
///
/// ```
/// use bids_core::paths::filename::BidsFilename;
///
/// let name = BidsFilename::new()
///     .subject("test")
///     .session("two")
///     .task("mytask")
///     .suffix("data.csv")
///     .build()
///     .unwrap();
/// assert_eq!(name, "sub-test_ses-two_task-mytask_data.csv");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidsFilename {
    values: [Option<String>; EntityKey::COUNT],
    suffix: Option<String>,
    prefix: Option<String>,
}

impl BidsFilename {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `key`, replacing any previous value.
    pub fn entity(mut self, key: EntityKey, value: impl Into<String>) -> Self {
        self.values[key.position()] = Some(value.into());
        self
    }

    pub fn subject(self, value: impl Into<String>) -> Self {
        self.entity(EntityKey::Subject, value)
    }

    pub fn session(self, value: impl Into<String>) -> Self {
        self.entity(EntityKey::Session, value)
    }

    pub fn task(self, value: impl Into<String>) -> Self {
        self.entity(EntityKey::Task, value)
    }

    pub fn acquisition(self, value: impl Into<String>) -> Self {
        self.entity(EntityKey::Acquisition, value)
    }

    /// Sets the run. Integers are zero-padded to two digits, strings are kept as given.
    pub fn run(self, run: impl Into<Run>) -> Self {
        let run = run.into().normalise();
        self.entity(EntityKey::Run, run)
    }

    pub fn processing(self, value: impl Into<String>) -> Self {
        self.entity(EntityKey::Processing, value)
    }

    pub fn space(self, value: impl Into<String>) -> Self {
        self.entity(EntityKey::Space, value)
    }

    pub fn recording(self, value: impl Into<String>) -> Self {
        self.entity(EntityKey::Recording, value)
    }

    /// Trailing token appended after all entities, e.g. `eeg.vhdr`. Not validated.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Directory the name is joined onto. Not validated.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Returns the value currently set for `key`.
    pub fn get(&self, key: EntityKey) -> Option<&str> {
        self.values[key.position()].as_deref()
    }

    /// Composes the filename.
    ///
    /// # Errors
    ///
    /// Returns `BidsError` if:
    /// - no entity value is set ([`BidsError::InvalidInput`]); a suffix alone is not enough
    /// - any entity value contains `-`, `_` or `/` ([`BidsError::InvalidLabel`])
    pub fn build(&self) -> BidsResult<String> {
        if self.values.iter().all(Option::is_none) {
            return Err(BidsError::InvalidInput(
                "At least one parameter must be given.".into(),
            ));
        }

        let mut tokens = Vec::with_capacity(EntityKey::COUNT + 1);
        for key in EntityKey::ORDER {
            if let Some(value) = self.get(key) {
                let label = EntityLabel::new(key.as_str(), value)?;
                tokens.push(format!("{}{}{}", key, KEY_VALUE_SEPARATOR, label));
            }
        }

        if let Some(suffix) = &self.suffix {
            tokens.push(suffix.clone());
        }

        let filename = tokens.join(TOKEN_SEPARATOR);
        match &self.prefix {
            Some(prefix) => Ok(Path::new(prefix)
                .join(filename)
                .to_string_lossy()
                .into_owned()),
            None => Ok(filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bids_types::LabelError;

    #[test]
    fn test_reference_example() {
        let name = BidsFilename::new()
            .subject("test")
            .session("two")
            .task("mytask")
            .suffix("data.csv")
            .build()
            .unwrap();
        assert_eq!(name, "sub-test_ses-two_task-mytask_data.csv");
    }

    #[test]
    fn test_order_independent_of_call_order() {
        let forwards = BidsFilename::new()
            .subject("01")
            .session("a")
            .task("rest")
            .acquisition("hi")
            .run(3)
            .processing("sss")
            .space("mni")
            .recording("ecg")
            .build()
            .unwrap();
        let backwards = BidsFilename::new()
            .recording("ecg")
            .space("mni")
            .processing("sss")
            .run(3)
            .acquisition("hi")
            .task("rest")
            .session("a")
            .subject("01")
            .build()
            .unwrap();

        assert_eq!(forwards, backwards);
        assert_eq!(
            forwards,
            "sub-01_ses-a_task-rest_acq-hi_run-03_proc-sss_space-mni_recording-ecg"
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let builder = BidsFilename::new().subject("01").task("rest").suffix("eeg.vhdr");
        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }

    #[test]
    fn test_run_integer_padding() {
        let name = BidsFilename::new().subject("01").run(7).build().unwrap();
        assert_eq!(name, "sub-01_run-07");

        let name = BidsFilename::new().subject("01").run(123).build().unwrap();
        assert_eq!(name, "sub-01_run-123");
    }

    #[test]
    fn test_run_string_not_padded() {
        let name = BidsFilename::new().subject("01").run("7").build().unwrap();
        assert_eq!(name, "sub-01_run-7");
    }

    #[test]
    fn test_entity_without_subject() {
        let name = BidsFilename::new().task("rest").suffix("events.tsv").build().unwrap();
        assert_eq!(name, "task-rest_events.tsv");
    }

    #[test]
    fn test_suffix_alone_is_rejected() {
        let err = BidsFilename::new().suffix("eeg.vhdr").build().unwrap_err();
        assert!(matches!(err, BidsError::InvalidInput(msg) if msg.contains("At least one")));
    }

    #[test]
    fn test_empty_builder_is_rejected() {
        assert!(matches!(
            BidsFilename::new().build(),
            Err(BidsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_reserved_characters_rejected() {
        for bad in ["a-b", "a_b", "a/b"] {
            let err = BidsFilename::new()
                .subject("01")
                .task(bad)
                .build()
                .unwrap_err();
            assert!(matches!(
                err,
                BidsError::InvalidLabel(LabelError::ReservedCharacter { ref key, .. }) if key == "task"
            ));
        }
    }

    #[test]
    fn test_string_run_is_validated() {
        let err = BidsFilename::new().subject("01").run("0-1").build().unwrap_err();
        assert!(matches!(err, BidsError::InvalidLabel(_)));
    }

    #[test]
    fn test_suffix_and_prefix_not_validated() {
        let name = BidsFilename::new()
            .subject("01")
            .suffix("my_weird-suffix.tsv")
            .prefix("some_dir/sub-01")
            .build()
            .unwrap();
        assert_eq!(name, "some_dir/sub-01/sub-01_my_weird-suffix.tsv");
    }

    #[test]
    fn test_prefix_joined_as_path() {
        let with_slash = BidsFilename::new().subject("01").prefix("root/").build().unwrap();
        let without_slash = BidsFilename::new().subject("01").prefix("root").build().unwrap();
        assert_eq!(with_slash, "root/sub-01");
        assert_eq!(without_slash, "root/sub-01");
    }

    #[test]
    fn test_later_value_replaces_earlier() {
        let builder = BidsFilename::new().subject("01").subject("02");
        assert_eq!(builder.get(EntityKey::Subject), Some("02"));
        assert_eq!(builder.build().unwrap(), "sub-02");
    }
}
