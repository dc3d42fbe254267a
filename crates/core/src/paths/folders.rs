//! BIDS folder hierarchy.
//!
//! Data for one subject lives under:
//! ```text
//! <root>/
//!     sub-<subject>/
//!         ses-<session>/
//!             <kind>/        # e.g. eeg, meg, anat
//! ```
//!
//! The session level and the kind level are only present when given.

use crate::constants::KEY_VALUE_SEPARATOR;
use crate::helpers::make_dir_all;
use crate::BidsResult;
use bids_types::{EntityKey, EntityLabel};
use std::path::PathBuf;

/// Builder for a subject/session/kind folder path.
///
/// Only the session is checked for reserved characters. The subject and the kind are used
/// verbatim.
///
/// By default [`BidsFolders::build`] creates the folder and leaves existing content alone; use
/// [`BidsFolders::make_dir`] for a dry run and [`BidsFolders::overwrite`] to empty an existing
/// folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidsFolders {
    subject: String,
    session: Option<String>,
    kind: Option<String>,
    root: Option<PathBuf>,
    make_dir: bool,
    overwrite: bool,
}

impl BidsFolders {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            session: None,
            kind: None,
            root: None,
            make_dir: true,
            overwrite: false,
        }
    }

    pub fn session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// The modality folder at the bottom of the hierarchy, e.g. `eeg`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Dataset root the hierarchy is placed under. Relative to the working directory if unset.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn make_dir(mut self, make_dir: bool) -> Self {
        self.make_dir = make_dir;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Computes the folder path without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BidsError::InvalidLabel`] if the session contains `-`, `_` or `/`.
    pub fn path(&self) -> BidsResult<PathBuf> {
        let mut path = self.root.clone().unwrap_or_default();
        path.push(format!("{}{}{}", EntityKey::Subject, KEY_VALUE_SEPARATOR, self.subject));

        if let Some(session) = &self.session {
            let label = EntityLabel::new(EntityKey::Session.as_str(), session.as_str())?;
            path.push(format!("{}{}{}", EntityKey::Session, KEY_VALUE_SEPARATOR, label));
        }

        if let Some(kind) = &self.kind {
            path.push(kind);
        }

        Ok(path)
    }

    /// Computes the folder path and, unless disabled, creates it.
    ///
    /// The path is returned whether or not it was created.
    ///
    /// # Errors
    ///
    /// Returns `BidsError` if:
    /// - the session contains a reserved character (nothing is created)
    /// - the folder cannot be removed (overwrite) or created
    pub fn build(&self) -> BidsResult<PathBuf> {
        let path = self.path()?;
        if self.make_dir {
            make_dir_all(&path, self.overwrite)?;
        }
        Ok(path)
    }
}
