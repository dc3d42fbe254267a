//! BIDS File Handling
//!
//! This crate handles the BrainVision recording format as it is stored inside a BIDS dataset.
//!
//! ## The BrainVision file set
//!
//! A BrainVision recording is three sibling files sharing one basename:
//!
//! ```text
//! <basename>.vhdr   # text header: DataFile=<basename>.eeg, MarkerFile=<basename>.vmrk
//! <basename>.vmrk   # text marker list: DataFile=<basename>.eeg
//! <basename>.eeg    # binary payload, no references
//! ```
//!
//! Renaming any member breaks the pointers held by the text members. [`copyfile_brainvision`]
//! copies one member and rewrites those pointers so the set stays consistent.
//!
//! ## Example Usage
//!
//! ```no_run
//! use bids_files::{copy_recording_set, copyfile_brainvision};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // One member at a time
//! copyfile_brainvision(Path::new("raw/test.vmrk"), Path::new("bids/sub-01_eeg.vmrk"))?;
//!
//! // Or the whole set, driven by the header
//! copy_recording_set(Path::new("raw/test.vhdr"), Path::new("bids/sub-01_eeg.vhdr"))?;
//! # Ok(())
//! # }
//! ```

mod brainvision;
mod extension;
mod synthetic;

pub use brainvision::{copy_recording_set, copyfile_brainvision};
pub use extension::{split_extension, BrainVisionMember};
pub use synthetic::SyntheticRecording;

use std::path::PathBuf;

/// Errors that can occur during file operations
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// The file to copy does not exist
    #[error("File does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Source and destination do not share an extension
    #[error("Need to move data with same extension but got {src}, {dest}")]
    ExtensionMismatch { src: String, dest: String },

    /// Extension is not one of the BrainVision members
    #[error("Expecting file ending in one of [.eeg, .vhdr, .vmrk], but got {0}")]
    UnsupportedExtension(String),

    /// Path has no usable (UTF-8) file name
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for file operations.
pub type FilesResult<T> = Result<T, FilesError>;
