//! # BIDS Core
//!
//! Core logic for laying out neurophysiology recordings as a BIDS dataset.
//!
//! This crate contains pure name construction and the file/folder management around it:
//! - Entity-based filenames in canonical order ([`paths::filename`])
//! - Subject/session/modality folders ([`paths::folders`])
//! - `dataset_description.json` emission ([`description`])
//! - Event-table ingestion ([`events`]) and directory listings ([`tree`])
//!
//! BrainVision copying and synthesis live in `bids_files` and are re-exported here.
//!
//! **No process concerns**: environment variables, logging setup and argument parsing belong in
//! the `bids` binary.

pub mod config;
pub mod constants;
pub mod description;
pub mod error;
pub mod events;
pub mod helpers;
pub mod paths;
pub mod tree;

pub use bids_files::{
    copy_recording_set, copyfile_brainvision, BrainVisionMember, FilesError, SyntheticRecording,
};
pub use bids_types::{check_key_val, EntityKey, EntityLabel, LabelError, Run};
pub use config::CoreConfig;
pub use description::{DatasetDescription, TextOrList};
pub use error::{BidsError, BidsResult};
pub use events::{read_events, EventSource, Events, StimChannel, StimTrace};
pub use paths::filename::BidsFilename;
pub use paths::folders::BidsFolders;
