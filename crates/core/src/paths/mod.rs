//! BIDS path construction.
//!
//! This module builds the names BIDS mandates for files and folders inside a dataset. Name
//! construction is pure; the only filesystem access is the explicit directory creation offered by
//! [`folders::BidsFolders::build`].

pub mod filename;
pub mod folders;
