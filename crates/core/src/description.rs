//! `dataset_description.json` emission.
//!
//! Every BIDS dataset carries a description at its root. Fields that are not set are omitted from
//! the output; `BIDSVersion` is always written, taken from the [`CoreConfig`].

use crate::constants::{DATASET_DESCRIPTION_FILENAME, JSON_INDENT};
use crate::{BidsError, BidsResult, CoreConfig};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Either one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    /// Converts to a list, splitting a single string on `", "`.
    pub fn into_list(self) -> Vec<String> {
        match self {
            TextOrList::Text(text) => text.split(", ").map(str::to_owned).collect(),
            TextOrList::List(list) => list,
        }
    }
}

impl From<&str> for TextOrList {
    fn from(text: &str) -> Self {
        TextOrList::Text(text.to_owned())
    }
}

impl From<String> for TextOrList {
    fn from(text: String) -> Self {
        TextOrList::Text(text)
    }
}

impl From<Vec<String>> for TextOrList {
    fn from(list: Vec<String>) -> Self {
        TextOrList::List(list)
    }
}

impl From<Vec<&str>> for TextOrList {
    fn from(list: Vec<&str>) -> Self {
        TextOrList::List(list.into_iter().map(str::to_owned).collect())
    }
}

/// Descriptive fields of a dataset.
///
/// `authors`, `funding` and `references_and_links` are always written as lists; a single string
/// is split on `", "`. `acknowledgements` and `how_to_acknowledge` are written as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetDescription {
    pub name: Option<String>,
    pub license: Option<String>,
    pub authors: Option<TextOrList>,
    pub acknowledgements: Option<TextOrList>,
    pub how_to_acknowledge: Option<TextOrList>,
    pub funding: Option<TextOrList>,
    pub references_and_links: Option<TextOrList>,
    pub doi: Option<String>,
}

/// On-disk document. Field order here is the order in the JSON output.
#[derive(Serialize)]
struct DescriptionDocument<'a> {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(rename = "BIDSVersion")]
    bids_version: &'a str,
    #[serde(rename = "License", skip_serializing_if = "Option::is_none")]
    license: Option<&'a str>,
    #[serde(rename = "Authors", skip_serializing_if = "Option::is_none")]
    authors: Option<Vec<String>>,
    #[serde(rename = "Acknowledgements", skip_serializing_if = "Option::is_none")]
    acknowledgements: Option<&'a TextOrList>,
    #[serde(rename = "HowToAcknowledge", skip_serializing_if = "Option::is_none")]
    how_to_acknowledge: Option<&'a TextOrList>,
    #[serde(rename = "Funding", skip_serializing_if = "Option::is_none")]
    funding: Option<Vec<String>>,
    #[serde(rename = "ReferencesAndLinks", skip_serializing_if = "Option::is_none")]
    references_and_links: Option<Vec<String>>,
    #[serde(rename = "DatasetDOI", skip_serializing_if = "Option::is_none")]
    doi: Option<&'a str>,
}

impl DatasetDescription {
    /// Renders the description as pretty-printed JSON (4-space indent, trailing newline).
    pub fn to_json(&self, bids_version: &str) -> BidsResult<String> {
        let document = DescriptionDocument {
            name: self.name.as_deref(),
            bids_version,
            license: self.license.as_deref(),
            authors: self.authors.clone().map(TextOrList::into_list),
            acknowledgements: self.acknowledgements.as_ref(),
            how_to_acknowledge: self.how_to_acknowledge.as_ref(),
            funding: self.funding.clone().map(TextOrList::into_list),
            references_and_links: self.references_and_links.clone().map(TextOrList::into_list),
            doi: self.doi.as_deref(),
        };

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        document
            .serialize(&mut serializer)
            .map_err(BidsError::Serialization)?;
        buffer.push(b'\n');

        String::from_utf8(buffer)
            .map_err(|e| BidsError::InvalidInput(format!("description is not UTF-8: {}", e)))
    }

    /// Writes `dataset_description.json` into `dir` and returns the file path.
    ///
    /// # Errors
    ///
    /// Returns [`BidsError::FileWrite`] if the file cannot be written.
    pub fn write(&self, dir: &Path, config: &CoreConfig) -> BidsResult<PathBuf> {
        let json = self.to_json(config.bids_version())?;
        let fname = dir.join(DATASET_DESCRIPTION_FILENAME);
        fs::write(&fname, &json).map_err(BidsError::FileWrite)?;

        tracing::info!("Writing '{}'", fname.display());
        tracing::debug!("{}", json);
        Ok(fname)
    }
}
