//! Extension classification for BrainVision members.

use crate::{FilesError, FilesResult};
use std::path::{Path, PathBuf};

/// One member of a BrainVision file set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrainVisionMember {
    /// `.eeg`, the binary payload.
    Data,
    /// `.vhdr`, the text header.
    Header,
    /// `.vmrk`, the text marker list.
    Marker,
}

impl BrainVisionMember {
    pub const ALL: [BrainVisionMember; 3] = [
        BrainVisionMember::Data,
        BrainVisionMember::Header,
        BrainVisionMember::Marker,
    ];

    /// The extension including its leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            BrainVisionMember::Data => ".eeg",
            BrainVisionMember::Header => ".vhdr",
            BrainVisionMember::Marker => ".vmrk",
        }
    }

    /// Classifies an extension (with leading dot). Matching is case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::UnsupportedExtension`] for anything other than `.eeg`, `.vhdr`
    /// or `.vmrk`.
    pub fn from_extension(ext: &str) -> FilesResult<Self> {
        Self::ALL
            .into_iter()
            .find(|member| member.extension() == ext)
            .ok_or_else(|| FilesError::UnsupportedExtension(ext.to_owned()))
    }

    /// Whether the member holds pointer lines that must follow a rename.
    pub const fn is_text(self) -> bool {
        !matches!(self, BrainVisionMember::Data)
    }
}

/// Splits a path into everything before the extension and the extension itself.
///
/// The extension keeps its leading dot and is empty when the file name has none.
/// `.ds` directories (CTF recordings) are reported as a whole extension like any other.
///
/// # Errors
///
/// Returns [`FilesError::InvalidPath`] if the file name is missing or not UTF-8.
pub fn split_extension(path: &Path) -> FilesResult<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FilesError::InvalidPath(path.display().to_string()))?;

    // A leading dot marks a hidden file, not an extension.
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => {
            let (stem, ext) = file_name.split_at(idx);
            Ok((path.with_file_name(stem), ext.to_owned()))
        }
        _ => Ok((path.to_path_buf(), String::new())),
    }
}

/// Returns the file name without its extension.
pub(crate) fn basename(path: &Path) -> FilesResult<String> {
    let (stem, _) = split_extension(path)?;
    stem.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .ok_or_else(|| FilesError::InvalidPath(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        let (stem, ext) = split_extension(Path::new("data/raw/test.vhdr")).unwrap();
        assert_eq!(stem, Path::new("data/raw/test"));
        assert_eq!(ext, ".vhdr");

        let (stem, ext) = split_extension(Path::new("a.b.eeg")).unwrap();
        assert_eq!(stem, Path::new("a.b"));
        assert_eq!(ext, ".eeg");
    }

    #[test]
    fn test_split_extension_without_extension() {
        let (stem, ext) = split_extension(Path::new("dir/README")).unwrap();
        assert_eq!(stem, Path::new("dir/README"));
        assert_eq!(ext, "");

        let (_, ext) = split_extension(Path::new(".hidden")).unwrap();
        assert_eq!(ext, "");
    }

    #[test]
    fn test_split_extension_rejects_empty_name() {
        assert!(matches!(
            split_extension(Path::new("/")),
            Err(FilesError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(
            BrainVisionMember::from_extension(".eeg").unwrap(),
            BrainVisionMember::Data
        );
        assert_eq!(
            BrainVisionMember::from_extension(".vhdr").unwrap(),
            BrainVisionMember::Header
        );
        assert_eq!(
            BrainVisionMember::from_extension(".vmrk").unwrap(),
            BrainVisionMember::Marker
        );
        assert!(matches!(
            BrainVisionMember::from_extension(".VHDR"),
            Err(FilesError::UnsupportedExtension(ext)) if ext == ".VHDR"
        ));
        assert!(BrainVisionMember::from_extension(".fif").is_err());
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename(Path::new("x/y/sub-01_eeg.vhdr")).unwrap(), "sub-01_eeg");
        assert_eq!(basename(Path::new("plain")).unwrap(), "plain");
    }
}
