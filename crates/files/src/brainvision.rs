//! Pointer-preserving copies of BrainVision members.
//!
//! The `.vhdr` header names its `.eeg` and `.vmrk` siblings, and the `.vmrk` marker file names
//! the `.eeg` payload. Copying a text member under a new basename therefore has to rewrite those
//! pointer lines, otherwise readers will look for the old files.
//!
//! Only lines whose trimmed content is exactly `DataFile=<old>.eeg` or `MarkerFile=<old>.vmrk`
//! are rewritten. Lines with interior whitespace (`DataFile = old.eeg`) or any other variation are
//! copied verbatim.
//!
//! The binary payload is copied into a temporary file next to the destination and persisted with
//! a rename, so readers never observe a partial `.eeg`. Text members are written line by line and
//! are not crash-atomic.

use crate::extension::{basename, split_extension, BrainVisionMember};
use crate::{FilesError, FilesResult};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Copies one BrainVision member to `dest`, adjusting pointers to the new basename.
///
/// `src` and `dest` must carry the same extension, one of `.eeg`, `.vhdr` or `.vmrk`.
/// Siblings are not touched: moving a full set takes one call per member
/// (see [`copy_recording_set`]).
///
/// # Errors
///
/// Returns `FilesError` if:
/// - `src` does not exist ([`FilesError::SourceNotFound`])
/// - the extensions differ ([`FilesError::ExtensionMismatch`])
/// - the extension is not a BrainVision one ([`FilesError::UnsupportedExtension`])
/// - reading or writing fails (I/O)
///
/// No destination file is created when a precondition fails.
pub fn copyfile_brainvision(src: &Path, dest: &Path) -> FilesResult<()> {
    if !src.exists() {
        return Err(FilesError::SourceNotFound(src.to_path_buf()));
    }

    let (_, ext_src) = split_extension(src)?;
    let (_, ext_dest) = split_extension(dest)?;
    if ext_src != ext_dest {
        return Err(FilesError::ExtensionMismatch {
            src: ext_src,
            dest: ext_dest,
        });
    }

    let member = BrainVisionMember::from_extension(&ext_src)?;
    if !member.is_text() {
        return copy_binary(src, dest);
    }

    let basename_src = basename(src)?;
    let basename_dest = basename(dest)?;
    let search_lines = pointer_lines(member, &basename_src);

    let content = fs::read(src).map_err(|e| {
        FilesError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read source file {}: {}", src.display(), e),
        ))
    })?;

    let file = fs::File::create(dest).map_err(|e| {
        FilesError::Io(io::Error::new(
            e.kind(),
            format!("Failed to create {}: {}", dest.display(), e),
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let mut rewritten = 0usize;
    for line in content.split_inclusive(|&b| b == b'\n') {
        if search_lines.iter().any(|s| line.trim_ascii() == s.as_bytes()) {
            writer.write_all(&replace_all(
                line,
                basename_src.as_bytes(),
                basename_dest.as_bytes(),
            ))?;
            rewritten += 1;
        } else {
            writer.write_all(line)?;
        }
    }
    writer.flush()?;

    tracing::debug!(
        "copied {} -> {} ({} pointer lines rewritten)",
        src.display(),
        dest.display(),
        rewritten
    );
    Ok(())
}

/// Copies a full BrainVision set, driven by its header.
///
/// The `.eeg` and `.vmrk` siblings of `src_header` are copied next to `dest_header` under its
/// basename, then the header itself. Each member goes through [`copyfile_brainvision`].
///
/// # Errors
///
/// Returns [`FilesError::UnsupportedExtension`] if either path is not a `.vhdr`, plus any error
/// from copying an individual member. Members copied before the failing one are left in place.
pub fn copy_recording_set(src_header: &Path, dest_header: &Path) -> FilesResult<()> {
    for path in [src_header, dest_header] {
        let (_, ext) = split_extension(path)?;
        if BrainVisionMember::from_extension(&ext)? != BrainVisionMember::Header {
            return Err(FilesError::UnsupportedExtension(ext));
        }
    }

    let (src_stem, _) = split_extension(src_header)?;
    let (dest_stem, _) = split_extension(dest_header)?;

    for member in [
        BrainVisionMember::Data,
        BrainVisionMember::Marker,
        BrainVisionMember::Header,
    ] {
        let src = with_extension(&src_stem, member);
        let dest = with_extension(&dest_stem, member);
        copyfile_brainvision(&src, &dest)?;
    }

    tracing::info!(
        "copied BrainVision set {} -> {}",
        src_header.display(),
        dest_header.display()
    );
    Ok(())
}

fn with_extension(stem: &Path, member: BrainVisionMember) -> std::path::PathBuf {
    let mut name = stem.as_os_str().to_owned();
    name.push(member.extension());
    name.into()
}

/// The pointer lines a member of type `member` holds when its basename is `basename`.
fn pointer_lines(member: BrainVisionMember, basename: &str) -> Vec<String> {
    let mut lines = vec![format!("DataFile={}.eeg", basename)];
    if member == BrainVisionMember::Header {
        lines.push(format!("MarkerFile={}.vmrk", basename));
    }
    lines
}

/// Replaces every non-overlapping occurrence of `from` in `haystack` with `to`.
fn replace_all(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    if from.is_empty() {
        return haystack.to_vec();
    }

    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = rest.windows(from.len()).position(|w| w == from) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(to);
        rest = &rest[pos + from.len()..];
    }
    out.extend_from_slice(rest);
    out
}

fn copy_binary(src: &Path, dest: &Path) -> FilesResult<()> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut source = fs::File::open(src).map_err(|e| {
        FilesError::Io(io::Error::new(
            e.kind(),
            format!("Failed to open source file {}: {}", src.display(), e),
        ))
    })?;
    let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(|e| {
        FilesError::Io(io::Error::new(
            e.kind(),
            format!("Failed to stage copy in {}: {}", parent.display(), e),
        ))
    })?;

    let bytes = io::copy(&mut source, staged.as_file_mut())?;
    staged.as_file().sync_all()?;
    staged.persist(dest).map_err(|e| {
        FilesError::Io(io::Error::new(
            e.error.kind(),
            format!("Failed to write file to {}: {}", dest.display(), e.error),
        ))
    })?;

    tracing::debug!(
        "copied {} -> {} ({} bytes)",
        src.display(),
        dest.display(),
        bytes
    );
    Ok(())
}
