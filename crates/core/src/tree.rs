//! Directory tree listing.

use crate::constants::TREE_INDENT;
use crate::{BidsError, BidsResult};
use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Lists `dir` recursively, one line per entry.
///
/// Each line is the entry name prefixed by one [`TREE_INDENT`] per nesting level and a space; the
/// root line is the bare name of `dir`. Within a directory, files come before sub-directories and
/// each group is sorted by name.
///
/// # Errors
///
/// Returns [`BidsError::FileRead`] if any directory cannot be read.
pub fn dir_tree_lines(dir: &Path) -> BidsResult<Vec<String>> {
    let mut lines = Vec::new();
    for entry in WalkDir::new(dir).sort_by(files_first) {
        let entry = entry.map_err(|e| BidsError::FileRead(e.into()))?;
        let name = entry.file_name().to_string_lossy();
        if entry.depth() == 0 {
            lines.push(name.into_owned());
        } else {
            lines.push(format!("{} {}", TREE_INDENT.repeat(entry.depth()), name));
        }
    }
    Ok(lines)
}

/// Prints [`dir_tree_lines`] to stdout.
pub fn print_dir_tree(dir: &Path) -> BidsResult<()> {
    for line in dir_tree_lines(dir)? {
        println!("{}", line);
    }
    Ok(())
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
