//! Directory scanning and entry classification.
//!
//! One directory level per invocation: the scanner lists the base path,
//! keeps every entry whose name contains a backslash, sorts the names, and
//! partitions them into directory placeholders (trailing backslash) and file
//! candidates (everything else). The sort is load-bearing: enumeration order
//! from the filesystem is unspecified, and a stable lexicographic order keeps
//! runs reproducible and considers parent placeholders before their
//! children's names.

use anyhow::Result;
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::helpers::io_error_with_help;

/// The separator the flattening tool baked into entry names.
pub const FLAT_SEPARATOR: char = '\\';

/// A zero-byte entry standing in for a directory the extraction tool failed
/// to materialize. Timestamps are captured at scan time so they can be
/// transplanted onto the real directory later.
#[derive(Debug, Clone)]
pub struct DirPlaceholder {
    /// Entry name exactly as it appears on disk, trailing backslash included.
    pub raw_name: String,
    /// Full path of the placeholder entry itself.
    pub entry_path: PathBuf,
    /// Directory the placeholder stands for, under the base path.
    pub target_path: PathBuf,
    /// On-disk size; anything but zero fails the pre-check.
    pub size: u64,
    pub atime: FileTime,
    pub mtime: FileTime,
}

/// An entry whose flattened name encodes the nested relative path where its
/// content must end up.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    /// Entry name exactly as it appears on disk.
    pub raw_name: String,
    /// Full path of the flattened entry.
    pub entry_path: PathBuf,
    /// Reconstructed nested path, under the base path.
    pub target_path: PathBuf,
}

/// Classified snapshot of one directory level, both lists sorted by raw name.
#[derive(Debug, Default)]
pub struct Scan {
    pub placeholders: Vec<DirPlaceholder>,
    pub files: Vec<FileCandidate>,
}

impl Scan {
    /// True when the base directory held no backslash-bearing entries at all.
    pub fn is_empty(&self) -> bool {
        self.placeholders.is_empty() && self.files.is_empty()
    }
}

/// Replace every backslash with the portable path-segment separator.
/// Consecutive backslashes yield consecutive separators; nothing collapses
/// at the string level.
pub fn translate_name(raw: &str) -> String {
    raw.replace(FLAT_SEPARATOR, "/")
}

/// Target directory path for a placeholder name: translated, with the
/// trailing separator stripped.
pub fn placeholder_target(raw: &str) -> String {
    let translated = translate_name(raw);
    match translated.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => translated,
    }
}

/// List `base` once and classify every backslash-bearing entry.
///
/// Entries whose names are not valid UTF-8 cannot carry the ASCII backslash
/// pattern as a path encoding and are skipped. An unreadable base directory
/// is an error; a base with no matching entries is an empty (no-op) scan.
pub fn scan_dir(base: &Path) -> Result<Scan> {
    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(base).map_err(io_error_with_help("read base directory", base))? {
        let entry = entry.map_err(io_error_with_help("read directory entry", base))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            trace!(entry = %name.to_string_lossy(), "skipping non-UTF-8 entry name");
            continue;
        };
        if name.contains(FLAT_SEPARATOR) {
            names.push(name.to_string());
        }
    }
    names.sort();

    let mut scan = Scan::default();
    for name in names {
        let entry_path = base.join(&name);
        if name.ends_with(FLAT_SEPARATOR) {
            let meta = fs::symlink_metadata(&entry_path)
                .map_err(io_error_with_help("stat placeholder entry", &entry_path))?;
            let target_path = base.join(placeholder_target(&name));
            trace!(raw = %name, target = %target_path.display(), size = meta.len(), "placeholder");
            scan.placeholders.push(DirPlaceholder {
                raw_name: name,
                entry_path,
                target_path,
                size: meta.len(),
                atime: FileTime::from_last_access_time(&meta),
                mtime: FileTime::from_last_modification_time(&meta),
            });
        } else {
            let target_path = base.join(translate_name(&name));
            trace!(raw = %name, target = %target_path.display(), "file candidate");
            scan.files.push(FileCandidate {
                raw_name: name,
                entry_path,
                target_path,
            });
        }
    }

    debug!(
        base = %base.display(),
        placeholders = scan.placeholders.len(),
        files = scan.files.len(),
        "classified flattened entries"
    );
    Ok(scan)
}
