//! Mutation pass: materialize placeholder directories, then relocate files.
//!
//! Runs only after the pre-check has accepted the whole scan. Ordering is the
//! one guarantee this module provides: every placeholder directory exists (and
//! every placeholder entry is gone) before the first file moves, so a file
//! relocation never races against directory creation. Failures mid-pass are
//! not rolled back; they halt the run with context and leave completed
//! mutations in place.

use anyhow::Result;
use filetime::set_file_times;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::io_error_with_help;
use crate::scan::{DirPlaceholder, FileCandidate, Scan};

/// Run the full mutation pass over an already-validated scan.
pub fn restore(base: &Path, scan: &Scan) -> Result<()> {
    materialize_dirs(&scan.placeholders)?;
    relocate_files(base, &scan.files)
}

/// Create the real directory for each placeholder in sorted order, then
/// remove the placeholder entry itself.
///
/// A target that already exists is left alone (the pre-check confirmed it is
/// a directory); its placeholder is still removed. On creation the
/// placeholder's original atime/mtime are transplanted onto the new directory
/// so the archive's chronology survives instead of being replaced by "now".
/// Timestamp transplant is best-effort: a filesystem that refuses it costs a
/// warning, not the run.
pub fn materialize_dirs(placeholders: &[DirPlaceholder]) -> Result<()> {
    for ph in placeholders {
        if !ph.target_path.exists() {
            fs::create_dir_all(&ph.target_path)
                .map_err(io_error_with_help("create directory", &ph.target_path))?;
            if let Err(e) = set_file_times(&ph.target_path, ph.atime, ph.mtime) {
                warn!(
                    path = %ph.target_path.display(),
                    error = %e,
                    "failed to transplant placeholder timestamps"
                );
            }
        }
        fs::remove_file(&ph.entry_path)
            .map_err(io_error_with_help("remove placeholder entry", &ph.entry_path))?;
        info!(placeholder = %ph.raw_name, dir = %ph.target_path.display(), "materialized directory");
    }
    Ok(())
}

/// Move each flattened file into its reconstructed nested path, creating any
/// missing ancestors first.
///
/// File bytes are never read or transformed; the move is a rename within the
/// base directory's filesystem. After each move, now-empty directories left
/// at the source side are pruned up to (never including) `base`.
pub fn relocate_files(base: &Path, files: &[FileCandidate]) -> Result<()> {
    for fc in files {
        if let Some(parent) = fc.target_path.parent() {
            fs::create_dir_all(parent)
                .map_err(io_error_with_help("create parent directory", parent))?;
        }
        fs::rename(&fc.entry_path, &fc.target_path)
            .map_err(io_error_with_help("move flattened file", &fc.entry_path))?;
        prune_empty_dirs(fc.entry_path.parent(), base);
        info!(from = %fc.raw_name, to = %fc.target_path.display(), "relocated file");
    }
    Ok(())
}

/// Best-effort removal of empty directories walking up from `start`, stopping
/// at `base` or at the first directory that is missing or non-empty.
fn prune_empty_dirs(start: Option<&Path>, base: &Path) {
    let mut cur = start;
    while let Some(dir) = cur {
        if dir == base || fs::remove_dir(dir).is_err() {
            break;
        }
        cur = dir.parent();
    }
}
