//! Read-only pre-check over a classified scan.
//!
//! Every placeholder is verified against three conditions before anything is
//! mutated. The pass fails fast on the first violation and touches nothing on
//! disk, so a refused run leaves the directory byte-for-byte as it was found.
//! Keeping this separate from the mutation phase means partial state after an
//! interrupted mutation can never be blamed on a missed check.

use tracing::debug;

use crate::errors::PrecheckError;
use crate::scan::{FLAT_SEPARATOR, Scan};

/// Verify every placeholder in sorted order; surface the first violation.
///
/// Conditions, per placeholder:
/// - its on-disk size is exactly zero;
/// - if its target path already exists, the target is a directory;
/// - its raw name minus the trailing separator matches no file candidate.
pub fn precheck(scan: &Scan) -> Result<(), PrecheckError> {
    for ph in &scan.placeholders {
        if ph.size != 0 {
            return Err(PrecheckError::CorruptPlaceholder {
                placeholder: ph.raw_name.clone(),
                size: ph.size,
            });
        }

        if ph.target_path.exists() && !ph.target_path.is_dir() {
            return Err(PrecheckError::PathTypeConflict {
                placeholder: ph.raw_name.clone(),
                target: ph.target_path.clone(),
            });
        }

        let stem = ph
            .raw_name
            .strip_suffix(FLAT_SEPARATOR)
            .unwrap_or(&ph.raw_name);
        if scan.files.iter().any(|f| f.raw_name == stem) {
            return Err(PrecheckError::FileDirCollision {
                name: ph.raw_name.clone(),
            });
        }
    }

    debug!(placeholders = scan.placeholders.len(), "pre-check passed");
    Ok(())
}
