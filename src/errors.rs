//! Typed error definitions for the pre-check phase.
//! Provides one well-known failure mode per violated precondition so logs and
//! tests can match on the exact reason a run was refused.
//!
//! Mutation-phase failures are deliberately not enumerated here: once changes
//! begin, any I/O error simply propagates with context attached and halts the
//! run (no rollback).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrecheckError {
    /// A placeholder is supposed to be a pure structural marker; payload in
    /// one means the backslash-terminated name was never a directory marker
    /// and continuing would silently discard that content.
    #[error("dir placeholder \"{placeholder}\" contains data ({size} bytes)")]
    CorruptPlaceholder { placeholder: String, size: u64 },

    /// Something outside this run already occupies the spot the placeholder
    /// wants to become a directory.
    #[error("new dir \"{}\" is an existing file", .target.display())]
    PathTypeConflict { placeholder: String, target: PathBuf },

    /// The same namespace root is claimed as both a leaf file and a
    /// directory; there is no safe way to honor both.
    #[error("\"{name}\" would be both a file and a directory")]
    FileDirCollision { name: String },
}

impl PrecheckError {
    /// Stable machine-readable code for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PrecheckError::CorruptPlaceholder { .. } => "corrupt_placeholder",
            PrecheckError::PathTypeConflict { .. } => "path_type_conflict",
            PrecheckError::FileDirCollision { .. } => "file_dir_collision",
        }
    }
}
