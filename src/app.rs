//! Application orchestrator.
//! Merges CLI flags into config, initializes logging, validates the base
//! path, and drives the scan -> pre-check -> restore pipeline.

use anyhow::Result;
use tracing::{debug, error, info};
use unbackslash::output as out;
use unbackslash::{Config, PrecheckError, precheck, restore, scan_dir};

use crate::logging::init_tracing;
use unbackslash::cli::Args;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);

    init_tracing(&cfg.log_level, args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting unbackslash: {:?}", args);

    cfg.validate()?;

    let scan = scan_dir(&cfg.base)?;
    if scan.is_empty() {
        info!(base = %cfg.base.display(), "no backslash-bearing entries; run is a no-op");
    }

    out::print_user("Performing pre-check.");
    if let Err(e) = precheck(&scan) {
        let kind = e.kind();
        match &e {
            PrecheckError::CorruptPlaceholder { placeholder, size } => {
                error!(kind, placeholder = %placeholder, size = *size, "Pre-check failed: placeholder carries data; no changes made")
            }
            PrecheckError::PathTypeConflict {
                placeholder,
                target,
            } => {
                error!(kind, placeholder = %placeholder, target = %target.display(), "Pre-check failed: target occupied by a file; no changes made")
            }
            PrecheckError::FileDirCollision { name } => {
                error!(kind, name = %name, "Pre-check failed: name claimed as both file and directory; no changes made")
            }
        }
        out::print_error(&format!("Aborted: {e}"));
        return Err(e.into());
    }

    out::print_user("Actually making changes. Hope you made a backup!");
    if let Err(e) = restore(&cfg.base, &scan) {
        error!(error = %e, "Mutation failed; the directory may be partially converted");
        out::print_error(&format!(
            "Mutation failed; the directory may be partially converted: {e}"
        ));
        return Err(e);
    }

    info!(
        base = %cfg.base.display(),
        dirs = scan.placeholders.len(),
        files = scan.files.len(),
        "Restore completed"
    );
    if !scan.is_empty() {
        out::print_success(&format!(
            "Restored {} directories and {} files under '{}'",
            scan.placeholders.len(),
            scan.files.len(),
            cfg.base.display()
        ));
    }
    Ok(())
}
