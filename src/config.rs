//! Runtime configuration.
//! - Config holds the base path and verbosity with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use anyhow::{Context, Result, bail};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, error};

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one repair run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose flattened entries get repaired
    pub base: PathBuf,
    /// Console verbosity
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
            log_level: LogLevel::Normal,
        }
    }
}

impl Config {
    /// Construct a Config with an explicit base; other fields use defaults.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            ..Default::default()
        }
    }

    /// Validate the base path for sanity and permissions.
    ///
    /// - base must exist and be a directory.
    /// - base must be readable (probed with a directory listing).
    pub fn validate(&self) -> Result<()> {
        if !self.base.exists() {
            error!("Base directory does not exist: {}", self.base.display());
            bail!("Base directory does not exist: {}", self.base.display());
        }
        if !self.base.is_dir() {
            error!("Base path is not a directory: {}", self.base.display());
            bail!("Base path is not a directory: {}", self.base.display());
        }

        // readability probe
        fs::read_dir(&self.base).with_context(|| {
            format!(
                "Cannot read base directory '{}'; check permissions",
                self.base.display()
            )
        })?;
        debug!("Base directory readable: {}", self.base.display());

        Ok(())
    }
}
