//! Configuration file support for skillgap.
//!
//! Loads settings from `skillgap.toml` inside the data directory, with
//! the precedence: CLI arguments > environment variables > config file
//! > built-in defaults. CLI and environment are handled by clap; this
//! module only fills what both left unset.
//!
//! ## Configuration File Format
//!
//! ```toml
//! # <data-dir>/skillgap.toml
//!
//! # Directory the report files are written to
//! out_dir = "./output"
//!
//! # Ranking depth of the critical-skill report
//! top_n = 10
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the optional per-snapshot configuration.
pub const CONFIG_FILE: &str = "skillgap.toml";

/// Settings a snapshot directory may pin for its runs.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory the report files are written to.
    pub out_dir: Option<PathBuf>,
    /// Ranking depth of the critical-skill report.
    pub top_n: Option<usize>,
}

/// Loads `skillgap.toml` from the data directory if present.
///
/// Returns `Ok(None)` when the file does not exist and `Err` when it
/// exists but fails to parse.
pub fn load_config(data_dir: &Path) -> Result<Option<Config>> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("cannot parse {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded configuration file");

    Ok(Some(config))
}
