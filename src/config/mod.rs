//! User preferences for the workspace CLI.
//!
//! A single TOML file holds the options worth persisting across runs:
//!
//! - `technician` - Identity used by the "mine" case filter
//! - `output` - Preferred output format ("json" or "human")
//!
//! Located at `~/.config/bosun/config.toml`. Resolution precedence for the
//! technician identity: CLI flag > `BOSUN_TECHNICIAN` env var > config
//! file > built-in default (the demo workspace's on-shift technician).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The demo workspace's current-user identity.
pub const DEFAULT_TECHNICIAN: &str = "سارا رحیمی";

/// Environment variable overriding the configured technician.
pub const TECHNICIAN_ENV: &str = "BOSUN_TECHNICIAN";

/// Preferred output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Human,
}

/// Contents of `config.toml`. Every field is optional; missing fields fall
/// back at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Identity for the "mine" case filter
    pub technician: Option<String>,

    /// Preferred output format
    pub output: Option<OutputFormat>,
}

impl WorkspaceConfig {
    /// Parse a config file. A missing file yields the defaults; a present
    /// but malformed file is an error worth surfacing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Default config file location (`~/.config/bosun/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bosun").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// platform has no config directory.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Resolve the technician identity. Precedence: explicit flag > env var >
/// config file > built-in default.
pub fn resolve_technician(
    flag: Option<&str>,
    env: Option<&str>,
    config: &WorkspaceConfig,
) -> String {
    flag.map(str::to_string)
        .or_else(|| env.map(str::to_string))
        .or_else(|| config.technician.clone())
        .unwrap_or_else(|| DEFAULT_TECHNICIAN.to_string())
}

/// Resolve the output format. The `-H` flag always wins; otherwise the
/// config file decides, defaulting to JSON.
pub fn resolve_output(human_flag: bool, config: &WorkspaceConfig) -> OutputFormat {
    if human_flag {
        OutputFormat::Human
    } else {
        config.output.unwrap_or_default()
    }
}
