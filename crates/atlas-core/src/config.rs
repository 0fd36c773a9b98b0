//! User configuration loaded from a JSON file.
//!
//! The default location follows the XDG Base Directory specification:
//! `$XDG_CONFIG_HOME/atlas/config.json` or `~/.config/atlas/config.json`.
//!
//! ```json
//! { "offset_sign": "honor", "color": false }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    display::OffsetSign,
    error::{RenderError, Result},
    renderer::RenderOptions,
};

/// Persistent user preferences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sign policy for `UTC±HH:MM` offsets
    pub offset_sign: OffsetSign,

    /// Colour the table header in the terminal
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            offset_sign: OffsetSign::default(),
            color: true,
        }
    }
}

impl Config {
    /// Loads configuration from an explicit path or the XDG default.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::FileSystem` if the file cannot be read and
    /// `RenderError::Configuration` if it is not valid configuration JSON
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => match Self::default_path() {
                Some(path) => Self::from_path(&path),
                None => {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Returns the existing default configuration file, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("atlas").find_config_file("config.json")
    }

    /// Reads configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| RenderError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&contents).map_err(|e| RenderError::Configuration {
            message: format!("{}: {e}", path.display()),
        })
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RenderError::Configuration {
            message: e.to_string(),
        })
    }

    /// Rendering options derived from this configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            offset_sign: self.offset_sign,
        }
    }
}
