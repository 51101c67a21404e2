//! Build configuration.
//!
//! A [`BuildConfig`] says where outputs go and which geometry to draw. The
//! output table itself (file names, sizes, compositing) is fixed in
//! [`crate::plan`]; only its roots and the brand prefix come from here.
//!
//! # JSON Format
//!
//! Every field is optional:
//!
//! ```json
//! {
//!   "distDir": "dist",
//!   "appDir": "../app",
//!   "brand": "hanzo",
//!   "background": "#000000",
//!   "geometry": { "viewBox": 1024.0 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compositor::BackgroundFill;
use crate::error::ConfigError;
use crate::geometry::GeometryConfig;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "logo-forge.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Root of the generated asset tree.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// Root of the sibling application checkout. Its consumers are only
    /// emitted when their directories already exist.
    #[serde(default = "default_app_dir")]
    pub app_dir: PathBuf,

    /// Prefix for source file names and the desktop app directory.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Fill behind composited icons and social cards. Accepts hex or a
    /// CSS color name.
    #[serde(default)]
    pub background: BackgroundFill,

    #[serde(default)]
    pub geometry: GeometryConfig,
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_app_dir() -> PathBuf {
    PathBuf::from("../app")
}

fn default_brand() -> String {
    "hanzo".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            app_dir: default_app_dir(),
            brand: default_brand(),
            background: BackgroundFill::default(),
            geometry: GeometryConfig::default(),
        }
    }
}

impl BuildConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("{} not found, using default configuration", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
