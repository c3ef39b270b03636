//! Launcher configuration.
//!
//! Read from `<config dir>/snix-launcher/config.toml` when present. Every
//! field is optional; a missing file means the defaults below. The
//! `SNIX_LAUNCHER_BASE_URL` and `SNIX_LAUNCHER_ICONS_DIR` environment
//! variables override the file, which is what Alfred workflow variables
//! end up as.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const BASE_URL_ENV: &str = "SNIX_LAUNCHER_BASE_URL";
pub const ICONS_DIR_ENV: &str = "SNIX_LAUNCHER_ICONS_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the massCode REST API.
    pub base_url: String,
    /// Scheme used for the "open in app" action, `<scheme>://snippets/<id>`.
    pub url_scheme: String,
    /// Name shown in the "open in app" subtitle.
    pub app_name: String,
    /// Directory holding `<icon>.svg` files for folder icons.
    pub icons_dir: PathBuf,
    /// Subtitle for snippets without a known folder.
    pub fallback_label: String,
    /// Request timeout. Unset means the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:3033"),
            url_scheme: String::from("masscode"),
            app_name: String::from("massCode"),
            icons_dir: PathBuf::from("icons"),
            fallback_label: String::from("Inbox"),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snix-launcher").join("config.toml"))
    }

    /// Loads the config file at `path`, or the default location when `None`.
    ///
    /// An explicitly given file must exist; the default one may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Applies environment overrides; `lookup` is `std::env::var` in practice.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
        if let Some(icons_dir) = lookup(ICONS_DIR_ENV).filter(|v| !v.is_empty()) {
            self.icons_dir = PathBuf::from(icons_dir);
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Joins `path` onto the base URL without doubling the slash.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Deep link that opens the snippet in the desktop app.
    pub fn open_url(&self, snippet_id: &str) -> String {
        format!("{}://snippets/{}", self.url_scheme, snippet_id)
    }
}
