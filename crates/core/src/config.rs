//! Site runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the renderer and
//! the server. Request handling never reads environment variables.

use crate::{FolioError, FolioResult};
use std::path::{Path, PathBuf};

/// Site configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    addr: String,
    assets_dir: PathBuf,
    base_url: String,
}

impl SiteConfig {
    /// Create a new `SiteConfig`.
    ///
    /// `base_url` is prefixed to every generated link; pass an empty string for
    /// site-relative links.
    pub fn new(addr: String, assets_dir: PathBuf, base_url: String) -> FolioResult<Self> {
        if addr.trim().is_empty() {
            return Err(FolioError::InvalidInput("addr cannot be empty".into()));
        }

        Ok(Self {
            addr,
            assets_dir,
            base_url: base_url_from_env_value(Some(base_url)),
        })
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Prefix a site-absolute path with the configured base URL.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: crate::constants::DEFAULT_ADDR.into(),
            assets_dir: PathBuf::from(crate::constants::DEFAULT_ASSETS_DIR),
            base_url: String::new(),
        }
    }
}

/// Normalise an optional base URL value.
///
/// `None`, empty and whitespace-only values become the empty prefix. A trailing `/` is
/// dropped so that joining with a site-absolute path never doubles it.
pub fn base_url_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .unwrap_or_default()
}
