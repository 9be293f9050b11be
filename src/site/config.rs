use std::path::PathBuf;

use crate::services::AssetDir;

pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_OUT_DIR: &str = "build";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TITLE: &str = "Refract";
pub const DEFAULT_TAGLINE: &str = "Reactive components with isolated lenses";

/// Stylesheet path relative to the static directory.
pub const STYLESHEET: &str = "css/custom.css";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Root of the static assets; icons live under `img/`.
    pub static_dir: PathBuf,
    pub out_dir: PathBuf,
    pub bind_addr: String,
    pub title: String,
    pub tagline: String,
}

impl SiteConfig {
    pub fn assets(&self) -> AssetDir {
        AssetDir::new(self.static_dir.join("img"))
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.static_dir.join(STYLESHEET)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}
