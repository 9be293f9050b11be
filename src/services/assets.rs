use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::common::AssetError;
use crate::models::{Icon, IconRef};

/// Directory icon references are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads the SVG behind `icon`. Only plain relative paths inside the root are accepted.
    pub fn resolve(&self, icon: &IconRef) -> Result<Icon, AssetError> {
        let path = self.path_of(icon)?;

        let markup = match std::fs::read_to_string(&path) {
            Ok(markup) => markup,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AssetError::NotFound { path });
            }
            Err(source) => return Err(AssetError::Unreadable { path, source }),
        };

        if !markup.contains("<svg") {
            return Err(AssetError::NotSvg { path });
        }

        log::debug!("Resolved icon {} from {}", icon, path.display());
        Ok(Icon::new(icon.as_str(), strip_prolog(&markup)))
    }

    fn path_of(&self, icon: &IconRef) -> Result<PathBuf, AssetError> {
        let relative = Path::new(icon.as_str());
        let plain = !icon.as_str().trim().is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !plain {
            return Err(AssetError::InvalidReference(icon.as_str().to_string()));
        }

        Ok(self.root.join(relative))
    }
}

// Inline SVG must not carry an XML declaration or doctype.
fn strip_prolog(markup: &str) -> &str {
    match markup.find("<svg") {
        Some(start) => markup[start..].trim_end(),
        None => markup,
    }
}
