use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn an icon reference into usable SVG markup.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Icon reference {0:?} is not a plain relative path")]
    InvalidReference(String),

    #[error("Icon {path:?} not found")]
    NotFound { path: PathBuf },

    #[error("Icon {path:?} could not be read: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Icon {path:?} does not contain SVG markup")]
    NotSvg { path: PathBuf },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Feature #{position} has an empty {field}")]
    EmptyField {
        position: usize,
        field: &'static str,
    },

    #[error("Feature catalog has already been installed")]
    AlreadyInstalled,
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Could not serve on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
