use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::common::SiteError;
use crate::frontend::render_landing_page;

use super::config::{SiteConfig, STYLESHEET};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub features: usize,
}

/// Exports the landing page to `config.out_dir`.
///
/// Icons are resolved before anything is written, so a missing asset leaves no output behind.
pub fn build(config: &SiteConfig) -> Result<BuildReport, SiteError> {
    let installed = match catalog::installed() {
        Some(installed) => installed,
        None => catalog::install_builtin(&config.assets())?,
    };

    let page = render_landing_page(config, STYLESHEET)?;

    let out_dir = config.out_dir.clone();
    fs::create_dir_all(&out_dir).map_err(|e| SiteError::io(&out_dir, e))?;

    let mut written = Vec::new();

    let index = out_dir.join("index.html");
    write_file(&index, page.as_bytes())?;
    written.push(index);

    let stylesheet = config.stylesheet_path();
    if stylesheet.is_file() {
        let target = out_dir.join(STYLESHEET);
        copy_file(&stylesheet, &target)?;
        written.push(target);
    } else {
        log::warn!("No stylesheet at {}, skipping", stylesheet.display());
    }

    log::info!(
        "Built landing page with {} features into {}",
        installed.len(),
        out_dir.display()
    );

    Ok(BuildReport {
        out_dir,
        written,
        features: installed.len(),
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), SiteError> {
    fs::write(path, contents).map_err(|e| SiteError::io(path, e))
}

fn copy_file(from: &Path, to: &Path) -> Result<(), SiteError> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::copy(from, to).map_err(|e| SiteError::io(from, e))?;
    Ok(())
}
