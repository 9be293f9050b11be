//! Feature catalog: the ordered records behind the landing page features section.

mod builtin;

use std::sync::{Arc, OnceLock};

use crate::common::{CatalogError, SiteError};
use crate::models::{FeatureRecord, ResolvedFeature};
use crate::services::AssetDir;

pub use builtin::FEATURE_LIST;

static INSTALLED: OnceLock<ResolvedCatalog> = OnceLock::new();

/// Ordered feature records; order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureCatalog {
    records: Vec<FeatureRecord>,
}

impl FeatureCatalog {
    pub fn new(records: impl Into<Vec<FeatureRecord>>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The catalog compiled into the site.
    pub fn builtin() -> Self {
        Self::new(FEATURE_LIST)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureRecord> {
        self.records.iter()
    }

    /// Checks that every record has a title, an icon reference and a description.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (position, record) in self.records.iter().enumerate() {
            let field = if record.title.trim().is_empty() {
                Some("title")
            } else if record.icon.as_str().trim().is_empty() {
                Some("icon")
            } else if record.description.is_empty() {
                Some("description")
            } else {
                None
            };

            if let Some(field) = field {
                return Err(CatalogError::EmptyField { position, field });
            }
        }

        Ok(())
    }

    /// Validates the catalog and loads every icon. Nothing is returned unless all of them resolve.
    pub fn resolve(&self, assets: &AssetDir) -> Result<ResolvedCatalog, SiteError> {
        self.validate()?;

        let features = self
            .records
            .iter()
            .map(|record| -> Result<ResolvedFeature, SiteError> {
                let icon = assets.resolve(&record.icon)?;
                Ok(ResolvedFeature {
                    record: *record,
                    icon,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResolvedCatalog::new(features))
    }
}

/// Catalog whose icons are loaded. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCatalog {
    features: Arc<[ResolvedFeature]>,
}

impl ResolvedCatalog {
    pub fn new(features: impl Into<Arc<[ResolvedFeature]>>) -> Self {
        Self {
            features: features.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedFeature> {
        self.features.iter()
    }
}

impl Default for ResolvedCatalog {
    fn default() -> Self {
        Self::empty()
    }
}

/// Makes `catalog` the process-wide catalog. Only the first call succeeds.
pub fn install(catalog: ResolvedCatalog) -> Result<&'static ResolvedCatalog, CatalogError> {
    let mut fresh = false;
    let installed = INSTALLED.get_or_init(|| {
        fresh = true;
        catalog
    });

    if !fresh {
        return Err(CatalogError::AlreadyInstalled);
    }

    log::info!("Installed feature catalog with {} entries", installed.len());
    Ok(installed)
}

pub fn installed() -> Option<&'static ResolvedCatalog> {
    INSTALLED.get()
}

/// Resolves the built-in catalog against `assets` and installs it.
pub fn install_builtin(assets: &AssetDir) -> Result<&'static ResolvedCatalog, SiteError> {
    let resolved = FeatureCatalog::builtin().resolve(assets)?;
    Ok(install(resolved)?)
}
