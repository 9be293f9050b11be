use std::fmt;
use std::sync::Arc;

use super::RichText;

/// Reference to an SVG file, relative to the site's image directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconRef(&'static str);

impl IconRef {
    pub const fn new(file: &'static str) -> Self {
        Self(file)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A product capability shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRecord {
    pub title: &'static str,
    pub icon: IconRef,
    pub description: RichText,
}

impl FeatureRecord {
    pub const fn new(title: &'static str, icon: IconRef, description: RichText) -> Self {
        Self {
            title,
            icon,
            description,
        }
    }
}

/// SVG markup loaded for an [`IconRef`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    file: &'static str,
    markup: Arc<str>,
}

impl Icon {
    pub fn new(file: &'static str, markup: impl Into<Arc<str>>) -> Self {
        Self {
            file,
            markup: markup.into(),
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// A feature whose icon has been loaded and is ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFeature {
    pub record: FeatureRecord,
    pub icon: Icon,
}

impl ResolvedFeature {
    pub fn title(&self) -> &'static str {
        self.record.title
    }

    pub fn description(&self) -> RichText {
        self.record.description
    }
}
