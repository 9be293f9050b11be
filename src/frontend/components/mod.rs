//! Reusable UI components for the Refract site

mod feature;
mod footer;
mod homepage_features;

pub use feature::{column_class, Description, Feature};
pub use footer::Footer;
pub use homepage_features::{FeatureSection, HomepageFeatures};
