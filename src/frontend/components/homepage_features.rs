use leptos::prelude::*;

use super::feature::{column_class, Feature};
use crate::catalog::{self, ResolvedCatalog};

/// Lays out every feature of `catalog` in one responsive row, in catalog order.
#[component]
pub fn FeatureSection(catalog: ResolvedCatalog) -> impl IntoView {
    let column = column_class(catalog.len());
    let features = catalog
        .iter()
        .cloned()
        .enumerate()
        .map(|(position, feature)| {
            let column = column.clone();
            view! { <Feature feature=feature position=position column=column/> }
        })
        .collect_view();

    view! {
        <section class="features">
            <div class="container">
                <div class="row">{features}</div>
            </div>
        </section>
    }
}

/// Features section for the landing page, backed by the installed catalog.
#[component]
pub fn HomepageFeatures() -> impl IntoView {
    let catalog = match catalog::installed() {
        Some(installed) => installed.clone(),
        None => {
            log::warn!("Rendering features section before a catalog was installed");
            ResolvedCatalog::empty()
        }
    };

    view! { <FeatureSection catalog=catalog/> }
}
