pub mod components;
pub mod pages;

use askama::Template;
use leptos::prelude::*;

use crate::common::SiteError;
use crate::site::SiteConfig;
use components::HomepageFeatures;
use pages::{LandingPage, NotFound};

/// HTML document wrapping a server-rendered body.
#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate<'a> {
    pub title: &'a str,
    pub tagline: &'a str,
    pub stylesheet: &'a str,
    pub body: String,
}

/// Renders a view to an HTML string under a fresh reactive owner.
pub fn render_html<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| view().to_html())
}

/// The features section alone, ready to embed in another page.
pub fn render_features() -> String {
    render_html(|| view! { <HomepageFeatures/> })
}

/// Full landing page document. `stylesheet` is the href of the site stylesheet.
pub fn render_landing_page(config: &SiteConfig, stylesheet: &str) -> Result<String, SiteError> {
    let title = config.title.clone();
    let tagline = config.tagline.clone();
    let body = render_html(move || view! { <LandingPage title=title tagline=tagline/> });

    let page = LayoutTemplate {
        title: &config.title,
        tagline: &config.tagline,
        stylesheet,
        body,
    }
    .render()?;

    Ok(page)
}

pub fn render_not_found(config: &SiteConfig, stylesheet: &str) -> Result<String, SiteError> {
    let page = LayoutTemplate {
        title: &config.title,
        tagline: &config.tagline,
        stylesheet,
        body: render_html(|| view! { <NotFound/> }),
    }
    .render()?;

    Ok(page)
}
