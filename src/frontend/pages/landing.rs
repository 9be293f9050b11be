use leptos::prelude::*;

use crate::frontend::components::{Footer, HomepageFeatures};

#[component]
fn HomepageHeader(title: String, tagline: String) -> impl IntoView {
    view! {
        <header class="hero hero--primary hero-banner">
            <div class="container">
                <h1 class="hero__title">{title}</h1>
                <p class="hero__subtitle">{tagline}</p>
                <div class="buttons">
                    <a class="button button--secondary button--lg" href="/docs/intro">
                        "Get Started"
                    </a>
                </div>
            </div>
        </header>
    }
}

/// Landing page: hero banner followed by the features section.
#[component]
pub fn LandingPage(#[prop(into)] title: String, #[prop(into)] tagline: String) -> impl IntoView {
    let header_title = title.clone();

    view! {
        <HomepageHeader title=header_title tagline=tagline/>
        <main>
            <HomepageFeatures/>
        </main>
        <Footer title=title/>
    }
}
