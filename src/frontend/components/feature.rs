use leptos::prelude::*;

use crate::models::{Inline, ResolvedFeature, RichText};

/// Grid column class giving each of `count` items an equal share of a 12-column row.
pub fn column_class(count: usize) -> String {
    match count {
        1 | 2 | 3 | 4 | 6 | 12 => format!("col col--{}", 12 / count),
        _ => "col".to_string(),
    }
}

/// One feature block: icon, heading and description.
#[component]
pub fn Feature(
    feature: ResolvedFeature,
    position: usize,
    #[prop(into)] column: String,
) -> impl IntoView {
    let title = feature.title();
    let description = feature.description();
    let svg = feature.icon.markup().to_string();
    let index = position.to_string();

    view! {
        <div class=column data-feature-index=index>
            <div class="text--center">
                <div class="feature-svg" role="img" aria-label=title inner_html=svg></div>
            </div>
            <div class="text--center padding-horiz--md">
                <h3>{title}</h3>
                <p>
                    <Description text=description/>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn Description(text: RichText) -> impl IntoView {
    text.inlines()
        .iter()
        .map(|inline| match *inline {
            Inline::Text(s) => s.into_any(),
            Inline::Strong(s) => view! { <strong>{s}</strong> }.into_any(),
            Inline::Emphasis(s) => view! { <em>{s}</em> }.into_any(),
            Inline::Code(s) => view! { <code>{s}</code> }.into_any(),
            Inline::Link { label, href } => view! { <a href=href>{label}</a> }.into_any(),
        })
        .collect_view()
}
