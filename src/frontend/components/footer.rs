use leptos::prelude::*;

#[component]
pub fn Footer(#[prop(into)] title: String) -> impl IntoView {
    let copyright = format!("{title} · Built with Rust.");

    view! {
        <footer class="footer footer--dark">
            <div class="container container-fluid text--center">
                <p class="footer__copyright">{copyright}</p>
            </div>
        </footer>
    }
}
