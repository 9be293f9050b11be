use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="container margin-vert--xl text--center">
            <h1 class="hero__title">"Page Not Found"</h1>
            <p>"We could not find what you were looking for."</p>
            <a class="button button--primary" href="/">"Return Home"</a>
        </main>
    }
}
