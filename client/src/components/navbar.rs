//! Top navigation bar shared by every page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Site navigation with section anchors and app links.
#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let links_class = move || {
        if menu_open.get() {
            "navbar__links navbar__links--open"
        } else {
            "navbar__links"
        }
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Vista"</A>
            <button
                class="navbar__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <div class=links_class on:click=move |_| menu_open.set(false)>
                <a class="navbar__link" href="/#staging">"AI Staging"</a>
                <a class="navbar__link" href="/#voice">"Voice Design"</a>
                <A href="/compare" attr:class="navbar__link">"Compare"</A>
                <A href="/studio" attr:class="navbar__link">"Studio"</A>
                <A href="/dashboard" attr:class="navbar__link navbar__link--cta">"Seller Dashboard"</A>
            </div>
        </nav>
    }
}
