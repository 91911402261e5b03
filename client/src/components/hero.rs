//! Landing hero with a rotating highlight word.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::rotation::{Rotation, spawn_rotation};

const HIGHLIGHTS: [&str; 4] = ["sell faster", "look finished", "feel like home", "stand out"];

#[component]
pub fn Hero() -> impl IntoView {
    let rotation = RwSignal::new(Rotation::new(HIGHLIGHTS.len()));
    spawn_rotation(rotation);

    let highlight = move || rotation.get().pick(&HIGHLIGHTS).copied().unwrap_or_default();

    view! {
        <section class="hero" id="top">
            <div class="hero__content">
                <p class="hero__eyebrow">"Real-estate visualization, reimagined"</p>
                <h1 class="hero__title">
                    "Listings that "
                    {move || {
                        let word = highlight();
                        view! { <span class="hero__highlight" data-word=word>{word}</span> }
                    }}
                </h1>
                <p class="hero__lede">
                    "Stage empty rooms with AI, redesign them by voice, and track how buyers respond, all from one dashboard."
                </p>
                <div class="hero__actions">
                    <A href="/studio" attr:class="btn btn--primary">"Stage a room"</A>
                    <A href="/dashboard" attr:class="btn">"Open dashboard"</A>
                </div>
            </div>
            <div class="hero__glow" aria-hidden="true"></div>
        </section>
    }
}
