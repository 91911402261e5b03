//! Full-width before/after comparison of the current studio session, or of
//! the demo room when no session exists yet.

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::compare_slider::CompareSlider;
use crate::components::navbar::Navbar;
use crate::components::staging_pitch::{DEMO_AFTER_SRC, DEMO_BEFORE_SRC};
use crate::state::studio::StudioState;

/// Original and latest image of the session, falling back to the demo pair.
fn comparison_sources(state: &StudioState) -> (String, String) {
    state
        .comparison()
        .unwrap_or_else(|| (DEMO_BEFORE_SRC.to_owned(), DEMO_AFTER_SRC.to_owned()))
}

#[component]
pub fn ComparePage() -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();
    let sources = Memo::new(move |_| studio.with(comparison_sources));
    let has_session = move || studio.with(|s| s.comparison().is_some());

    view! {
        <div class="compare-page">
            <Navbar/>
            <main class="compare">
                <header class="compare__header">
                    <h1>"Before & after"</h1>
                    <Show
                        when=has_session
                        fallback=|| {
                            view! {
                                <p class="compare__note">
                                    "Showing a demo room. "
                                    <A href="/studio">"Start a staging session"</A>
                                    " to compare your own photos."
                                </p>
                            }
                        }
                    >
                        <p class="compare__note">"Original upload versus your latest staged version."</p>
                    </Show>
                </header>
                <CompareSlider
                    before_src=Signal::derive(move || sources.get().0)
                    after_src=Signal::derive(move || sources.get().1)
                    before_label="Original"
                    after_label="Staged"
                />
            </main>
        </div>
    }
}
