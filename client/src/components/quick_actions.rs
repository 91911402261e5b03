//! Dashboard shortcut tiles.

use leptos::prelude::*;
use leptos_router::components::A;

const ACTIONS: [(&str, &str, &str); 4] = [
    ("Stage a room", "Upload a photo and furnish it with AI.", "/studio"),
    ("Compare versions", "Slide between the original and staged shots.", "/compare"),
    ("Share listing", "Send buyers a link to the staged gallery.", "/dashboard#share"),
    ("View analytics", "See views and leads per listing.", "/dashboard#analytics"),
];

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <section class="quick-actions" id="share">
            <h2 class="quick-actions__title">"Quick actions"</h2>
            <div class="quick-actions__grid">
                {ACTIONS
                    .into_iter()
                    .map(|(title, body, href)| {
                        view! {
                            <A href=href attr:class="quick-actions__tile">
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
