//! "AI staging" landing section with an embedded before/after slider.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::compare_slider::CompareSlider;

pub const DEMO_BEFORE_SRC: &str = "/images/living-room-before.jpg";
pub const DEMO_AFTER_SRC: &str = "/images/living-room-after.jpg";

const FEATURES: [(&str, &str); 3] = [
    ("Furnish empty rooms", "Generate staged interiors from a single photo in any style."),
    ("Iterate in versions", "Save every take, revert in one click, and keep the history."),
    ("Mask what matters", "Upload a mask to restyle only the sofa, the walls, or the floor."),
];

#[component]
pub fn StagingPitch() -> impl IntoView {
    view! {
        <section class="pitch pitch--staging" id="staging">
            <div class="pitch__copy">
                <h2 class="pitch__title">"Virtual staging in seconds"</h2>
                <ul class="pitch__features">
                    {FEATURES
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <li class="pitch__feature">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <A href="/studio" attr:class="btn btn--primary">"Try the studio"</A>
            </div>
            <div class="pitch__visual">
                <CompareSlider
                    before_src=DEMO_BEFORE_SRC.to_owned()
                    after_src=DEMO_AFTER_SRC.to_owned()
                    before_label="Empty"
                    after_label="Staged"
                />
            </div>
        </section>
    }
}
