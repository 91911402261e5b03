//! "Design by voice" landing section. Sample commands rotate on a timer
//! under a pulsing listening indicator.

use leptos::prelude::*;

use crate::util::rotation::{Rotation, spawn_rotation};

const COMMANDS: [&str; 5] = [
    "Make the living room feel mid-century modern",
    "Swap the rug for something warmer",
    "Paint the accent wall sage green",
    "Add a reading nook by the window",
    "Show me this kitchen with oak cabinets",
];

#[component]
pub fn VoicePitch() -> impl IntoView {
    let rotation = RwSignal::new(Rotation::new(COMMANDS.len()));
    spawn_rotation(rotation);

    view! {
        <section class="pitch pitch--voice" id="voice">
            <div class="pitch__copy">
                <h2 class="pitch__title">"Redesign by voice"</h2>
                <p class="pitch__lede">
                    "Say what you want to see. Vista turns spoken direction into a new staged version of the room."
                </p>
            </div>
            <div class="voice-demo">
                <div class="voice-demo__indicator" aria-hidden="true">
                    <span class="voice-demo__pulse"></span>
                    <span class="voice-demo__mic">"🎙"</span>
                </div>
                <p class="voice-demo__status">"Listening..."</p>
                <p class="voice-demo__command" aria-live="polite">
                    {move || format!("\u{201c}{}\u{201d}", rotation.get().pick(&COMMANDS).copied().unwrap_or_default())}
                </p>
                <ol class="voice-demo__steps">
                    {COMMANDS
                        .iter()
                        .enumerate()
                        .map(|(i, _)| {
                            let class = move || {
                                if rotation.get().index() == i { "voice-demo__step voice-demo__step--active" } else { "voice-demo__step" }
                            };
                            view! { <li class=class></li> }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
