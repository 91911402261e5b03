//! Marketing landing page.

use leptos::prelude::*;

use crate::components::chatbot::Chatbot;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::staging_pitch::StagingPitch;
use crate::components::voice_pitch::VoicePitch;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <Navbar/>
            <main>
                <Hero/>
                <StagingPitch/>
                <VoicePitch/>
            </main>
            <footer class="footer">
                <span>"Vista"</span>
                <span class="footer__note">"Staged with care for sellers and their buyers."</span>
            </footer>
            <Chatbot/>
        </div>
    }
}
