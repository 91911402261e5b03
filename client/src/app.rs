//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{compare::ComparePage, dashboard::DashboardPage, landing::LandingPage, studio::StudioPage};
use crate::state::{chat::ChatState, dashboard::DashboardState, studio::StudioState, user::UserState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing. The
/// demo user is resolved from browser storage once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let user = RwSignal::new(UserState::default());
    let chat = RwSignal::new(ChatState::default());
    let dashboard = RwSignal::new(DashboardState::demo());
    let studio = RwSignal::new(StudioState::default());

    provide_context(user);
    provide_context(chat);
    provide_context(dashboard);
    provide_context(studio);

    // Effects only run in the browser, where storage exists.
    Effect::new(move || {
        if !user.with_untracked(|u| u.loaded) {
            user.set(UserState::load());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/vista.css"/>
        <Title text="Vista"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("studio") view=StudioPage/>
                <Route path=StaticSegment("compare") view=ComparePage/>
            </Routes>
        </Router>
    }
}
