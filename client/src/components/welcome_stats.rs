//! Dashboard greeting and headline stat cards.

use leptos::prelude::*;

use crate::state::dashboard::{DashboardState, StatCard};
use crate::state::user::UserState;
use crate::util::format::{first_name, format_count, greeting_for_hour};

fn local_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        12
    }
}

#[component]
fn StatCardView(card: StatCard) -> impl IntoView {
    let trend = card.trend();
    let change = card.change_label().unwrap_or_else(|| "new".to_owned());
    view! {
        <article class="stat-card">
            <p class="stat-card__label">{card.label}</p>
            <p class="stat-card__value">{format_count(card.value)}</p>
            <p class={trend.class()}>{change}" vs last week"</p>
        </article>
    }
}

#[component]
pub fn WelcomeStats() -> impl IntoView {
    let user = expect_context::<RwSignal<UserState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let greeting = move || {
        let state = user.get();
        let name = state.user.as_ref().map_or("there", |u| first_name(&u.name)).to_owned();
        format!("{}, {name}", greeting_for_hour(local_hour()))
    };

    view! {
        <section class="welcome">
            <h1 class="welcome__greeting">{greeting}</h1>
            <p class="welcome__sub">"Here is how your listings performed this week."</p>
            <div class="welcome__cards">
                {move || dashboard.get().stats.into_iter().map(|card| view! { <StatCardView card=card/> }).collect_view()}
            </div>
        </section>
    }
}
