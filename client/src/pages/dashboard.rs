//! Seller dashboard: greeting, stat cards, charts, and shortcuts.

use leptos::prelude::*;

use crate::components::analytics_chart::AnalyticsChart;
use crate::components::navbar::Navbar;
use crate::components::quick_actions::QuickActions;
use crate::components::welcome_stats::WelcomeStats;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <Navbar/>
            <main class="dashboard">
                <WelcomeStats/>
                <AnalyticsChart/>
                <QuickActions/>
            </main>
        </div>
    }
}
