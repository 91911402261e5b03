//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render landing sections, dashboard widgets, and interactive
//! surfaces while reading/writing shared state from Leptos context providers.

pub mod analytics_chart;
pub mod chatbot;
pub mod compare_slider;
pub mod hero;
pub mod navbar;
pub mod quick_actions;
pub mod staging_pitch;
pub mod version_history;
pub mod voice_pitch;
pub mod welcome_stats;
