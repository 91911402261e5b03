//! Dashboard analytics: weekly views line chart and per-listing leads bars.

use leptos::prelude::*;

use crate::state::dashboard::{DashboardState, SeriesPoint};
use crate::util::chart::{self, PlotArea};
use crate::util::format::format_count;

const VIEW_WIDTH: f64 = 480.0;
const VIEW_HEIGHT: f64 = 220.0;
const PADDING: f64 = 28.0;
const TICKS: u32 = 4;

fn area() -> PlotArea {
    PlotArea::new(VIEW_WIDTH, VIEW_HEIGHT, PADDING)
}

fn view_box() -> String {
    format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
}

/// Horizontal grid lines with their value labels.
fn grid(values: &[f64]) -> impl IntoView + use<> {
    let area = area();
    let ticks = chart::y_ticks(values, TICKS);
    let top = ticks.last().copied().unwrap_or(1.0);
    ticks
        .into_iter()
        .map(|tick| {
            let y = area.padding + (area.height - 2.0 * area.padding) * (1.0 - tick / top);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let label = format_count(tick.round() as u64);
            view! {
                <g class="chart__grid">
                    <line x1=area.padding x2={area.width - area.padding} y1=y y2=y/>
                    <text x={area.padding - 6.0} y={y + 4.0} text-anchor="end">{label}</text>
                </g>
            }
        })
        .collect_view()
}

#[component]
fn ViewsChart(series: Vec<SeriesPoint>, total: u64) -> impl IntoView {
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let points = chart::line_points(&values, area());
    let labels = points
        .iter()
        .zip(&series)
        .map(|(p, s)| {
            view! { <text class="chart__label" x=p.x y={VIEW_HEIGHT - 6.0} text-anchor="middle">{s.label}</text> }
        })
        .collect_view();

    view! {
        <figure class="chart chart--line">
            <figcaption>
                <span class="chart__title">"Weekly views"</span>
                <span class="chart__total">{format_count(total)}</span>
            </figcaption>
            <svg viewBox=view_box() role="img" aria-label="Listing views per day this week">
                {grid(&values)}
                <path class="chart__area" d=chart::area_path(&points, area())/>
                <polyline class="chart__line" points=chart::polyline(&points)/>
                {labels}
            </svg>
        </figure>
    }
}

#[component]
fn LeadsChart(series: Vec<SeriesPoint>) -> impl IntoView {
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let bars = chart::bars(&values, area(), 0.35)
        .into_iter()
        .zip(series)
        .map(|(bar, point)| {
            view! {
                <g class="chart__bar">
                    <rect x=bar.x y=bar.y width=bar.width height=bar.height rx="4">
                        <title>{format!("{}: {}", point.label, point.value)}</title>
                    </rect>
                    <text class="chart__label" x={bar.x + bar.width / 2.0} y={VIEW_HEIGHT - 6.0} text-anchor="middle">
                        {point.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <figure class="chart chart--bars">
            <figcaption>
                <span class="chart__title">"Leads by listing"</span>
            </figcaption>
            <svg viewBox=view_box() role="img" aria-label="Leads per listing">
                {grid(&values)}
                {bars}
            </svg>
        </figure>
    }
}

#[component]
pub fn AnalyticsChart() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    view! {
        <section class="analytics" id="analytics">
            {move || {
                let state = dashboard.get();
                let total = state.weekly_total();
                view! {
                    <ViewsChart series=state.weekly_views total=total/>
                    <LeadsChart series=state.listing_leads/>
                }
            }}
        </section>
    }
}
