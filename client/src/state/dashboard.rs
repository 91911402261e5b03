#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::util::format;

/// Seller dashboard data: headline stats plus the two chart series.
///
/// The demo build ships fixed numbers; a live build would fill the same
/// shape from a listings API.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub stats: Vec<StatCard>,
    pub weekly_views: Vec<SeriesPoint>,
    pub listing_leads: Vec<SeriesPoint>,
}

/// One welcome-panel stat with its previous-period value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    pub previous: u64,
}

impl StatCard {
    /// Week-over-week change label, or `None` without a baseline.
    #[must_use]
    pub fn change_label(&self) -> Option<String> {
        format::percent_change(self.previous, self.value).map(format::format_change)
    }

    #[must_use]
    pub fn trend(&self) -> Trend {
        match self.value.cmp(&self.previous) {
            std::cmp::Ordering::Greater => Trend::Up,
            std::cmp::Ordering::Less => Trend::Down,
            std::cmp::Ordering::Equal => Trend::Flat,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "stat-card__change stat-card__change--up",
            Self::Down => "stat-card__change stat-card__change--down",
            Self::Flat => "stat-card__change",
        }
    }
}

/// A labelled chart value.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: f64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::demo()
    }
}

impl DashboardState {
    #[must_use]
    pub fn demo() -> Self {
        Self {
            stats: vec![
                StatCard { label: "Active listings", value: 6, previous: 5 },
                StatCard { label: "Total views", value: 12_840, previous: 10_920 },
                StatCard { label: "Leads", value: 48, previous: 52 },
                StatCard { label: "Staged rooms", value: 23, previous: 23 },
            ],
            weekly_views: [
                ("Mon", 1_420.0),
                ("Tue", 1_610.0),
                ("Wed", 1_980.0),
                ("Thu", 1_760.0),
                ("Fri", 2_240.0),
                ("Sat", 2_130.0),
                ("Sun", 1_700.0),
            ]
            .into_iter()
            .map(|(label, value)| SeriesPoint { label, value })
            .collect(),
            listing_leads: [
                ("Maple Ave", 14.0),
                ("Harbor Loft", 9.0),
                ("Cedar Ct", 11.0),
                ("Elm St", 6.0),
                ("Bay View", 8.0),
            ]
            .into_iter()
            .map(|(label, value)| SeriesPoint { label, value })
            .collect(),
        }
    }

    #[must_use]
    pub fn weekly_values(&self) -> Vec<f64> {
        self.weekly_views.iter().map(|p| p.value).collect()
    }

    #[must_use]
    pub fn lead_values(&self) -> Vec<f64> {
        self.listing_leads.iter().map(|p| p.value).collect()
    }

    /// Sum of the weekly views series, shown above the line chart.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn weekly_total(&self) -> u64 {
        self.weekly_views.iter().map(|p| p.value.max(0.0)).sum::<f64>().round() as u64
    }
}
