//! SVG layout math for the dashboard analytics charts.
//!
//! All functions are pure: they map a data series onto a fixed view box so
//! the chart components only format strings into `<polyline>`/`<rect>`
//! attributes.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Drawing area in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    fn inner_width(self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn inner_height(self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    fn baseline(self) -> f64 {
        self.padding + self.inner_height()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Round `max` up to 1, 2, or 5 times a power of ten so axis labels stay readable.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

fn series_ceiling(values: &[f64]) -> f64 {
    nice_ceiling(values.iter().copied().filter(|v| v.is_finite()).fold(0.0, f64::max))
}

fn scaled(value: f64, ceiling: f64) -> f64 {
    if value.is_finite() { (value / ceiling).clamp(0.0, 1.0) } else { 0.0 }
}

/// Place each value on the plot, evenly spaced left to right.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn line_points(values: &[f64], area: PlotArea) -> Vec<PlotPoint> {
    let ceiling = series_ceiling(values);
    let step = if values.len() > 1 {
        area.inner_width() / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() == 1 {
                area.width / 2.0
            } else {
                area.padding + step * i as f64
            };
            PlotPoint { x, y: area.baseline() - area.inner_height() * scaled(*value, ceiling) }
        })
        .collect()
}

/// `points` attribute for an SVG `<polyline>`.
#[must_use]
pub fn polyline(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed `d` path filling the region under the line down to the baseline.
#[must_use]
pub fn area_path(points: &[PlotPoint], area: PlotArea) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut d = format!("M{:.1},{:.1}", first.x, area.baseline());
    for p in points {
        d.push_str(&format!(" L{:.1},{:.1}", p.x, p.y));
    }
    d.push_str(&format!(" L{:.1},{:.1} Z", last.x, area.baseline()));
    d
}

/// Lay out one bar per value. `gap_ratio` is the share of each slot left empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bars(values: &[f64], area: PlotArea, gap_ratio: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let ceiling = series_ceiling(values);
    let slot = area.inner_width() / values.len() as f64;
    let width = slot * (1.0 - gap_ratio.clamp(0.0, 0.9));
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let height = area.inner_height() * scaled(*value, ceiling);
            Bar {
                x: area.padding + slot * i as f64 + (slot - width) / 2.0,
                y: area.baseline() - height,
                width,
                height,
            }
        })
        .collect()
}

/// Evenly spaced axis values from 0 to the series ceiling (inclusive).
#[must_use]
pub fn y_ticks(values: &[f64], count: u32) -> Vec<f64> {
    let ceiling = series_ceiling(values);
    let count = count.max(1);
    (0..=count).map(|i| ceiling * f64::from(i) / f64::from(count)).collect()
}
