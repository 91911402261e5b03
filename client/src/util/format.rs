//! Number and text formatting for dashboard copy.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Compact count: `999`, `12.3k`, `4.5M`. Trailing `.0` is dropped.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_count(n: u64) -> String {
    fn compact(value: f64, suffix: &str) -> String {
        let text = format!("{value:.1}");
        let text = text.strip_suffix(".0").unwrap_or(&text);
        format!("{text}{suffix}")
    }
    if n < 1_000 {
        n.to_string()
    } else if n < 1_000_000 {
        compact(n as f64 / 1_000.0, "k")
    } else {
        compact(n as f64 / 1_000_000.0, "M")
    }
}

/// Percentage change from `previous` to `current`; `None` when there is no baseline.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent_change(previous: u64, current: u64) -> Option<f64> {
    if previous == 0 {
        return None;
    }
    Some((current as f64 - previous as f64) / previous as f64 * 100.0)
}

/// Signed one-decimal percentage: `+12.5%`, `-3.0%`, `0.0%`.
#[must_use]
pub fn format_change(pct: f64) -> String {
    let rounded = (pct * 10.0).round() / 10.0;
    if rounded > 0.0 {
        format!("+{rounded:.1}%")
    } else if rounded < 0.0 {
        format!("{rounded:.1}%")
    } else {
        "0.0%".to_owned()
    }
}

/// First word of a display name, or `"there"` for a blank name.
#[must_use]
pub fn first_name(full: &str) -> &str {
    full.split_whitespace().next().unwrap_or("there")
}

/// Time-of-day greeting for a local hour in `0..24`.
#[must_use]
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}
