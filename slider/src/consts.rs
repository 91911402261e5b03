//! Shared numeric constants for the slider crate.

// ── Position bounds ─────────────────────────────────────────────

/// Leftmost split position, in percent of the container width.
pub const MIN_POSITION: f64 = 0.0;

/// Rightmost split position, in percent of the container width.
pub const MAX_POSITION: f64 = 100.0;

/// Split position used when the caller has no preference (or supplies garbage).
pub const DEFAULT_POSITION: f64 = 50.0;

// ── Keyboard ────────────────────────────────────────────────────

/// Percentage points moved by a single arrow-key press.
pub const NUDGE_STEP: f64 = 1.0;

/// Percentage points moved by a page-up / page-down press.
pub const NUDGE_PAGE_STEP: f64 = 10.0;
