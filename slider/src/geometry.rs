//! Container bounds and the pointer-to-percent mapping.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{MAX_POSITION, MIN_POSITION};

/// Horizontal extent of the container, in CSS pixels relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    /// Viewport x of the container's left edge.
    pub left: f64,
    /// Container width; zero until the container has been measured.
    pub width: f64,
}

impl ContainerRect {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width: sanitize_width(width) }
    }

    /// Whether a usable (non-zero) width has been measured.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0
    }

    /// Map a viewport x coordinate to a clamped percentage of this container.
    ///
    /// Returns `None` when the container has no width yet or `client_x` is not
    /// finite, so callers keep their previous position instead of storing NaN.
    #[must_use]
    pub fn percent_at(&self, client_x: f64) -> Option<f64> {
        if !self.is_measured() || !client_x.is_finite() || !self.left.is_finite() {
            return None;
        }
        Some(clamp_percent(((client_x - self.left) / self.width) * 100.0))
    }
}

/// Something that can report the container's current bounds.
///
/// Returns `None` while the container is not mounted.
pub trait ContainerSource {
    fn bounds(&self) -> Option<ContainerRect>;
}

impl ContainerSource for ContainerRect {
    fn bounds(&self) -> Option<ContainerRect> {
        Some(*self)
    }
}

impl<T: ContainerSource> ContainerSource for Option<T> {
    fn bounds(&self) -> Option<ContainerRect> {
        self.as_ref().and_then(ContainerSource::bounds)
    }
}

/// Clamp a percentage into `[0, 100]`. Non-finite input maps to the nearest bound
/// (`NaN` maps to 0).
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_POSITION;
    }
    value.clamp(MIN_POSITION, MAX_POSITION)
}

fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 { width } else { 0.0 }
}
