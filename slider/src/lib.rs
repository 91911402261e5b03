//! Drag-position tracking for the before/after comparison slider.
//!
//! This crate turns raw pointer and touch coordinates over a bounded container
//! into a normalized split position in `[0, 100]`. The core is plain Rust with
//! no browser dependencies so it can be exercised natively in tests; the
//! optional `dom` feature adds the `web-sys` glue used by the Leptos client to
//! measure the container and hold the window-level release listener while a
//! drag is active.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`tracker`] | [`tracker::TrackerCore`] state machine and the listener-owning [`tracker::Tracker`] |
//! | [`input`] | Slider events, drag phase, and transition reports |
//! | [`geometry`] | Container bounds and the percent computation |
//! | [`release`] | Scoped acquisition of the global release listener |
//! | [`consts`] | Shared numeric constants (bounds, default position, nudge steps) |
//! | `dom` | Browser bindings (feature `dom`) |

pub mod consts;
#[cfg(feature = "dom")]
pub mod dom;
pub mod geometry;
pub mod input;
pub mod release;
pub mod tracker;
