//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by surface (`user`, `chat`, `dashboard`, `studio`) so
//! individual components can depend on small focused models. Each model is
//! plain data with pure transition methods; components wrap them in
//! `RwSignal`s provided via context.

pub mod chat;
pub mod dashboard;
pub mod studio;
pub mod user;
