//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure presentation
//! math from page and component logic to improve reuse and testability.

pub mod chart;
pub mod chat_script;
pub mod format;
pub mod rotation;
pub mod storage;
