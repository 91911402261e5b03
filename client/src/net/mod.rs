//! Networking modules for the remote virtual-staging service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and maps failures into `StagingError`;
//! `types` defines the request forms and JSON response schema.

pub mod api;
pub mod types;
