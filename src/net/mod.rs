//! Network layer: wire types and REST helpers for the finance backend.

pub mod api;
pub mod types;
