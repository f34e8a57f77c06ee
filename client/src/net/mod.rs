//! Network layer: REST helpers for the AI endpoints.

pub mod api;
