//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`calculator`, `chat`, etc.) so individual
//! pages can depend on small focused models. Containers are plain structs;
//! components hold them in `RwSignal` contexts and mutate only through
//! their methods.

pub mod calculator;
pub mod chat;
pub mod forum;
pub mod tracker;
