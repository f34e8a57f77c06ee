//! Page components, one per route.

pub mod calculator;
pub mod chatbot;
pub mod forum;
pub mod price_tracker;
