//! Reusable view components.

pub mod calculator_panel;
pub mod chat_panel;
pub mod forum_panel;
pub mod sidebar;
pub mod tracker_panel;
