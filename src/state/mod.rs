//! State management modules for the dashboard shell.
//!
//! This module contains state-only logic (no UI concerns):
//! - Layout state (location, sidebar, settings drawer, layout options)
//! - Notification state (header menu entries and badge)

mod layout_state;
mod notifications;

pub use layout_state::{Direction, LayoutMode, LayoutState};
pub use notifications::NotificationState;
