//! Application-level modules for the dashboard.
//!
//! This module contains the application coordinators and centralized state.

mod app_state;
mod application_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
