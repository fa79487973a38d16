//! UI panel rendering subsystem
//!
//! - Header (title, notifications, settings button, profile menu)
//! - Sidebar (menu tree with submenus and collapse)
//! - Settings drawer (mode, theme presets, layout, direction)
//! - Footer (copyright line)
//! - Panel manager (panel orchestration and content routing)

pub mod footer;
pub mod header;
pub mod panel_manager;
pub mod settings_drawer;
pub mod sidebar;
