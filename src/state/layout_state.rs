//! Shell layout state: location, sidebar, settings drawer and layout options.

use radmin::navigation::{Location, SidebarState, DRAWER_BREAKPOINT};

/// Spacing preset chosen in the settings drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Default,
    Compact,
}

impl LayoutMode {
    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Default => "Default",
            LayoutMode::Compact => "Compact",
        }
    }

    /// Item spacing applied to the egui style.
    pub fn item_spacing(self) -> egui::Vec2 {
        match self {
            LayoutMode::Default => egui::vec2(8.0, 6.0),
            LayoutMode::Compact => egui::vec2(4.0, 2.0),
        }
    }
}

/// Text direction chosen in the settings drawer. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Ltr => "LTR",
            Direction::Rtl => "RTL",
        }
    }
}

/// State related to the shell around the page content.
///
/// Responsibilities:
/// - Current location and sidebar presentation
/// - Settings drawer visibility
/// - Layout mode and text direction choices
#[derive(Debug, Clone, Default)]
pub struct LayoutState {
    pub location: Location,
    pub sidebar: SidebarState,
    settings_open: bool,
    layout_mode: LayoutMode,
    direction: Direction,
}

impl LayoutState {
    pub fn new(initial_path: &str) -> Self {
        Self {
            location: Location::new(initial_path),
            ..Default::default()
        }
    }

    // ===== Queries =====

    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Narrow windows show the sidebar as a drawer.
    pub fn uses_drawer(window_width: f32) -> bool {
        window_width < DRAWER_BREAKPOINT
    }

    // ===== Commands =====

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.layout_mode = mode;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Navigates and closes the drawer if it was open.
    pub fn navigate(&mut self, path: &str) {
        self.location.navigate(path);
        self.sidebar.close_mobile();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_closes_drawer() {
        let mut layout = LayoutState::new("/");
        layout.sidebar.toggle_mobile();
        layout.navigate("/orders");
        assert_eq!(layout.location.path(), "/orders");
        assert!(!layout.sidebar.is_mobile_open());
    }

    #[test]
    fn test_settings_toggle() {
        let mut layout = LayoutState::default();
        assert!(!layout.is_settings_open());
        layout.toggle_settings();
        assert!(layout.is_settings_open());
        layout.close_settings();
        assert!(!layout.is_settings_open());
    }

    #[test]
    fn test_drawer_breakpoint() {
        assert!(LayoutState::uses_drawer(600.0));
        assert!(!LayoutState::uses_drawer(1280.0));
    }

    #[test]
    fn test_compact_spacing_is_tighter() {
        assert!(LayoutMode::Compact.item_spacing().y < LayoutMode::Default.item_spacing().y);
    }
}
