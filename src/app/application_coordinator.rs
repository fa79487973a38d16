//! Application-level coordination.
//!
//! Applies panel interactions to the application state and collects
//! background work once per frame.

use crate::app::{AppState, ThemeCoordinator};
use crate::ui::header::{HeaderInteraction, ProfileAction};
use crate::ui::panel_manager::PanelInteraction;
use crate::ui::settings_drawer::SettingsInteraction;
use crate::ui::sidebar::SidebarInteraction;

/// Coordinates application-level operations.
///
/// This struct is responsible for:
/// - Routing header, sidebar and settings interactions
/// - Collecting finished background mutations
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Collects finished mutations from the pages.
    ///
    /// Called once per frame in the update loop.
    pub fn poll_background(state: &mut AppState) {
        state.orders.poll();
    }

    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::Header(header) => Self::handle_header(state, header),
            PanelInteraction::Sidebar(sidebar) => Self::handle_sidebar(state, sidebar),
            PanelInteraction::Settings(settings) => Self::handle_settings(state, settings),
        }
    }

    fn handle_header(state: &mut AppState, interaction: HeaderInteraction) {
        match interaction {
            HeaderInteraction::ToggleDrawer => state.layout.sidebar.toggle_mobile(),
            HeaderInteraction::ToggleSettings => state.layout.toggle_settings(),
            HeaderInteraction::Profile(action) => {
                // no accounts behind the demo profile menu
                tracing::info!(action = action.label(), "profile menu");
                if action == ProfileAction::Logout {
                    state.layout.close_settings();
                }
            }
        }
    }

    fn handle_sidebar(state: &mut AppState, interaction: SidebarInteraction) {
        match interaction {
            SidebarInteraction::ItemClicked(item) => {
                let layout = &mut state.layout;
                layout.sidebar.click_item(item, &mut layout.location);
                if !item.has_sub_items() {
                    layout.sidebar.close_mobile();
                }
            }
            SidebarInteraction::SubItemClicked(path) => state.layout.navigate(path),
            SidebarInteraction::ToggleCollapsed => state.layout.sidebar.toggle_collapsed(),
        }
    }

    fn handle_settings(state: &mut AppState, interaction: SettingsInteraction) {
        match interaction {
            SettingsInteraction::SelectMode(mode) => ThemeCoordinator::select_mode(state, mode),
            SettingsInteraction::SelectVariant(variant) => {
                ThemeCoordinator::select_variant(state, variant)
            }
            SettingsInteraction::SetLayout(mode) => state.layout.set_layout_mode(mode),
            SettingsInteraction::SetDirection(direction) => state.layout.set_direction(direction),
            SettingsInteraction::Close => state.layout.close_settings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Args;
    use clap::Parser;
    use radmin::navigation::MENU;
    use radmin::{ThemeMode, ThemeVariant};

    fn state() -> AppState {
        let args = Args::try_parse_from(["radmin-gui", "--route", "/"]).unwrap();
        AppState::from_args(&args, None)
    }

    #[test]
    fn test_sidebar_item_navigates_and_opens_submenu() {
        let mut state = state();
        let orders = MENU.iter().find(|i| i.text == "Orders").unwrap();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::Sidebar(SidebarInteraction::ItemClicked(orders)),
        );
        assert_eq!(state.layout.location.path(), "/orders");
        assert!(state.layout.sidebar.is_submenu_open("Orders"));

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::Sidebar(SidebarInteraction::SubItemClicked("/reports/sales")),
        );
        assert_eq!(state.layout.location.path(), "/reports/sales");
    }

    #[test]
    fn test_settings_change_theme() {
        let mut state = state();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::Settings(SettingsInteraction::SelectMode(ThemeMode::Light)),
        );
        assert_eq!(state.theme.mode(), ThemeMode::Light);

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::Settings(SettingsInteraction::SelectMode(ThemeMode::Dark)),
        );
        assert_eq!(state.theme.mode(), ThemeMode::Dark);

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::Settings(SettingsInteraction::SelectVariant(ThemeVariant::Royal)),
        );
        assert_eq!(state.theme.variant(), ThemeVariant::Royal);
    }

    #[test]
    fn test_header_toggles() {
        let mut state = state();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::Header(HeaderInteraction::ToggleSettings),
        );
        assert!(state.layout.is_settings_open());

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::Header(HeaderInteraction::ToggleDrawer),
        );
        assert!(state.layout.sidebar.is_mobile_open());
    }
}
