//! Header bar rendering
//!
//! Title, drawer toggle on narrow windows, notifications, settings and the
//! profile menu.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;

/// Entries of the profile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    Profile,
    MyAccount,
    Logout,
}

impl ProfileAction {
    pub const ALL: [ProfileAction; 3] = [
        ProfileAction::Profile,
        ProfileAction::MyAccount,
        ProfileAction::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileAction::Profile => "Profile",
            ProfileAction::MyAccount => "My account",
            ProfileAction::Logout => "Logout",
        }
    }
}

/// Result of user interaction with the header
pub enum HeaderInteraction {
    /// Menu button on narrow windows
    ToggleDrawer,
    /// Gear button
    ToggleSettings,
    /// An entry of the profile menu
    Profile(ProfileAction),
}

/// Renders the application header.
pub fn render_header(
    ui: &mut egui::Ui,
    state: &AppState,
    drawer_mode: bool,
) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if drawer_mode && ui.button("☰").on_hover_text("Menu").clicked() {
            interaction = Some(HeaderInteraction::ToggleDrawer);
        }

        ui.label(
            RichText::new("Web Admin")
                .heading()
                .strong()
                .color(state.theme.palette().primary),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.menu_button("👤", |ui| {
                for action in ProfileAction::ALL {
                    if ui.button(action.label()).clicked() {
                        interaction = Some(HeaderInteraction::Profile(action));
                    }
                }
            });

            if ui.button("⚙").on_hover_text("Settings").clicked() {
                interaction = Some(HeaderInteraction::ToggleSettings);
            }

            let bell = match state.notifications.badge() {
                Some(count) => format!("🔔 {}", count),
                None => "🔔".to_string(),
            };
            ui.menu_button(bell, |ui| {
                ui.set_min_width(220.0);
                for notification in state.notifications.items() {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&notification.title).strong());
                        ui.label(RichText::new(&notification.age).small().weak());
                    });
                    ui.separator();
                }
            });
        });
    });

    interaction
}
