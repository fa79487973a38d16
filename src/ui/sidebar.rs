//! Sidebar navigation rendering.

use crate::state::LayoutState;
use eframe::egui;
use egui::RichText;
use radmin::navigation::{NavItem, MENU};
use radmin::Palette;

/// Result of user interaction with the sidebar
pub enum SidebarInteraction {
    /// A top-level entry was clicked
    ItemClicked(&'static NavItem),
    /// A nested entry was clicked
    SubItemClicked(&'static str),
    /// The collapse button was clicked
    ToggleCollapsed,
}

/// Renders the menu tree. Collapsed sidebars show icons only.
pub fn render_sidebar(
    ui: &mut egui::Ui,
    layout: &LayoutState,
    palette: &Palette,
) -> Option<SidebarInteraction> {
    let mut interaction = None;
    let collapsed = layout.sidebar.is_collapsed();
    let location = &layout.location;

    ui.horizontal(|ui| {
        if !collapsed {
            ui.label(RichText::new("Admin Panel").heading().strong());
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let arrow = if collapsed { "▶" } else { "◀" };
            if ui.button(arrow).clicked() {
                interaction = Some(SidebarInteraction::ToggleCollapsed);
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for item in MENU {
            let active = location.is_active(item.path);
            let open = layout.sidebar.is_submenu_open(item.text);

            let text = if collapsed {
                item.icon.to_string()
            } else if item.has_sub_items() {
                let chevron = if open { "⏶" } else { "⏷" };
                format!("{}  {}  {}", item.icon, item.text, chevron)
            } else {
                format!("{}  {}", item.icon, item.text)
            };

            let mut label = RichText::new(text).size(15.0);
            if active {
                label = label.strong().color(palette.primary);
            }

            let response = ui.add_sized(
                [ui.available_width(), 32.0],
                egui::Button::selectable(active, label),
            );
            let response = if collapsed {
                response.on_hover_text(item.text)
            } else {
                response
            };
            if response.clicked() {
                interaction = Some(SidebarInteraction::ItemClicked(item));
            }

            if open && !collapsed {
                ui.indent(item.text, |ui| {
                    for sub in item.sub_items {
                        let active = location.is_active(sub.path);
                        let mut label = RichText::new(sub.text);
                        if active {
                            label = label.color(palette.primary);
                        }
                        if ui.selectable_label(active, label).clicked() {
                            interaction = Some(SidebarInteraction::SubItemClicked(sub.path));
                        }
                    }
                });
            }
        }
    });

    interaction
}
