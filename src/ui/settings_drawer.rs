//! Settings drawer: color mode, theme presets, layout and direction.

use crate::state::{Direction, LayoutMode, LayoutState};
use eframe::egui;
use egui::{Color32, RichText, Stroke};
use radmin::theme::{preset_gradient, preset_swatches, with_alpha};
use radmin::{adjust_color, ThemeContext, ThemeMode, ThemeVariant};

/// Result of user interaction with the settings drawer
pub enum SettingsInteraction {
    SelectMode(ThemeMode),
    SelectVariant(ThemeVariant),
    SetLayout(LayoutMode),
    SetDirection(Direction),
    Close,
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(title).strong());
    ui.add_space(6.0);
}

/// Renders the drawer contents.
pub fn render_settings_drawer(
    ui: &mut egui::Ui,
    theme: &ThemeContext,
    layout: &LayoutState,
) -> Option<SettingsInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("Settings");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").clicked() {
                interaction = Some(SettingsInteraction::Close);
            }
        });
    });
    ui.separator();

    section(ui, "Mode");
    ui.horizontal(|ui| {
        for (mode, label) in [(ThemeMode::Light, "☀ Light"), (ThemeMode::Dark, "🌙 Dark")] {
            if ui.selectable_label(theme.mode() == mode, label).clicked() {
                interaction = Some(SettingsInteraction::SelectMode(mode));
            }
        }
    });

    section(ui, "Themes");
    ui.horizontal_wrapped(|ui| {
        for swatch in preset_swatches() {
            let selected = theme.variant() == swatch.variant;
            if preset_chip(ui, swatch.variant, swatch.color, selected, theme.mode()).clicked() {
                interaction = Some(SettingsInteraction::SelectVariant(swatch.variant));
            }
        }
    });

    section(ui, "Layout");
    ui.horizontal(|ui| {
        for mode in [LayoutMode::Default, LayoutMode::Compact] {
            if ui
                .selectable_label(layout.layout_mode() == mode, mode.label())
                .clicked()
            {
                interaction = Some(SettingsInteraction::SetLayout(mode));
            }
        }
    });

    section(ui, "Direction");
    ui.horizontal(|ui| {
        for direction in [Direction::Ltr, Direction::Rtl] {
            if ui
                .selectable_label(layout.direction() == direction, direction.label())
                .clicked()
            {
                interaction = Some(SettingsInteraction::SetDirection(direction));
            }
        }
    });

    interaction
}

/// A preset chip: outlined in the preset color, filled with its gradient when
/// selected, slightly darker on hover.
fn preset_chip(
    ui: &mut egui::Ui,
    variant: ThemeVariant,
    color: Color32,
    selected: bool,
    mode: ThemeMode,
) -> egui::Response {
    let background = ui.painter().add(egui::Shape::Noop);

    let text_color = if selected { Color32::WHITE } else { color };
    let button = egui::Button::new(RichText::new(variant.label()).color(text_color))
        .fill(Color32::TRANSPARENT)
        .stroke(Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(4));
    let response = ui.add(button);

    let shape = if selected {
        let base = if response.hovered() {
            adjust_color(color, -10)
        } else {
            color
        };
        preset_gradient(base, mode).shape(response.rect, 4)
    } else if response.hovered() {
        egui::Shape::rect_filled(response.rect, egui::CornerRadius::same(4), with_alpha(color, 16))
    } else {
        egui::Shape::Noop
    };
    ui.painter().set(background, shape);

    response
}
