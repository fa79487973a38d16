//! Theme selection and application.

use crate::app::AppState;
use radmin::{ThemeMode, ThemeVariant};

/// Coordinates theme changes and applies the palette to egui.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme and layout spacing to the egui context.
    ///
    /// Called every frame so changes show up immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        ctx.set_visuals(state.theme.visuals());

        let spacing = state.layout.layout_mode().item_spacing();
        ctx.style_mut(|style| {
            style.spacing.item_spacing = spacing;
        });
    }

    /// Switches to `mode`; choosing the active mode changes nothing.
    pub fn select_mode(state: &mut AppState, mode: ThemeMode) {
        if state.theme.mode() != mode {
            state.theme.toggle_mode();
        }
    }

    pub fn select_variant(state: &mut AppState, variant: ThemeVariant) {
        state.theme.set_variant(variant);
    }
}
