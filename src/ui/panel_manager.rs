//! Panel orchestration and layout management.
//!
//! Lays out the shell (header, sidebar or drawer, settings drawer, footer) and
//! routes the content area to the page for the current location.

use crate::app::AppState;
use crate::state::LayoutState;
use crate::ui::header::{self, HeaderInteraction};
use crate::ui::settings_drawer::{self, SettingsInteraction};
use crate::ui::sidebar::{self, SidebarInteraction};
use crate::ui::footer;
use eframe::egui;
use egui::RichText;
use radmin::navigation::Route;

/// Content area width cap.
const MAX_CONTENT_WIDTH: f32 = 1400.0;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    Header(HeaderInteraction),
    Sidebar(SidebarInteraction),
    Settings(SettingsInteraction),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let drawer_mode = LayoutState::uses_drawer(ctx.content_rect().width());
        let palette = state.theme.palette().clone();

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::default()
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .fill(palette.paper.base()),
            )
            .show(ctx, |ui| {
                if let Some(header_interaction) = header::render_header(ui, state, drawer_mode) {
                    interaction = Some(PanelInteraction::Header(header_interaction));
                }
            });

        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::default().inner_margin(egui::Margin::symmetric(12, 10)))
            .show(ctx, |ui| {
                footer::render_footer(ui);
            });

        if state.layout.is_settings_open() {
            egui::SidePanel::right("settings_drawer")
                .exact_width(320.0)
                .resizable(false)
                .show(ctx, |ui| {
                    if let Some(settings_interaction) =
                        settings_drawer::render_settings_drawer(ui, &state.theme, &state.layout)
                    {
                        interaction = Some(PanelInteraction::Settings(settings_interaction));
                    }
                });
        }

        // Narrow windows only show the sidebar while the drawer is open
        let show_sidebar = !drawer_mode || state.layout.sidebar.is_mobile_open();
        if show_sidebar {
            let width = if drawer_mode {
                radmin::navigation::SIDEBAR_WIDTH
            } else {
                state.layout.sidebar.width()
            };
            egui::SidePanel::left("sidebar")
                .exact_width(width)
                .resizable(false)
                .frame(
                    egui::Frame::default()
                        .inner_margin(egui::Margin::same(8))
                        .fill(palette.paper.base()),
                )
                .show(ctx, |ui| {
                    if let Some(sidebar_interaction) =
                        sidebar::render_sidebar(ui, &state.layout, &palette)
                    {
                        interaction = Some(PanelInteraction::Sidebar(sidebar_interaction));
                    }
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().inner_margin(egui::Margin::symmetric(24, 16)))
            .show(ctx, |ui| {
                ui.set_max_width(MAX_CONTENT_WIDTH);
                let rect = ui.available_rect_before_wrap();
                palette.paper.paint(ui.painter(), rect.expand(8.0));
                Self::render_content(ui, state);
            });

        interaction
    }

    /// Renders the page for the current route.
    fn render_content(ui: &mut egui::Ui, state: &mut AppState) {
        match state.layout.location.route() {
            Route::Products => state.products.show(ui),
            Route::Orders => state.orders.show(ui),
            Route::NotFound(path) => {
                ui.label(RichText::new(format!("No page at {}", path)).weak());
            }
            route => {
                if let Some(text) = route.placeholder_text() {
                    ui.label(text);
                }
            }
        }
    }
}
