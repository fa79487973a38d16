//! Admin Dashboard GUI Application
//!
//! This module provides the desktop admin dashboard built on the egui framework.
//! The dashboard features:
//! - Header with notifications, settings and profile menus
//! - Collapsible sidebar navigation with submenus and a drawer on narrow windows
//! - Products and Orders pages built on the generic CRUD scaffold
//! - Light and dark modes with twenty theme variants
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordination
//! - `config` - Command-line options
//! - `io/` - Background mutations with simulated latency
//! - `pages/` - Product and order pages over the mock repositories
//! - `state/` - Layout and notification state
//! - `ui/` - Shell panels and content routing
//! - `utils/` - Currency and date formatting

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod io;
mod pages;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use config::Args;
use ui::panel_manager::PanelManager;

/// Launches the dashboard window.
fn main() -> eframe::Result {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        mode = %args.mode.as_str(),
        variant = args.variant.key(),
        route = %args.route,
        "starting dashboard"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Admin Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Admin Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(RadminApp::new(cc, &args)))),
    )
}

/// The dashboard application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` routes interactions and collects background work
/// - `ThemeCoordinator` applies the palette and spacing
/// - `PanelManager` lays out the shell and the current page
struct RadminApp {
    state: AppState,
}

impl RadminApp {
    fn new(cc: &eframe::CreationContext, args: &Args) -> Self {
        Self {
            state: AppState::from_args(args, Some(cc.egui_ctx.clone())),
        }
    }
}

impl eframe::App for RadminApp {
    /// 1. Collect finished mutations
    /// 2. Apply theme
    /// 3. Render all panels
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::poll_background(&mut self.state);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
        }
    }
}
