//! Centralized application state for the dashboard.
//!
//! The state is composed of focused components, each keeping its own
//! invariants behind intent-revealing methods. The theme context lives here
//! and is handed to the panels by reference.

use crate::config::Args;
use crate::io::MutationRunner;
use crate::pages::{OrdersPage, ProductsPage};
use crate::state::{LayoutState, NotificationState};
use radmin::ThemeContext;

/// Main application state composed of focused state components.
pub struct AppState {
    /// Color mode, variant and resolved palette
    pub theme: ThemeContext,

    /// Location, sidebar and settings drawer
    pub layout: LayoutState,

    /// Header notifications
    pub notifications: NotificationState,

    // ===== Pages =====
    pub products: ProductsPage,
    pub orders: OrdersPage,
}

impl AppState {
    /// Builds the start-up state from the command line.
    pub fn from_args(args: &Args, ctx: Option<egui::Context>) -> Self {
        let mut runner = MutationRunner::new(args.latency());
        if let Some(ctx) = ctx {
            runner = runner.with_context(ctx);
        }

        Self {
            theme: ThemeContext::with_selection(args.mode, args.variant),
            layout: LayoutState::new(&args.route),
            notifications: NotificationState::new(),
            products: ProductsPage::new(args.page_size),
            orders: OrdersPage::new(args.page_size, args.sample_orders, args.seed, runner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use radmin::{Route, ThemeMode, ThemeVariant};

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from([
            "radmin-gui",
            "--mode",
            "dark",
            "--variant",
            "forest",
            "--route",
            "/orders",
        ])
        .unwrap();
        let state = AppState::from_args(&args, None);

        assert_eq!(state.theme.mode(), ThemeMode::Dark);
        assert_eq!(state.theme.variant(), ThemeVariant::Forest);
        assert_eq!(state.layout.location.route(), Route::Orders);
    }
}
