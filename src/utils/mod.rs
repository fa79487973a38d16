//! Utility modules for the dashboard.

pub mod formatting;

pub use formatting::{currency_cell, date_cell, format_currency, format_date};
