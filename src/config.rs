//! Command-line configuration.

use clap::Parser;
use radmin::crud::grid::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use radmin::{ThemeMode, ThemeVariant};
use std::time::Duration;

/// Startup options. Nothing set here is remembered between runs.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "radmin-gui",
    version,
    about = "Admin dashboard with product and order management"
)]
pub struct Args {
    /// Initial color mode (light or dark).
    #[arg(long, value_name = "MODE", default_value = "light")]
    pub mode: ThemeMode,

    /// Initial theme variant, e.g. ocean, sunset, royal.
    #[arg(long, value_name = "NAME", default_value = "default")]
    pub variant: ThemeVariant,

    /// Path of the page to open first.
    #[arg(long, value_name = "PATH", default_value = "/products")]
    pub route: String,

    /// Grid rows per page.
    #[arg(long = "page-size", default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
    pub page_size: usize,

    /// Extra generated orders appended to the seed orders.
    #[arg(long = "sample-orders", default_value_t = 0)]
    pub sample_orders: usize,

    /// Seed for generated orders.
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// Simulated latency of order mutations, in milliseconds.
    #[arg(long = "latency-ms", default_value_t = 400)]
    pub latency_ms: u64,
}

impl Args {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

fn parse_page_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {:?}", PAGE_SIZE_OPTIONS))
    }
}
