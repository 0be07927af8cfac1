//! Command-line interface definitions.
//!
//! This module defines the CLI arguments using the `clap` crate. The
//! scraper is deliberately flag-light: one switch selects sample mode, and
//! log verbosity is steered through the `RUST_LOG` environment variable.

use clap::Parser;

/// Command-line arguments for the price monitor.
///
/// # Examples
///
/// ```sh
/// # Scrape the configured retailers
/// fit_price_monitor
///
/// # Load sample_products.json instead of hitting the network
/// fit_price_monitor --sample
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Load product data from sample_products.json instead of scraping
    #[arg(long)]
    pub sample: bool,
}
