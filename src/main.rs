//! # Fit Price Monitor
//!
//! A scraper that collects product name, brand, category, and pricing
//! information from fitness-equipment retailer websites and produces a
//! consolidated report: a fixed-width console table plus a `products.json`
//! dump.
//!
//! ## Usage
//!
//! ```sh
//! # Scrape the configured retailers
//! fit_price_monitor
//!
//! # Skip the network and load sample_products.json instead
//! fit_price_monitor --sample
//! ```
//!
//! ## Architecture
//!
//! The run is a single sequential pipeline:
//! 1. **Fetch**: each retailer's category pages, one request at a time with
//!    a politeness delay and retry/backoff ([`fetch`])
//! 2. **Extract**: up to 10 listing blocks per page through the heuristic
//!    product extractor ([`extract`])
//! 3. **Report**: the accumulated collection as a console table, saved to
//!    JSON ([`outputs`])
//!
//! Every failure mode degrades to "fewer products collected": a blocked or
//! dead page skips one category, a malformed listing skips one block, and
//! the process always exits 0 after reporting whatever it gathered.

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod extract;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use fetch::Fetcher;
use models::ProductRecord;
use scrapers::{catalog, retailer};

/// Sample data read with `--sample`.
const SAMPLE_FILE: &str = "sample_products.json";
/// Report written at the end of every run that found products.
const OUTPUT_FILE: &str = "products.json";

#[tokio::main]
async fn main() {
    // --- Tracing init: diagnostics go to stderr, the report owns stdout ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    info!("starting product price monitor");

    let mut products: Vec<ProductRecord> = Vec::new();

    if args.sample {
        info!("loading sample data instead of scraping");
        match outputs::json::load_products(SAMPLE_FILE).await {
            Ok(loaded) => products.extend(loaded),
            Err(e) => {
                warn!(path = SAMPLE_FILE, error = %e, "could not load sample data; continuing with an empty set");
            }
        }
    } else {
        let fetcher = Fetcher::new();
        for site in &catalog::ALL {
            let records = retailer::run(&fetcher, site).await;
            products.extend(records);
        }

        if products.is_empty() {
            warn!("no products were scraped (possibly bot protection)");
            warn!("you can provide product data in '{SAMPLE_FILE}' and re-run with --sample");
            warn!("or browse the retailer sites and adjust the category paths in the catalog");
        }
    }

    outputs::table::print_report(&products);

    if !products.is_empty() {
        match outputs::json::save_products(&products, OUTPUT_FILE).await {
            Ok(()) => info!(path = OUTPUT_FILE, "results saved"),
            Err(e) => error!(path = OUTPUT_FILE, error = %e, "failed to save results"),
        }
    }
}
