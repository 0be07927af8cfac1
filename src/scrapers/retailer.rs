//! The parameterized retailer scraper.
//!
//! All retailers share one extraction algorithm; only the base URL, the
//! category-to-path map, and the brand label differ. Those live in a
//! [`RetailerConfig`] and the catalog instantiates one per retailer, so
//! adding a site means adding configuration, not new scraping code.

use crate::extract;
use crate::fetch::FetchPage;
use crate::models::{Category, ProductRecord};
use scraper::{Html, Selector};
use tracing::{info, instrument, warn};

/// Cap on candidate listing blocks taken from a single category page.
pub const MAX_LISTINGS_PER_PAGE: usize = 10;

/// Per-retailer configuration: everything the shared algorithm needs.
#[derive(Debug, Clone)]
pub struct RetailerConfig {
    /// Brand label stamped onto every record this retailer produces.
    pub brand: &'static str,
    /// Site root, joined with each category path below.
    pub base_url: &'static str,
    /// Categories this retailer carries and their listing-page paths.
    pub categories: &'static [(Category, &'static str)],
}

impl RetailerConfig {
    fn category_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Scrape every category page of one retailer.
///
/// Categories are fetched one at a time. A page that cannot be fetched is
/// skipped with a diagnostic; neither the retailer's remaining categories
/// nor other retailers are affected.
#[instrument(level = "info", skip_all, fields(brand = site.brand))]
pub async fn run(fetcher: &impl FetchPage, site: &RetailerConfig) -> Vec<ProductRecord> {
    info!(base_url = site.base_url, "scraping retailer");

    let mut records = Vec::new();
    for (category, path) in site.categories {
        let url = site.category_url(path);
        let Some(document) = fetcher.fetch(&url).await else {
            warn!(category = %category, %url, "category page unavailable; skipping");
            continue;
        };

        let found = extract_listings(&document, site, *category);
        info!(category = %category, count = found.len(), "extracted products");
        records.extend(found);
    }

    info!(count = records.len(), "retailer scrape finished");
    records
}

/// Pull product records out of one category page.
///
/// Selects `div`/`article` elements whose class looks like a listing block,
/// caps them at [`MAX_LISTINGS_PER_PAGE`], and runs the product extractor on
/// each. Blocks that don't yield a record are silently dropped.
pub fn extract_listings(
    document: &Html,
    site: &RetailerConfig,
    category: Category,
) -> Vec<ProductRecord> {
    let block_selector = Selector::parse("div, article").unwrap();
    document
        .select(&block_selector)
        .filter(|el| extract::looks_like_listing(*el))
        .take(MAX_LISTINGS_PER_PAGE)
        .filter_map(|el| extract::extract_product(el, site.brand, category))
        .collect()
}
