//! Data models for scraped products.
//!
//! This module defines the two core types used throughout the application:
//! - [`Category`]: the closed set of equipment categories the monitor tracks
//! - [`ProductRecord`]: one scraped (or sample-loaded) product listing
//!
//! The serde field names use the title-cased labels of the original report
//! format (`"Product"`, `"Sale Price"`, ...) so that `products.json` written
//! by one run can be fed back in as sample data for the next.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment categories covered by the monitor.
///
/// This is a closed set: retailer configurations reference these variants
/// directly, so a scraper cannot emit a category outside of it. Not every
/// retailer carries every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    /// Motorized treadmills.
    Treadmills,
    /// Stationary/spin bikes.
    #[serde(rename = "Indoor Cycling Bikes")]
    IndoorCyclingBikes,
    /// Multi-station strength machines.
    #[serde(rename = "Home Gyms")]
    HomeGyms,
    /// Ellipticals and Max Trainer machines.
    #[serde(rename = "Ellipticals and Max Trainer")]
    EllipticalsAndMaxTrainer,
    /// Weight-adjustable dumbbell sets.
    #[serde(rename = "Adjustable Dumbbells")]
    AdjustableDumbbells,
}

impl Category {
    /// The display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Treadmills => "Treadmills",
            Category::IndoorCyclingBikes => "Indoor Cycling Bikes",
            Category::HomeGyms => "Home Gyms",
            Category::EllipticalsAndMaxTrainer => "Ellipticals and Max Trainer",
            Category::AdjustableDumbbells => "Adjustable Dumbbells",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single product listing scraped from a retailer page.
///
/// Records are append-only: the run collects them into one `Vec` which is
/// rendered and saved at the end. There is no product key and no
/// deduplication across categories or runs.
///
/// # Price semantics
///
/// A listing block often shows two prices (original and discounted). The
/// extractor records the maximum as `msrp` and the minimum as `sale_price`;
/// when only one distinct price appears, `sale_price` is `None` and `msrp`
/// holds that price. `sale_price <= msrp` whenever both are present.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductRecord {
    /// Product display name as shown on the listing page.
    #[serde(rename = "Product")]
    pub name: String,
    /// Retailer brand that produced this record.
    #[serde(rename = "Brand")]
    pub brand: String,
    /// Equipment category of the listing page the record came from.
    #[serde(rename = "Category")]
    pub category: Category,
    /// Highest price found in the listing block, if any parsed.
    #[serde(rename = "MSRP", default)]
    pub msrp: Option<f64>,
    /// Lowest price found, present only when more than one distinct price
    /// appeared in the listing block.
    #[serde(rename = "Sale Price", default)]
    pub sale_price: Option<f64>,
}
