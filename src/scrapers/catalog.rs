//! The retailers this monitor covers.
//!
//! Category paths are hand-curated per site; not every retailer carries
//! every category.

use super::retailer::RetailerConfig;
use crate::models::Category;

pub const BOWFLEX: RetailerConfig = RetailerConfig {
    brand: "Bowflex",
    base_url: "https://www.bowflex.com",
    categories: &[
        (Category::Treadmills, "/treadmills/"),
        (Category::IndoorCyclingBikes, "/bikes/"),
        (Category::HomeGyms, "/strength/"),
        (Category::AdjustableDumbbells, "/selecttech/"),
        (Category::EllipticalsAndMaxTrainer, "/max-trainer/"),
    ],
};

pub const HORIZON: RetailerConfig = RetailerConfig {
    brand: "Horizon Fitness",
    base_url: "https://www.horizonfitness.com",
    categories: &[
        (Category::Treadmills, "/treadmills"),
        (Category::IndoorCyclingBikes, "/bikes"),
        (Category::EllipticalsAndMaxTrainer, "/ellipticals"),
    ],
};

pub const SCHWINN: RetailerConfig = RetailerConfig {
    brand: "Schwinn",
    base_url: "https://www.schwinnfitness.com",
    categories: &[
        (Category::Treadmills, "/treadmills"),
        (Category::IndoorCyclingBikes, "/bikes"),
        (Category::EllipticalsAndMaxTrainer, "/ellipticals"),
    ],
};

/// All configured retailers, in scrape order.
pub const ALL: [RetailerConfig; 3] = [BOWFLEX, HORIZON, SCHWINN];
