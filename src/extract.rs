//! Price and product extraction from listing markup.
//!
//! Retailer pages are unversioned and their markup varies, so extraction is
//! heuristic rather than selector-exact: elements are classified by
//! case-insensitive class-name patterns (`product|item|card` for listing
//! blocks, `title|name|product` for names, `price` for prices) and anything
//! that doesn't fit is skipped, never treated as an error.
//!
//! # Extraction pipeline
//!
//! 1. The site adapter selects up to 10 listing blocks per page via
//!    [`looks_like_listing`].
//! 2. [`extract_product`] resolves a name and collects every parseable price
//!    inside one block.
//! 3. The maximum price becomes the MSRP; the minimum becomes the sale price
//!    when more than one distinct price was found.
//!
//! A block that yields no name or no price produces no record. One bad block
//! never aborts the rest of the page.

use crate::models::{Category, ProductRecord};
use crate::utils::collapse_ws;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::warn;

/// Class pattern marking an element as a product listing block.
static LISTING_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)product|item|card").unwrap());

/// Class pattern marking an element as a product name/title.
static NAME_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)title|name|product").unwrap());

/// Class pattern marking an element as price-bearing.
static PRICE_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)price").unwrap());

/// Optional dollar marker followed by a digit run and optional cents.
/// Applied after thousands separators have been stripped.
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$?\s*(\d+(?:\.\d{2})?)").unwrap());

fn class_matches(el: ElementRef<'_>, pattern: &Regex) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|class| pattern.is_match(class))
}

/// Whether a page element looks like one product's listing block.
///
/// Matches `div` and `article` elements whose class attribute contains
/// `product`, `item`, or `card` (case-insensitive). The site adapter uses
/// this to pick candidate blocks off a category page.
pub fn looks_like_listing(el: ElementRef<'_>) -> bool {
    matches!(el.value().name(), "div" | "article") && class_matches(el, &LISTING_CLASS)
}

/// Visible text of an element, whitespace-collapsed.
fn element_text(el: ElementRef<'_>) -> String {
    collapse_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Extract a numeric price from arbitrary text.
///
/// Strips comma thousands-separators, then parses the first substring that
/// looks like a price: an optional `$`, a run of digits, and an optional
/// two-digit decimal fraction. Only the first match counts; later numbers in
/// the same text are ignored.
///
/// Returns `None` for empty input or text with no digits
/// (e.g. `"Call for price"`).
pub fn extract_price(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let stripped = text.replace(',', "");
    let caps = PRICE_RE.captures(&stripped)?;
    caps[1].parse::<f64>().ok()
}

/// Extract a normalized product record from one listing block.
///
/// Name resolution tries heading and link elements (`h2`/`h3`/`h4`/`a`)
/// whose class matches the name pattern, then falls back to the first link
/// anywhere in the block. A block with neither is not a product and yields
/// `None` rather than an error.
///
/// All prices found in `span`/`div`/`p` elements with a price-like class are
/// collected in document order. The maximum becomes `msrp`; the minimum is
/// reported as `sale_price` only when more than one distinct price was
/// found. Blocks with more than two distinct prices are flagged for review,
/// since the max/min split cannot tell a bundle or financing figure from a
/// genuine discount.
pub fn extract_product(
    fragment: ElementRef<'_>,
    brand: &str,
    category: Category,
) -> Option<ProductRecord> {
    let heading_selector = Selector::parse("h2, h3, h4, a").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let name_el = fragment
        .select(&heading_selector)
        .find(|el| class_matches(*el, &NAME_CLASS))
        .or_else(|| fragment.select(&link_selector).next())?;
    let name = element_text(name_el);

    let price_selector = Selector::parse("span, div, p").unwrap();
    let prices: Vec<f64> = fragment
        .select(&price_selector)
        .filter(|el| class_matches(*el, &PRICE_CLASS))
        .filter_map(|el| extract_price(&element_text(el)))
        .collect();

    if prices.is_empty() {
        return None;
    }

    let msrp = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lowest = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let distinct = prices.iter().map(|p| p.to_bits()).unique().count();

    if distinct > 2 {
        warn!(
            product = %name,
            brand,
            distinct,
            "listing shows more than two distinct prices; MSRP/sale split needs review"
        );
    }

    Some(ProductRecord {
        name,
        brand: brand.to_string(),
        category,
        msrp: Some(msrp),
        sale_price: (distinct > 1).then_some(lowest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn with_fragment<T>(html: &str, f: impl FnOnce(ElementRef<'_>) -> T) -> T {
        let doc = Html::parse_fragment(html);
        let selector = Selector::parse("div, article").unwrap();
        let fragment = doc.select(&selector).next().expect("fragment root");
        f(fragment)
    }

    #[test]
    fn test_extract_price_plain_and_decorated() {
        assert_eq!(extract_price("$1,299.99"), Some(1299.99));
        assert_eq!(extract_price("899"), Some(899.0));
        assert_eq!(extract_price("Now only $549.00!"), Some(549.0));
        assert_eq!(extract_price("$ 2,199"), Some(2199.0));
    }

    #[test]
    fn test_extract_price_no_digits() {
        assert_eq!(extract_price("Call for price"), None);
        assert_eq!(extract_price(""), None);
        assert_eq!(extract_price("$"), None);
    }

    #[test]
    fn test_extract_price_first_match_wins() {
        assert_eq!(extract_price("Was $999.99 now $799.99"), Some(999.99));
    }

    #[test]
    fn test_single_price_is_msrp_without_sale() {
        let html = r#"<div class="product-card">
            <h3 class="product-title">Treadmill 10</h3>
            <span class="price">$1,999.00</span>
        </div>"#;
        let record = with_fragment(html, |fragment| {
            extract_product(fragment, "Bowflex", Category::Treadmills).unwrap()
        });
        assert_eq!(record.name, "Treadmill 10");
        assert_eq!(record.msrp, Some(1999.0));
        assert_eq!(record.sale_price, None);
    }

    #[test]
    fn test_two_prices_split_regardless_of_order() {
        for (first, second) in [("$99.99", "$129.99"), ("$129.99", "$99.99")] {
            let html = format!(
                r#"<div class="product-item">
                    <h2 class="name">Bike Trainer</h2>
                    <span class="sale-price">{first}</span>
                    <span class="list-price">{second}</span>
                </div>"#
            );
            let record = with_fragment(&html, |fragment| {
                extract_product(fragment, "Schwinn", Category::IndoorCyclingBikes).unwrap()
            });
            assert_eq!(record.msrp, Some(129.99));
            assert_eq!(record.sale_price, Some(99.99));
        }
    }

    #[test]
    fn test_repeated_identical_price_counts_as_one() {
        let html = r#"<div class="product-card">
            <a class="title" href="/gym">Home Gym Xtreme</a>
            <span class="price">$1,499.00</span>
            <div class="price-mobile">$1,499.00</div>
        </div>"#;
        let record = with_fragment(html, |fragment| {
            extract_product(fragment, "Bowflex", Category::HomeGyms).unwrap()
        });
        assert_eq!(record.msrp, Some(1499.0));
        assert_eq!(record.sale_price, None);
    }

    #[test]
    fn test_three_distinct_prices_still_split_max_min() {
        let html = r#"<div class="product-card">
            <h3 class="product-name">Max Trainer M9</h3>
            <span class="price">$2,299.00</span>
            <span class="price-sale">$1,999.00</span>
            <p class="price-financing">$64.00</p>
        </div>"#;
        let record = with_fragment(html, |fragment| {
            extract_product(fragment, "Bowflex", Category::EllipticalsAndMaxTrainer).unwrap()
        });
        assert_eq!(record.msrp, Some(2299.0));
        assert_eq!(record.sale_price, Some(64.0));
    }

    #[test]
    fn test_no_prices_yields_no_record() {
        let html = r#"<div class="product-card">
            <h3 class="title">Coming Soon</h3>
            <span class="badge">New</span>
        </div>"#;
        let record = with_fragment(html, |fragment| {
            extract_product(fragment, "Horizon Fitness", Category::Treadmills)
        });
        assert!(record.is_none());
    }

    #[test]
    fn test_no_name_and_no_link_yields_no_record() {
        let html = r#"<div class="product-card">
            <span class="price">$899.00</span>
        </div>"#;
        let record = with_fragment(html, |fragment| {
            extract_product(fragment, "Schwinn", Category::Treadmills)
        });
        assert!(record.is_none());
    }

    #[test]
    fn test_name_falls_back_to_first_link() {
        let html = r#"<div class="item">
            <a href="/bikes/ic4">Schwinn IC4</a>
            <span class="current-price">$799.00</span>
        </div>"#;
        let record = with_fragment(html, |fragment| {
            extract_product(fragment, "Schwinn", Category::IndoorCyclingBikes).unwrap()
        });
        assert_eq!(record.name, "Schwinn IC4");
    }

    #[test]
    fn test_name_text_is_whitespace_collapsed() {
        let html = "<div class=\"card\">\n  <h2 class=\"product-title\">\n    Treadmill\n    7.8 AT\n  </h2>\n  <span class=\"price\">$1,799</span>\n</div>";
        let record = with_fragment(html, |fragment| {
            extract_product(fragment, "Horizon Fitness", Category::Treadmills).unwrap()
        });
        assert_eq!(record.name, "Treadmill 7.8 AT");
    }

    #[test]
    fn test_looks_like_listing() {
        let doc = Html::parse_fragment(
            r#"<div class="product-grid-item"></div>
               <article class="card"></article>
               <div class="navigation"></div>
               <span class="product"></span>"#,
        );
        let selector = Selector::parse("div, article, span").unwrap();
        let matches: Vec<bool> = doc.select(&selector).map(looks_like_listing).collect();
        assert_eq!(matches, vec![true, true, false, false]);
    }
}
