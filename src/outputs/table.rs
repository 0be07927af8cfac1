//! Fixed-width console report.
//!
//! Renders the product collection as a 100-character table with columns
//! Product/Brand/Category/MSRP/Sale Price. Long text is truncated at its
//! column width; prices render as currency or `"N/A"`. The table goes to
//! stdout so it stays separate from the diagnostics on stderr.

use crate::models::ProductRecord;
use crate::utils::{format_price, truncate_cell};
use std::fmt::Write as _;

const RULE_WIDTH: usize = 100;
const PRODUCT_WIDTH: usize = 40;
const BRAND_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 25;
const PRICE_WIDTH: usize = 12;

/// Render the report table as a string.
pub fn render(products: &[ProductRecord]) -> String {
    if products.is_empty() {
        return "\nNo products found.\n".to_string();
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(
        out,
        "{:<PRODUCT_WIDTH$} {:<BRAND_WIDTH$} {:<CATEGORY_WIDTH$} {:<PRICE_WIDTH$} {:<PRICE_WIDTH$}",
        "Product", "Brand", "Category", "MSRP", "Sale Price"
    );
    let _ = writeln!(out, "{rule}");

    for product in products {
        let _ = writeln!(
            out,
            "{:<PRODUCT_WIDTH$} {:<BRAND_WIDTH$} {:<CATEGORY_WIDTH$} {:<PRICE_WIDTH$} {:<PRICE_WIDTH$}",
            truncate_cell(&product.name, PRODUCT_WIDTH),
            product.brand,
            truncate_cell(product.category.label(), CATEGORY_WIDTH),
            format_price(product.msrp),
            format_price(product.sale_price),
        );
    }

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "\nTotal products found: {}", products.len());
    out
}

/// Print the report table to stdout.
pub fn print_report(products: &[ProductRecord]) {
    print!("{}", render(products));
}
