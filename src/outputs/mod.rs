//! Output generation for the console report and JSON persistence.
//!
//! # Submodules
//!
//! - [`table`]: renders the product collection as a fixed-width table on
//!   stdout
//! - [`json`]: saves the collection to `products.json` and loads sample
//!   data back in the same shape

pub mod json;
pub mod table;
