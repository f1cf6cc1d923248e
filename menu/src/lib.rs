//! # Menu
//!
//! Turns the published spreadsheet CSV into the section/item structure the
//! site renders.
//!
//! ## Pipeline
//!
//! - [`csv::parse_rows`]: raw text to flat rows, one per data line. Lenient
//!   by design, never fails.
//! - [`builder::build_sections`]: rows to sorted [`model::MenuSection`]s,
//!   ready to serve as-is.
//!
//! The sheet is maintained by hand, so every field comes in as a string and
//! anything missing or malformed degrades to a documented default instead of
//! an error. Strong typing starts at the builder boundary, not before.
//!
//! ## Columns
//!
//! `section_id`, `section_en`, `section_ar`, `section_eyebrow_en`,
//! `section_eyebrow_ar`, `section_order`, `item_order`, `name_en`, `name_ar`,
//! `desc_en`, `desc_ar`, `price`, `badge`, `isSmaller`, `available`

pub mod builder;
pub mod csv;
pub mod model;

pub use builder::build_sections;
pub use csv::{parse_rows, Row};
pub use model::{MenuItem, MenuSection};

/// One call from text to renderable sections.
pub fn build_menu(text: &str) -> Vec<MenuSection> {
    build_sections(&parse_rows(text))
}
