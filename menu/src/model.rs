use serde::Serialize;

/// One sellable entry. Prices are opaque strings, the frontend appends the
/// "JD" suffix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name_en: String,
    pub name_ar: String,
    pub desc_en: String,
    pub desc_ar: String,
    pub price: String,
    pub badge: String,
    pub is_smaller: bool,
    pub available: bool,
    pub item_order: i64,
}

/// A named grouping of items with its own display order.
///
/// A section may carry zero items when the sheet holds a section-only row;
/// the render layer filters those before display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    pub id: String,
    pub title_en: String,
    pub title_ar: String,
    pub eyebrow_en: String,
    pub eyebrow_ar: String,
    pub order: i64,
    pub items: Vec<MenuItem>,
}
