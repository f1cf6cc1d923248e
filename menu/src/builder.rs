//! Folds parsed rows into sorted sections.
//!
//! Single pass, no I/O, deterministic: the same rows always produce the same
//! structure. Malformed cells fall back to defaults (order 999, available
//! true, smaller false) instead of failing.

use std::collections::HashMap;

use crate::csv::Row;
use crate::model::{MenuItem, MenuSection};

const DEFAULT_ORDER: i64 = 999;

/// Group rows into sections and return them fully sorted.
///
/// Section identity is `section_id`, falling back to `section_en`, then the
/// literal `"misc"`. The first row seen for an identifier fixes the section's
/// titles, eyebrows and order; later rows only contribute items. A row whose
/// `name_en` is blank establishes its section but adds no item.
pub fn build_sections(rows: &[Row]) -> Vec<MenuSection> {
    let mut sections: Vec<MenuSection> = Vec::new();
    let mut by_id: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let id = section_id(row);

        let slot = match by_id.get(&id) {
            Some(&slot) => slot,
            None => {
                sections.push(MenuSection {
                    id: id.clone(),
                    title_en: row.get("section_en").to_string(),
                    title_ar: row.get("section_ar").to_string(),
                    eyebrow_en: row.get("section_eyebrow_en").to_string(),
                    eyebrow_ar: row.get("section_eyebrow_ar").to_string(),
                    order: parse_order(row.get("section_order")),
                    items: Vec::new(),
                });
                by_id.insert(id, sections.len() - 1);
                sections.len() - 1
            }
        };

        // section-only row
        if row.get("name_en").trim().is_empty() {
            continue;
        }

        sections[slot].items.push(MenuItem {
            name_en: row.get("name_en").to_string(),
            name_ar: row.get("name_ar").to_string(),
            desc_en: row.get("desc_en").to_string(),
            desc_ar: row.get("desc_ar").to_string(),
            price: row.get("price").to_string(),
            badge: row.get("badge").to_string(),
            is_smaller: parse_flag(row.get("isSmaller")),
            available: parse_available(row.get("available")),
            item_order: parse_order(row.get("item_order")),
        });
    }

    for section in &mut sections {
        section.items.sort_by(|a, b| {
            a.item_order
                .cmp(&b.item_order)
                .then_with(|| a.name_en.cmp(&b.name_en))
        });
    }
    sections.sort_by(|a, b| {
        a.order
            .cmp(&b.order)
            .then_with(|| a.title_en.cmp(&b.title_en))
    });

    sections
}

fn section_id(row: &Row) -> String {
    let id = row.get("section_id");
    if !id.is_empty() {
        return id.to_string();
    }
    let title = row.get("section_en");
    if !title.is_empty() {
        return title.to_string();
    }
    "misc".to_string()
}

fn parse_order(value: &str) -> i64 {
    value.trim().parse().unwrap_or(DEFAULT_ORDER)
}

fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Unlike [`parse_flag`], an absent or blank cell means available.
fn parse_available(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::{build_sections, parse_available, parse_flag, parse_order};
    use crate::csv::{parse_rows, Row};

    #[test]
    fn test_order_parsing() {
        assert_eq!(parse_order("2"), 2);
        assert_eq!(parse_order(" 17 "), 17);
        assert_eq!(parse_order(""), 999);
        assert_eq!(parse_order("abc"), 999);
        // orders are integers, fractional values fall back like any non-number
        assert_eq!(parse_order("1.5"), 999);
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag(""));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("1"));
    }

    #[test]
    fn test_available_defaults_true() {
        assert!(parse_available(""));
        assert!(parse_available("true"));
        assert!(!parse_available("false"));
        assert!(!parse_available("no"));
        assert!(!parse_available("0"));
    }

    #[test]
    fn test_no_rows_no_sections() {
        assert!(build_sections(&[]).is_empty());
        assert!(build_sections(&parse_rows("section_id,name_en")).is_empty());
    }

    #[test]
    fn test_blank_name_keeps_section_skips_item() {
        let rows = [Row::from_pairs(&[
            ("section_id", "drinks"),
            ("section_en", "Drinks"),
            ("name_en", "   "),
        ])];
        let sections = build_sections(&rows);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "drinks");
        assert!(sections[0].items.is_empty());
    }

    #[test]
    fn test_item_fields_round_trip() {
        let rows = [Row::from_pairs(&[
            ("section_id", "drinks"),
            ("name_en", "Mint Tea"),
            ("price", "12.5"),
            ("badge", "New"),
            ("isSmaller", "true"),
            ("available", "false"),
        ])];
        let item = &build_sections(&rows)[0].items[0];

        assert_eq!(item.price, "12.5");
        assert_eq!(item.badge, "New");
        assert!(item.is_smaller);
        assert!(!item.available);
        assert_eq!(item.item_order, 999);
    }

    #[test]
    fn test_items_sorted_by_order_then_name() {
        let rows = [
            Row::from_pairs(&[("section_id", "s"), ("name_en", "Tea"), ("item_order", "2")]),
            Row::from_pairs(&[("section_id", "s"), ("name_en", "Banana"), ("item_order", "1")]),
            Row::from_pairs(&[("section_id", "s"), ("name_en", "Apple"), ("item_order", "1")]),
        ];
        let sections = build_sections(&rows);
        let names: Vec<_> = sections[0]
            .items
            .iter()
            .map(|i| i.name_en.as_str())
            .collect();

        assert_eq!(names, ["Apple", "Banana", "Tea"]);
    }

    #[test]
    fn test_section_identity_fallback() {
        let rows = [
            Row::from_pairs(&[("section_en", "Drinks"), ("name_en", "Tea")]),
            Row::from_pairs(&[("section_en", "Drinks"), ("name_en", "Coffee")]),
            Row::from_pairs(&[("name_en", "Stray")]),
        ];
        let sections = build_sections(&rows);

        assert_eq!(sections.len(), 2);

        let drinks = sections.iter().find(|s| s.id == "Drinks").unwrap();
        assert_eq!(drinks.items.len(), 2);

        let misc = sections.iter().find(|s| s.id == "misc").unwrap();
        assert_eq!(misc.items.len(), 1);
    }

    #[test]
    fn test_first_row_fixes_section_metadata() {
        let rows = [
            Row::from_pairs(&[
                ("section_id", "drinks"),
                ("section_en", "Drinks"),
                ("section_order", "3"),
            ]),
            Row::from_pairs(&[
                ("section_id", "drinks"),
                ("section_en", "Hot Drinks"),
                ("section_order", "1"),
                ("name_en", "Tea"),
            ]),
        ];
        let sections = build_sections(&rows);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title_en, "Drinks");
        assert_eq!(sections[0].order, 3);
        assert_eq!(sections[0].items.len(), 1);
    }

    #[test]
    fn test_sections_sorted_by_order_then_title() {
        let rows = [
            Row::from_pairs(&[("section_id", "b"), ("section_en", "Bakes"), ("section_order", "2")]),
            Row::from_pairs(&[("section_id", "d"), ("section_en", "Drinks"), ("section_order", "1")]),
            Row::from_pairs(&[("section_id", "a"), ("section_en", "Add-ons"), ("section_order", "2")]),
        ];
        let titles: Vec<_> = build_sections(&rows)
            .iter()
            .map(|s| s.title_en.clone())
            .collect();

        assert_eq!(titles, ["Drinks", "Add-ons", "Bakes"]);
    }

    #[test]
    fn test_end_to_end() {
        let csv = "\
section_id,section_en,section_order,name_en,item_order,price,available
drinks,Drinks,1,Tea,2,2.5,
drinks,Drinks,1,Coffee,1,3,false";
        let sections = build_sections(&parse_rows(csv));

        assert_eq!(sections.len(), 1);
        let section = &sections[0];
        assert_eq!(section.id, "drinks");
        assert_eq!(section.title_en, "Drinks");
        assert_eq!(section.order, 1);

        assert_eq!(section.items.len(), 2);
        assert_eq!(section.items[0].name_en, "Coffee");
        assert_eq!(section.items[0].item_order, 1);
        assert!(!section.items[0].available);
        assert_eq!(section.items[1].name_en, "Tea");
        assert_eq!(section.items[1].item_order, 2);
        assert!(section.items[1].available);
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let csv = "section_id,name_en\ndrinks,Tea";
        let json = serde_json::to_value(build_sections(&parse_rows(csv))).unwrap();

        assert_eq!(json[0]["id"], "drinks");
        assert_eq!(json[0]["items"][0]["nameEn"], "Tea");
        assert_eq!(json[0]["items"][0]["itemOrder"], 999);
        assert_eq!(json[0]["items"][0]["available"], true);
    }
}
