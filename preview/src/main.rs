//! Fetches the published menu sheet and prints what the site would render.
//! Handy for checking a sheet edit before it goes live.

use anyhow::{bail, Context};
use clap::Parser;
use menu::{build_menu, MenuSection};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// CSV export URL, falls back to SHEET_CSV_URL
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let url = match args.url {
        Some(url) => url,
        None => std::env::var("SHEET_CSV_URL")
            .context("pass a URL or set SHEET_CSV_URL")?,
    };

    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        bail!("menu source responded with {}", response.status());
    }

    let sections = build_menu(&response.text().await?);
    if sections.is_empty() {
        println!("Sheet parsed but produced no sections.");
        return Ok(());
    }

    for section in &sections {
        print_section(section);
    }

    Ok(())
}

fn print_section(section: &MenuSection) {
    if section.eyebrow_en.is_empty() {
        println!("\n== {} (order {}) ==", section.title_en, section.order);
    } else {
        println!(
            "\n== {} · {} (order {}) ==",
            section.eyebrow_en, section.title_en, section.order
        );
    }

    if section.items.is_empty() {
        println!("  (no items, hidden on the site)");
        return;
    }

    for item in &section.items {
        let mut line = format!("  {:>4}  {}", item.item_order, item.name_en);

        if !item.price.is_empty() {
            line.push_str(&format!("  {} JD", item.price));
        }
        if !item.badge.is_empty() {
            line.push_str(&format!("  [{}]", item.badge));
        }
        if !item.available {
            line.push_str("  (unavailable)");
        }

        println!("{line}");
    }
}
