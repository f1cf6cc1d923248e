//! Remote CSV fetch and revalidation cache.
//!
//! The sheet is a published spreadsheet export, so every build is a full
//! refetch-and-rebuild. A build is served from cache while younger than the
//! revalidation interval; the first request past the interval refetches.
//! Concurrent misses may each fetch, which is harmless at this traffic level.
//! A failed fetch is not retried here, the next request past the interval is
//! the recovery path.

use std::time::{Duration, Instant};

use menu::{build_menu, MenuSection};
use reqwest::Client;
use tracing::info;

use crate::{error::AppError, state::State};

pub struct CachedMenu {
    pub sections: Vec<MenuSection>,
    pub fetched_at: Instant,
}

pub async fn menu_sections(state: &State) -> Result<Vec<MenuSection>, AppError> {
    {
        let cache = state.menu_cache.lock().await;
        if let Some(cached) = cache.as_ref() {
            if is_fresh(cached.fetched_at, Instant::now(), state.config.menu_revalidate) {
                return Ok(cached.sections.clone());
            }
        }
    }

    let text = fetch_csv(&state.http, &state.config.sheet_csv_url).await?;
    let sections = build_menu(&text);
    info!("Rebuilt menu: {} sections", sections.len());

    *state.menu_cache.lock().await = Some(CachedMenu {
        sections: sections.clone(),
        fetched_at: Instant::now(),
    });

    Ok(sections)
}

async fn fetch_csv(client: &Client, url: &str) -> Result<String, AppError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::MenuFetch(status));
    }

    Ok(response.text().await?)
}

fn is_fresh(fetched_at: Instant, now: Instant, revalidate: Duration) -> bool {
    now.duration_since(fetched_at) < revalidate
}
