// src/content/store.rs
// Read-only access to the website's content service. One snapshot per chat
// request, fetched as a five-collection fan-out.

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::info;

use crate::config::CONFIG;
use crate::content::types::{Category, ContentSnapshot, Event, MenuItem, Offer, Subcategory};

/// Source of content snapshots. The trait exists so tests can stand in an
/// in-memory or failing store for the HTTP client.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn snapshot(&self) -> Result<ContentSnapshot>;
}

/// HTTP implementation reading the five collections under
/// `{base}/api/content/`.
#[derive(Clone)]
pub struct ContentApiClient {
    client: Client,
    base_url: String,
}

impl ContentApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.content_api_url.clone())
    }

    async fn collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let url = format!("{}/api/content/{}", self.base_url, name);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            bail!("content store returned {} for {}", status, name);
        }
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl ContentStore for ContentApiClient {
    /// Fetches all five collections concurrently and joins them into one
    /// snapshot. Any single failure fails the whole fetch; there is no
    /// partial snapshot and no retry.
    async fn snapshot(&self) -> Result<ContentSnapshot> {
        let started = Instant::now();

        let (categories, subcategories, menu_items, offers, events) = tokio::try_join!(
            self.collection::<Category>("categories"),
            self.collection::<Subcategory>("subcategories"),
            self.collection::<MenuItem>("menu-items"),
            self.collection::<Offer>("offers"),
            self.collection::<Event>("events"),
        )?;

        info!(
            "content snapshot fetched in {:?}: {} categories, {} subcategories, {} items, {} offers, {} events",
            started.elapsed(),
            categories.len(),
            subcategories.len(),
            menu_items.len(),
            offers.len(),
            events.len()
        );

        Ok(ContentSnapshot {
            categories,
            subcategories,
            menu_items,
            offers,
            events,
        })
    }
}
