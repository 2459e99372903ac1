// src/prompt/mod.rs
// System-prompt assembly for the chat concierge. The full prompt is rebuilt
// from a fresh content snapshot on every request; when the content store is
// unreachable the request degrades to a short static prompt instead of
// failing.

pub mod builder;

use chrono::Utc;
use tracing::warn;

use crate::content::ContentStore;

pub use builder::build_prompt;

pub const RESTAURANT_NAME: &str = "Layali Zaman (ليالي زمان)";
pub const RESTAURANT_LOCATION: &str = "Al Sadd Street, Doha, Qatar";
pub const RESTAURANT_HOURS: &str = "open daily from 12:00 noon to 1:00 AM";

/// Builds the system prompt for one request. Snapshot fetch failures are
/// absorbed here; the caller always gets a usable prompt.
pub async fn system_prompt(store: &dyn ContentStore) -> String {
    match store.snapshot().await {
        Ok(snapshot) => build_prompt(&snapshot, Utc::now()),
        Err(err) => {
            warn!("content snapshot unavailable, using static prompt: {err:#}");
            static_prompt()
        }
    }
}

/// Degraded prompt used when no snapshot is available: identity, location,
/// language mirroring, and the booking nudge. No menu, offers, or events.
pub fn static_prompt() -> String {
    format!(
        "You are the virtual host of {RESTAURANT_NAME}, a Levantine restaurant and cafe on \
         {RESTAURANT_LOCATION}, {RESTAURANT_HOURS}. Always reply in the language the guest \
         used: Arabic in Arabic, English in English. Always encourage guests to book a table \
         through the reservations page on the website."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentSnapshot;
    use anyhow::bail;
    use async_trait::async_trait;

    struct FixedStore(ContentSnapshot);

    #[async_trait]
    impl ContentStore for FixedStore {
        async fn snapshot(&self) -> anyhow::Result<ContentSnapshot> {
            Ok(self.0.clone())
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl ContentStore for BrokenStore {
        async fn snapshot(&self) -> anyhow::Result<ContentSnapshot> {
            bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn store_failure_degrades_to_the_static_prompt() {
        let prompt = system_prompt(&BrokenStore).await;
        assert!(prompt.contains(RESTAURANT_NAME));
        assert!(prompt.contains(RESTAURANT_LOCATION));
        assert_eq!(prompt, static_prompt());
    }

    #[tokio::test]
    async fn working_store_yields_the_full_prompt() {
        let prompt = system_prompt(&FixedStore(ContentSnapshot::default())).await;
        assert!(prompt.contains(RESTAURANT_NAME));
        assert!(prompt.contains(RESTAURANT_LOCATION));
        assert_ne!(prompt, static_prompt());
    }
}
