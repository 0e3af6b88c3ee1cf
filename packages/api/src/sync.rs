//! Throttled content sync from the server into local storage.

use crate::articles::{default_article, ArticleLibrary};
use crate::dictionary::{seed_words, Dictionary};
use crate::error::Result;
use crate::store::{keys, KeyValueStore};
use crate::types::SyncPayload;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

pub fn sync_interval() -> Duration {
    Duration::hours(1)
}

/// True when the last sync stamp is missing or unreadable, or at least an hour old.
pub fn sync_due(store: &dyn KeyValueStore, now: DateTime<Utc>) -> bool {
    let Some(last) = store
        .get(keys::LAST_SYNC)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .and_then(DateTime::<Utc>::from_timestamp_millis)
    else {
        return true;
    };
    let due = now - last >= sync_interval();
    debug!("sync.sync_due: last={} due={}", last, due);
    due
}

/// Replace custom articles and words wholesale, then stamp the sync time.
pub fn apply_sync(store: &dyn KeyValueStore, payload: &SyncPayload, now: DateTime<Utc>) -> Result<()> {
    ArticleLibrary::new(payload.articles.clone()).persist(store)?;
    Dictionary::new(payload.words.clone()).persist(store)?;
    store.set(keys::LAST_SYNC, &now.timestamp_millis().to_string())?;
    info!(
        "sync.apply_sync: articles={} words={}",
        payload.articles.len(),
        payload.words.len()
    );
    Ok(())
}

/// Content served when no sync file is configured.
pub fn default_payload() -> SyncPayload {
    let words = seed_words()
        .into_iter()
        .filter(|(_, entry)| entry.usage_example.is_some())
        .collect();
    SyncPayload {
        articles: vec![default_article()],
        words,
    }
}

#[cfg(feature = "server")]
pub mod server {
    use super::default_payload;
    use crate::config::AppConfig;
    use crate::types::SyncPayload;
    use anyhow::Context;

    /// Payload for `/api/sync`: the configured file, else the built-in content.
    pub async fn load_payload(config: &AppConfig) -> anyhow::Result<SyncPayload> {
        let Some(path) = &config.sync_file else {
            return Ok(default_payload());
        };
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading sync file {}", path.display()))?;
        let payload: SyncPayload = serde_json::from_str(&raw)
            .with_context(|| format!("parsing sync file {}", path.display()))?;
        tracing::info!(
            "sync.load_payload: file={} articles={} words={}",
            path.display(),
            payload.articles.len(),
            payload.words.len()
        );
        Ok(payload)
    }
}
