//! Local persistence shim.
//!
//! Every collection is stored verbatim as a JSON blob under a fixed key.
//! Reads never fail: a missing or corrupt blob loads as an empty collection.

use crate::error::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

pub mod keys {
    pub const LAST_SYNC: &str = "linguaromana_last_sync";
    pub const CUSTOM_ARTICLES: &str = "linguaromana_custom_articles";
    pub const CUSTOM_WORDS: &str = "linguaromana_custom_words";
    pub const SAVED_WORDS: &str = "linguaromana_saved_words";
    pub const ADMIN_PASSWORD: &str = "linguaromana_admin_password";
}

/// A string key/value store with browser localStorage semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str);
}

/// In-memory store used by tests and by platforms without localStorage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Load a JSON collection, falling back to `T::default()` on any failure.
pub fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key) else {
        debug!("store.load_json: miss key={}", key);
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("store.load_json: unreadable key={} err={}", key, e);
            T::default()
        }
    }
}

/// Load a JSON array record by record. Entries that do not deserialize are
/// skipped so one bad record cannot hide its siblings.
pub fn load_records<T>(store: &dyn KeyValueStore, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    let values: Vec<Value> = load_json(store, key);
    readable_records(values, key)
}

/// Load a JSON object entry by entry, skipping entries that do not deserialize.
pub fn load_record_map<T>(store: &dyn KeyValueStore, key: &str) -> BTreeMap<String, T>
where
    T: DeserializeOwned,
{
    let values: BTreeMap<String, Value> = load_json(store, key);
    readable_entries(values, key)
}

pub fn readable_records<T>(values: Vec<Value>, source: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("store.records: skipped source={} index={} err={}", source, index, e);
                None
            }
        })
        .collect()
}

pub fn readable_entries<T>(values: BTreeMap<String, Value>, source: &str) -> BTreeMap<String, T>
where
    T: DeserializeOwned,
{
    values
        .into_iter()
        .filter_map(|(name, value)| match serde_json::from_value(value) {
            Ok(record) => Some((name, record)),
            Err(e) => {
                warn!("store.records: skipped source={} entry={} err={}", source, name, e);
                None
            }
        })
        .collect()
}

pub fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    debug!("store.save_json: key={} bytes={}", key, raw.len());
    store.set(key, &raw).map_err(|e| match e {
        Error::Storage { .. } => e,
        other => Error::Storage {
            key: key.to_string(),
            message: other.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SavedWord;

    #[test]
    fn missing_key_loads_default() {
        let store = MemoryStore::new();
        let words: BTreeMap<String, String> = load_json(&store, keys::CUSTOM_WORDS);
        assert!(words.is_empty());
    }

    #[test]
    fn corrupt_blob_degrades_to_empty() {
        let store = MemoryStore::new();
        store.set(keys::CUSTOM_ARTICLES, "{not json").unwrap();
        let articles: Vec<String> = load_json(&store, keys::CUSTOM_ARTICLES);
        assert!(articles.is_empty());
    }

    #[test]
    fn mixed_array_keeps_readable_records() {
        let store = MemoryStore::new();
        store
            .set(
                keys::SAVED_WORDS,
                r#"[{"id":1,"word":"crisis","translations":{"fr":"crise"},"savedAt":"2025-09-01T10:00:00Z"},
                    42,
                    {"word":"aéreos"},
                    {"id":2,"word":"estrategia","translations":{"fr":"stratégie"},"savedAt":"2025-09-02T10:00:00Z"}]"#,
            )
            .unwrap();
        let words: Vec<SavedWord> = load_records(&store, keys::SAVED_WORDS);
        let names: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, ["crisis", "estrategia"]);
    }

    #[test]
    fn non_array_blob_loads_no_records() {
        let store = MemoryStore::new();
        store.set(keys::SAVED_WORDS, r#"{"word":"crisis"}"#).unwrap();
        let words: Vec<SavedWord> = load_records(&store, keys::SAVED_WORDS);
        assert!(words.is_empty());
    }

    #[test]
    fn record_map_skips_unreadable_entries() {
        let store = MemoryStore::new();
        store
            .set(keys::CUSTOM_WORDS, r#"{"crisis":{"fr":"crise"},"broken":"nope"}"#)
            .unwrap();
        let words: BTreeMap<String, crate::types::WordEntry> = load_record_map(&store, keys::CUSTOM_WORDS);
        assert_eq!(words.len(), 1);
        assert_eq!(words["crisis"].fr, "crise");
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        save_json(&store, keys::SAVED_WORDS, &vec!["a", "b"]).unwrap();
        assert_eq!(store.get(keys::SAVED_WORDS).as_deref(), Some(r#"["a","b"]"#));
        let back: Vec<String> = load_json(&store, keys::SAVED_WORDS);
        assert_eq!(back, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn remove_clears_key() {
        let store = MemoryStore::new();
        store.set(keys::LAST_SYNC, "1").unwrap();
        assert_eq!(store.len(), 1);
        store.remove(keys::LAST_SYNC);
        assert!(store.is_empty());
    }
}
