//! The learner's personal list of saved words.

use crate::error::{Error, Result};
use crate::store::{self, keys, KeyValueStore};
use crate::types::{Language, SavedWord, WordEntry};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LanguageFilter {
    #[default]
    All,
    Only(Language),
}

impl LanguageFilter {
    pub fn matches(&self, word: &SavedWord) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::Only(lang) => word.language == *lang,
        }
    }
}

/// Badge counts for the language tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedCounts {
    pub total: usize,
    pub by_language: BTreeMap<Language, usize>,
}

impl SavedCounts {
    pub fn get(&self, filter: LanguageFilter) -> usize {
        match filter {
            LanguageFilter::All => self.total,
            LanguageFilter::Only(lang) => self.by_language.get(&lang).copied().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedWords {
    words: Vec<SavedWord>,
}

impl SavedWords {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            words: store::load_records(store, keys::SAVED_WORDS),
        }
    }

    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<()> {
        store::save_json(store, keys::SAVED_WORDS, &self.words)
    }

    pub fn words(&self) -> &[SavedWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.word == word)
    }

    /// Returns false when the word was already in the list.
    pub fn save(&mut self, word: &str, entry: &WordEntry, now: DateTime<Utc>) -> bool {
        if self.contains(word) {
            return false;
        }
        let mut id = now.timestamp_millis();
        while self.words.iter().any(|w| w.id == id) {
            id += 1;
        }
        self.words.insert(
            0,
            SavedWord {
                id,
                word: word.to_string(),
                translations: entry.clone(),
                grammar: entry.grammar.clone(),
                saved_at: now,
                language: entry.language(),
            },
        );
        info!("saved_words.save: word={} total={}", word, self.words.len());
        true
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w.id != id);
        self.words.len() != before
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn filtered(&self, filter: LanguageFilter) -> Vec<&SavedWord> {
        self.words.iter().filter(|w| filter.matches(w)).collect()
    }

    pub fn counts(&self) -> SavedCounts {
        let mut counts = SavedCounts {
            total: self.words.len(),
            ..SavedCounts::default()
        };
        for word in &self.words {
            *counts.by_language.entry(word.language).or_default() += 1;
        }
        counts
    }

    pub fn export_json(&self) -> Result<String> {
        if self.words.is_empty() {
            return Err(Error::NothingToExport);
        }
        Ok(serde_json::to_string_pretty(&self.words)?)
    }
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("linguaromana_mots_sauvegardes_{}.json", now.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::seed_words;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 2, 10, 0, 0).unwrap()
    }

    fn italian(word: &str) -> WordEntry {
        WordEntry {
            it: word.to_string(),
            primary_language: Some(Language::It),
            ..WordEntry::default()
        }
    }

    #[test]
    fn save_prepends_and_rejects_duplicates() {
        let seed = seed_words();
        let mut saved = SavedWords::default();
        assert!(saved.save("crisis", &seed["crisis"], now()));
        assert!(saved.save("aéreos", &seed["aéreos"], now()));
        assert!(!saved.save("crisis", &seed["crisis"], now()));
        assert_eq!(saved.len(), 2);
        assert_eq!(saved.words()[0].word, "aéreos");
        assert_ne!(saved.words()[0].id, saved.words()[1].id);
        assert_eq!(saved.words()[1].grammar, seed["crisis"].grammar);
    }

    #[test]
    fn language_comes_from_entry() {
        let mut saved = SavedWords::default();
        saved.save("casa", &WordEntry::default(), now());
        saved.save("gatto", &italian("gatto"), now());
        assert_eq!(saved.filtered(LanguageFilter::Only(Language::It)).len(), 1);
        assert_eq!(saved.filtered(LanguageFilter::Only(Language::Es))[0].word, "casa");
        assert_eq!(saved.filtered(LanguageFilter::All).len(), 2);

        let counts = saved.counts();
        assert_eq!(counts.get(LanguageFilter::All), 2);
        assert_eq!(counts.get(LanguageFilter::Only(Language::It)), 1);
        assert_eq!(counts.get(LanguageFilter::Only(Language::Fr)), 0);
    }

    #[test]
    fn remove_and_clear() {
        let mut saved = SavedWords::default();
        saved.save("casa", &WordEntry::default(), now());
        let id = saved.words()[0].id;
        assert!(saved.remove(id));
        assert!(!saved.remove(id));
        saved.save("casa", &WordEntry::default(), now());
        saved.clear();
        assert!(saved.is_empty());
    }

    #[test]
    fn export_requires_words() {
        let mut saved = SavedWords::default();
        assert!(matches!(saved.export_json(), Err(Error::NothingToExport)));
        saved.save("casa", &WordEntry::default(), now());
        let json = saved.export_json().unwrap();
        assert!(json.contains("\"savedAt\""));
        assert!(json.contains('\n'));
        assert_eq!(export_file_name(now()), "linguaromana_mots_sauvegardes_2025-09-02.json");
    }

    #[test]
    fn persisted_list_reloads() {
        let store = MemoryStore::new();
        let mut saved = SavedWords::load(&store);
        saved.save("gatto", &italian("gatto"), now());
        saved.persist(&store).unwrap();
        let reloaded = SavedWords::load(&store);
        assert!(reloaded.contains("gatto"));
        assert_eq!(reloaded.words()[0].language, Language::It);
    }
}
