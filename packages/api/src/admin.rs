//! Admin session, password and bulk data operations.

use crate::articles::ArticleLibrary;
use crate::dictionary::Dictionary;
use crate::error::{Result, ValidationError};
use crate::store::{self, keys, KeyValueStore};
use crate::types::{Article, ExportBundle, WordMap};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminGate {
    authenticated: bool,
}

impl AdminGate {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn authenticate(&mut self, store: &dyn KeyValueStore, attempt: &str) -> bool {
        self.authenticated = attempt == current_password(store);
        if !self.authenticated {
            warn!("admin.authenticate: rejected");
        }
        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

pub fn current_password(store: &dyn KeyValueStore) -> String {
    store
        .get(keys::ADMIN_PASSWORD)
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string())
}

pub fn change_password(store: &dyn KeyValueStore, new_password: &str) -> Result<()> {
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN).into());
    }
    store.set(keys::ADMIN_PASSWORD, new_password)?;
    info!("admin.change_password: updated");
    Ok(())
}

/// Pretty JSON of the custom articles and custom words.
pub fn export_bundle(library: &ArticleLibrary, dictionary: &Dictionary, now: DateTime<Utc>) -> Result<String> {
    let bundle = ExportBundle {
        articles: library.articles().to_vec(),
        words: dictionary.custom().clone(),
        export_date: now,
    };
    Ok(serde_json::to_string_pretty(&bundle)?)
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("linguaromana_admin_export_{}.json", now.format("%Y-%m-%d"))
}

/// An import file. Either collection may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImportData {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub words: WordMap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub articles: usize,
    pub words: usize,
}

/// Parse an import file. Malformed JSON is an error, but individual articles
/// or words that do not deserialize are skipped.
pub fn parse_import(json: &str) -> Result<ImportData> {
    #[derive(Deserialize)]
    struct RawImport {
        #[serde(default)]
        articles: Vec<Value>,
        #[serde(default)]
        words: BTreeMap<String, Value>,
    }

    let raw: RawImport = serde_json::from_str(json)?;
    let data = ImportData {
        articles: store::readable_records(raw.articles, "import.articles"),
        words: store::readable_entries(raw.words, "import.words"),
    };
    debug!("admin.parse_import: articles={} words={}", data.articles.len(), data.words.len());
    Ok(data)
}

pub fn apply_import(
    store: &dyn KeyValueStore,
    library: &mut ArticleLibrary,
    dictionary: &mut Dictionary,
    data: ImportData,
) -> Result<ImportSummary> {
    let summary = ImportSummary {
        articles: library.append(data.articles),
        words: dictionary.merge_custom(data.words),
    };
    library.persist(store)?;
    dictionary.persist(store)?;
    info!(
        "admin.apply_import: articles={} words={}",
        summary.articles, summary.words
    );
    Ok(summary)
}

pub fn reset_all(store: &dyn KeyValueStore, library: &mut ArticleLibrary, dictionary: &mut Dictionary) -> Result<()> {
    library.clear();
    dictionary.clear_custom();
    library.persist(store)?;
    dictionary.persist(store)?;
    warn!("admin.reset_all: custom articles and words cleared");
    Ok(())
}
