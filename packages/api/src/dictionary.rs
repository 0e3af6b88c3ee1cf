//! Keyword translation dictionary: built-in seed words plus custom words
//! authored in the admin panel.

use crate::error::{Result, ValidationError};
use crate::store::{self, keys, KeyValueStore};
use crate::types::{Language, Level, WordEntry, WordMap};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    seed: WordMap,
    custom: WordMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryRow<'a> {
    pub word: &'a str,
    pub entry: &'a WordEntry,
    pub is_custom: bool,
}

/// Word editor form contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordDraft {
    pub word: String,
    pub es: String,
    pub it: String,
    pub pt: String,
    pub ca: String,
    pub fr: String,
    pub grammar: String,
}

impl WordDraft {
    pub fn for_keyword(word: &str) -> Self {
        Self {
            word: word.to_string(),
            ..Self::default()
        }
    }

    pub fn from_entry(word: &str, entry: &WordEntry) -> Self {
        Self {
            word: word.to_string(),
            es: entry.es.clone(),
            it: entry.it.clone(),
            pt: entry.pt.clone(),
            ca: entry.ca.clone(),
            fr: entry.fr.clone(),
            grammar: entry.grammar.clone(),
        }
    }

    pub fn translation_mut(&mut self, lang: Language) -> &mut String {
        match lang {
            Language::Es => &mut self.es,
            Language::It => &mut self.it,
            Language::Pt => &mut self.pt,
            Language::Ca => &mut self.ca,
            Language::Fr => &mut self.fr,
        }
    }

    pub fn translation(&self, lang: Language) -> &str {
        match lang {
            Language::Es => &self.es,
            Language::It => &self.it,
            Language::Pt => &self.pt,
            Language::Ca => &self.ca,
            Language::Fr => &self.fr,
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new(WordMap::new())
    }
}

impl Dictionary {
    pub fn new(custom: WordMap) -> Self {
        Self {
            seed: seed_words(),
            custom,
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        let custom: WordMap = store::load_record_map(store, keys::CUSTOM_WORDS);
        debug!("dictionary.load: custom={}", custom.len());
        Self::new(custom)
    }

    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<()> {
        store::save_json(store, keys::CUSTOM_WORDS, &self.custom)
    }

    /// Custom entries shadow seed entries with the same key.
    pub fn lookup(&self, word: &str) -> Option<&WordEntry> {
        self.custom.get(word).or_else(|| self.seed.get(word))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    pub fn is_custom(&self, word: &str) -> bool {
        self.custom.contains_key(word)
    }

    pub fn custom(&self) -> &WordMap {
        &self.custom
    }

    pub fn len(&self) -> usize {
        self.seed.len() + self.custom.keys().filter(|k| !self.seed.contains_key(*k)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate and store a custom word. Returns the stored key.
    pub fn save_word(&mut self, draft: WordDraft) -> Result<String> {
        let word = draft.word.trim().to_string();
        if word.is_empty() {
            return Err(ValidationError::WordRequired.into());
        }

        let entry = WordEntry {
            es: draft.es.trim().to_string(),
            it: draft.it.trim().to_string(),
            pt: draft.pt.trim().to_string(),
            ca: draft.ca.trim().to_string(),
            fr: draft.fr.trim().to_string(),
            grammar: draft.grammar.trim().to_string(),
            ..self.lookup(&word).cloned().unwrap_or_default()
        };
        if !entry.has_any_translation() {
            return Err(ValidationError::TranslationRequired.into());
        }

        info!("dictionary.save_word: word={}", word);
        self.custom.insert(word.clone(), entry);
        Ok(word)
    }

    /// Only custom words can be deleted; seed words always remain.
    pub fn delete_word(&mut self, word: &str) -> bool {
        let removed = self.custom.remove(word).is_some();
        if removed {
            info!("dictionary.delete_word: word={}", word);
        }
        removed
    }

    /// Merge imported words over the custom map. Returns how many were merged.
    pub fn merge_custom(&mut self, words: WordMap) -> usize {
        let count = words.len();
        self.custom.extend(words);
        count
    }

    pub fn replace_custom(&mut self, words: WordMap) {
        self.custom = words;
    }

    pub fn clear_custom(&mut self) {
        self.custom.clear();
    }

    /// Merged listing sorted by word, optionally narrowed by a search query
    /// (word or any translation) and by the word's language.
    pub fn rows(&self, query: &str, language: Option<Language>) -> Vec<DictionaryRow<'_>> {
        let needle = query.trim().to_lowercase();
        let mut words: Vec<&String> = self.seed.keys().chain(self.custom.keys()).collect();
        words.sort();
        words.dedup();

        words
            .into_iter()
            .filter_map(|word| {
                let entry = self.lookup(word)?;
                Some(DictionaryRow {
                    word: word.as_str(),
                    entry,
                    is_custom: self.is_custom(word),
                })
            })
            .filter(|row| language.map_or(true, |lang| row.entry.language() == lang))
            .filter(|row| needle.is_empty() || row_matches(row, &needle))
            .collect()
    }

    /// Distinct non-empty translations into `lang`, sorted.
    pub fn translations_in(&self, lang: Language) -> Vec<String> {
        let mut out: Vec<String> = self
            .rows("", None)
            .into_iter()
            .map(|row| row.entry.translation(lang).trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        out.sort();
        out.dedup();
        out
    }
}

fn row_matches(row: &DictionaryRow<'_>, needle: &str) -> bool {
    row.word.to_lowercase().contains(needle)
        || row
            .entry
            .translations()
            .any(|(_, t)| t.to_lowercase().contains(needle))
}

/// `"ES: crisis • FR: crise"`, skipping empty translations.
pub fn summary_line(entry: &WordEntry) -> String {
    entry
        .translations()
        .filter(|(_, t)| !t.trim().is_empty())
        .map(|(lang, t)| format!("{}: {}", lang.code().to_uppercase(), t))
        .collect::<Vec<_>>()
        .join(" • ")
}

fn word(es: &str, it: &str, pt: &str, ca: &str, fr: &str, grammar: &str) -> WordEntry {
    WordEntry {
        es: es.to_string(),
        it: it.to_string(),
        pt: pt.to_string(),
        ca: ca.to_string(),
        fr: fr.to_string(),
        grammar: grammar.to_string(),
        ..WordEntry::default()
    }
}

fn synced(mut entry: WordEntry, example: &str, level: Level) -> WordEntry {
    entry.usage_example = Some(example.to_string());
    entry.difficulty_level = Some(level);
    entry.primary_language = Some(Language::Es);
    entry
}

/// Built-in words, available even with empty storage.
pub fn seed_words() -> WordMap {
    let mut words = WordMap::new();
    words.insert(
        "engañan".to_string(),
        word(
            "engañan (verbo: engañar - deceive)",
            "ingannano (verbo: ingannare)",
            "enganam (verbo: enganar)",
            "enganyen (verb: enganyar)",
            "trompent (verbe: tromper)",
            "Tercera persona del plural del presente de indicativo del verbo 'engañar'. Expresa una acción habitual o universal.",
        ),
    );
    words.insert(
        "devastadora".to_string(),
        word(
            "devastadora (adjetivo femenino)",
            "devastante (aggettivo)",
            "devastadora (adjetivo feminino)",
            "devastadora (adjectiu femení)",
            "dévastatrice (adjectif féminin)",
            "Adjetivo calificativo en género femenino que indica algo que causa gran destrucción o daño.",
        ),
    );
    words.insert(
        "controversia".to_string(),
        synced(
            word(
                "controversia",
                "controversia",
                "controvérsia",
                "controvèrsia",
                "controverse",
                "Sustantivo femenino que designa una discusión o debate público.",
            ),
            "El tema generó una gran controversia en los medios.",
            Level::Advanced,
        ),
    );
    words.insert(
        "crisis".to_string(),
        synced(
            word(
                "crisis",
                "crisi",
                "crise",
                "crisi",
                "crise",
                "Sustantivo femenino invariable que designa una situación grave o difícil.",
            ),
            "La crisis humanitaria requiere una respuesta inmediata.",
            Level::Intermediate,
        ),
    );
    words.insert(
        "humanitaria".to_string(),
        synced(
            word(
                "humanitaria",
                "umanitaria",
                "humanitária",
                "humanitària",
                "humanitaire",
                "Adjetivo femenino singular que se refiere a la ayuda y protección de personas.",
            ),
            "La ayuda humanitaria es esencial en zonas de conflicto.",
            Level::Intermediate,
        ),
    );
    words.insert(
        "lanzamientos".to_string(),
        synced(
            word(
                "lanzamientos",
                "lanci",
                "lançamentos",
                "llançaments",
                "largages",
                "Sustantivo masculino plural derivado del verbo \"lanzar\".",
            ),
            "Los lanzamientos aéreos son una forma de entregar suministros.",
            Level::Advanced,
        ),
    );
    words.insert(
        "aéreos".to_string(),
        synced(
            word(
                "aéreos",
                "aerei",
                "aéreos",
                "aeris",
                "aériens",
                "Adjetivo masculino plural que se refiere a todo lo relacionado con el aire o la aviación.",
            ),
            "Los ataques aéreos causaron gran destrucción.",
            Level::Intermediate,
        ),
    );
    words
}
