use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Custom word translations keyed by the keyword as it appears in content.
pub type WordMap = BTreeMap<String, WordEntry>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    It,
    Pt,
    Ca,
    Fr,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Es,
        Language::It,
        Language::Pt,
        Language::Ca,
        Language::Fr,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ca => "ca",
            Language::Fr => "fr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::It => "Italiano",
            Language::Pt => "Português",
            Language::Ca => "Català",
            Language::Fr => "Français",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Language::Es),
            "it" => Some(Language::It),
            "pt" => Some(Language::Pt),
            "ca" => Some(Language::Ca),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn code(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Level::Beginner),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Published,
    Draft,
}

impl ArticleStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ArticleStatus::Published => "published",
            ArticleStatus::Draft => "draft",
        }
    }
}

/// Article identifier.
///
/// Admin-created articles historically used a millisecond timestamp (a JSON
/// number) while synced ones use strings, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ArticleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => ArticleId(s),
            Raw::Int(n) => ArticleId(n.to_string()),
            Raw::Float(n) => ArticleId(format!("{n}")),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    #[serde(default, deserialize_with = "or_default")]
    pub language: Language,
    #[serde(default, deserialize_with = "or_default")]
    pub level: Level,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub status: ArticleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    /// Date as shown to readers (`dd/mm/yyyy`).
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// Reads `YYYY-MM-DD`, an RFC 3339 timestamp, or anything starting with a
/// `YYYY-MM-DD` prefix.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
        .or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

/// Blank, missing or malformed dates load as 1970-01-01 instead of
/// rejecting the whole article.
fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(parse_date).unwrap_or_default())
}

/// Unknown enum values fall back to the default variant.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(raw).unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(default)]
    pub es: String,
    #[serde(default)]
    pub it: String,
    #[serde(default)]
    pub pt: String,
    #[serde(default)]
    pub ca: String,
    #[serde(default)]
    pub fr: String,
    #[serde(default)]
    pub grammar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<Language>,
}

impl WordEntry {
    pub fn translation(&self, lang: Language) -> &str {
        match lang {
            Language::Es => &self.es,
            Language::It => &self.it,
            Language::Pt => &self.pt,
            Language::Ca => &self.ca,
            Language::Fr => &self.fr,
        }
    }

    pub fn translations(&self) -> impl Iterator<Item = (Language, &str)> + '_ {
        Language::ALL
            .into_iter()
            .map(move |lang| (lang, self.translation(lang)))
    }

    pub fn has_any_translation(&self) -> bool {
        self.translations().any(|(_, t)| !t.trim().is_empty())
    }

    /// Language the word belongs to; untagged entries are Spanish.
    pub fn language(&self) -> Language {
        self.primary_language.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedWord {
    pub id: i64,
    pub word: String,
    pub translations: WordEntry,
    #[serde(default)]
    pub grammar: String,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub language: Language,
}

impl SavedWord {
    pub fn display_date(&self) -> String {
        self.saved_at.format("%d/%m/%Y").to_string()
    }
}

/// Admin export file: `{articles, words, exportDate}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub articles: Vec<Article>,
    pub words: WordMap,
    pub export_date: DateTime<Utc>,
}

/// Content pushed from the server into local storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub words: WordMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub preferred_language: Language,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub total_points: u64,
    #[serde(default = "default_profile_level")]
    pub level: u32,
    #[serde(default)]
    pub last_activity_date: Option<NaiveDate>,
}

fn default_profile_level() -> u32 {
    1
}

/// Body of `GET /api/profile/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: BackendUser,
    pub profile: ProfileSnapshot,
}

/// Body of `POST /api/submit-quiz/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub article_id: ArticleId,
    /// Percentage of correct answers, 0 to 100.
    pub score: f64,
    pub points_earned: u32,
    /// Seconds.
    pub time_spent: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakInfo {
    pub current_streak: u32,
    pub streak_updated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSubmitResponse {
    #[serde(default)]
    pub success: bool,
    pub total_points: u64,
    #[serde(default)]
    pub quiz_completed: bool,
    #[serde(default)]
    pub streak_info: Option<StreakInfo>,
}
