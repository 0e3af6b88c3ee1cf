//! Custom articles authored in the admin panel.

use crate::error::{Error, Result, ValidationError};
use crate::keywords::unique_keywords;
use crate::store::{self, keys, KeyValueStore};
use crate::types::{Article, ArticleId, ArticleStatus, Language, Level};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

/// Id of the article shown when nothing has been authored or synced.
pub const DEFAULT_ARTICLE_ID: &str = "2";

/// Article editor form contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub date: NaiveDate,
    pub language: Language,
    pub level: Level,
    pub status: ArticleStatus,
}

impl ArticleDraft {
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            summary: String::new(),
            date: today,
            language: Language::default(),
            level: Level::default(),
            status: ArticleStatus::default(),
        }
    }

    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            summary: article.summary.clone(),
            date: article.date,
            language: article.language,
            level: article.level,
            status: article.status,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired.into());
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::ContentRequired.into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleLibrary {
    articles: Vec<Article>,
}

impl ArticleLibrary {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        let articles: Vec<Article> = store::load_records(store, keys::CUSTOM_ARTICLES);
        debug!("articles.load: count={}", articles.len());
        Self { articles }
    }

    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<()> {
        store::save_json(store, keys::CUSTOM_ARTICLES, &self.articles)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| &a.id == id)
    }

    /// First stored article, or the built-in one when storage is empty.
    pub fn current(&self) -> Article {
        self.articles.first().cloned().unwrap_or_else(default_article)
    }

    pub fn create(&mut self, draft: ArticleDraft, now: DateTime<Utc>) -> Result<ArticleId> {
        draft.validate()?;

        let mut millis = now.timestamp_millis();
        while self.get(&ArticleId::new(millis.to_string())).is_some() {
            millis += 1;
        }
        let id = ArticleId::new(millis.to_string());

        let article = Article {
            id: id.clone(),
            keywords: unique_keywords(&draft.content),
            title: draft.title.trim().to_string(),
            content: draft.content.trim().to_string(),
            summary: draft.summary.trim().to_string(),
            language: draft.language,
            level: draft.level,
            date: draft.date,
            status: draft.status,
            created_at: Some(now),
            updated_at: Some(now),
            is_featured: false,
        };
        info!("articles.create: id={} keywords={}", id, article.keywords.len());
        self.articles.insert(0, article);
        Ok(id)
    }

    pub fn update(&mut self, id: &ArticleId, draft: ArticleDraft, now: DateTime<Utc>) -> Result<()> {
        draft.validate()?;
        let article = self
            .articles
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| Error::NotFound {
                kind: "article",
                id: id.to_string(),
            })?;

        article.keywords = unique_keywords(&draft.content);
        article.title = draft.title.trim().to_string();
        article.content = draft.content.trim().to_string();
        article.summary = draft.summary.trim().to_string();
        article.language = draft.language;
        article.level = draft.level;
        article.date = draft.date;
        article.status = draft.status;
        article.updated_at = Some(now);
        info!("articles.update: id={}", id);
        Ok(())
    }

    pub fn delete(&mut self, id: &ArticleId) -> bool {
        let before = self.articles.len();
        self.articles.retain(|a| &a.id != id);
        let removed = self.articles.len() != before;
        if removed {
            info!("articles.delete: id={}", id);
        }
        removed
    }

    /// Imported articles go after the existing ones.
    pub fn append(&mut self, imported: Vec<Article>) -> usize {
        let count = imported.len();
        self.articles.extend(imported);
        count
    }

    pub fn replace(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    pub fn clear(&mut self) {
        self.articles.clear();
    }
}

pub fn default_article() -> Article {
    let content = "La [crisis] [humanitaria] en Gaza ha alcanzado proporciones alarmantes, y los [lanzamientos] [aéreos] de ayuda se han convertido en una medida desesperada para proporcionar asistencia a la población civil atrapada en el conflicto.\n\n\
Sin embargo, esta forma de entrega de suministros ha generado una gran [controversia] entre organizaciones humanitarias y expertos en ayuda internacional. Mientras algunos argumentan que es la única forma viable de hacer llegar alimentos y medicinas a las zonas más afectadas, otros critican que los lanzamientos aéreos son imprecisos y potencialmente peligrosos.\n\n\
Los defensores de esta estrategia sostienen que, ante la imposibilidad de acceso terrestre seguro, los lanzamientos aéreos representan una línea de vida crucial para miles de familias. No obstante, los críticos señalan que esta metodología puede causar más daño que beneficio, ya que los suministros pueden caer en zonas inadecuadas o incluso lastimar a civiles.";

    let created = NaiveDate::from_ymd_opt(2025, 9, 1)
        .and_then(|d| d.and_hms_milli_opt(21, 51, 14, 613))
        .map(|dt| dt.and_utc());

    Article {
        id: ArticleId::from(DEFAULT_ARTICLE_ID),
        title: "Crisis humanitaria en Gaza: Los lanzamientos aéreos de ayuda generan controversia".to_string(),
        keywords: unique_keywords(content),
        content: content.to_string(),
        language: Language::Es,
        level: Level::Advanced,
        date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap_or_default(),
        summary: "Los lanzamientos aéreos de ayuda sobre Gaza dividen a expertos y organizaciones humanitarias.".to_string(),
        status: ArticleStatus::Published,
        created_at: created,
        updated_at: created,
        is_featured: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 3, 8, 30, 0).unwrap()
    }

    fn draft(title: &str, content: &str) -> ArticleDraft {
        ArticleDraft {
            title: title.to_string(),
            content: content.to_string(),
            ..ArticleDraft::empty(now().date_naive())
        }
    }

    #[test]
    fn default_article_keywords() {
        let article = default_article();
        assert_eq!(
            article.keywords,
            vec!["crisis", "humanitaria", "lanzamientos", "aéreos", "controversia"]
        );
        assert!(article.is_published());
        assert_eq!(article.display_date(), "01/09/2025");
    }

    #[test]
    fn empty_library_falls_back_to_default() {
        let lib = ArticleLibrary::load(&MemoryStore::new());
        assert!(lib.is_empty());
        assert_eq!(lib.current().id.as_str(), DEFAULT_ARTICLE_ID);
    }

    #[test]
    fn create_requires_title_and_content() {
        let mut lib = ArticleLibrary::default();
        let err = lib.create(draft("  ", "texto"), now()).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::TitleRequired)));
        let err = lib.create(draft("Título", "\n"), now()).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::ContentRequired)));
        assert!(lib.is_empty());
    }

    #[test]
    fn create_prepends_and_ids_are_unique() {
        let mut lib = ArticleLibrary::default();
        let first = lib.create(draft("Uno", "[a] b"), now()).unwrap();
        let second = lib.create(draft("Dos", "[c] [c]"), now()).unwrap();
        assert_ne!(first, second);
        assert_eq!(first.as_str(), now().timestamp_millis().to_string());
        assert_eq!(lib.current().title, "Dos");
        assert_eq!(lib.get(&second).unwrap().keywords, vec!["c"]);
        assert_eq!(lib.get(&first).unwrap().created_at, Some(now()));
    }

    #[test]
    fn update_keeps_created_at() {
        let mut lib = ArticleLibrary::default();
        let id = lib.create(draft("Uno", "[a]"), now()).unwrap();
        let later = now() + Duration::minutes(5);
        lib.update(&id, draft("Uno bis", "[b] [d]"), later).unwrap();

        let article = lib.get(&id).unwrap();
        assert_eq!(article.title, "Uno bis");
        assert_eq!(article.keywords, vec!["b", "d"]);
        assert_eq!(article.created_at, Some(now()));
        assert_eq!(article.updated_at, Some(later));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut lib = ArticleLibrary::default();
        let err = lib
            .update(&ArticleId::from("nope"), draft("x", "y"), now())
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: "article", .. }));
    }

    #[test]
    fn delete_and_persist() {
        let store = MemoryStore::new();
        let mut lib = ArticleLibrary::load(&store);
        let id = lib.create(draft("Uno", "x"), now()).unwrap();
        lib.create(draft("Dos", "y"), now()).unwrap();
        assert!(lib.delete(&id));
        assert!(!lib.delete(&id));
        lib.persist(&store).unwrap();

        let reloaded = ArticleLibrary::load(&store);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.articles()[0].title, "Dos");
    }

    #[test]
    fn one_bad_record_does_not_hide_its_siblings() {
        let store = MemoryStore::new();
        store
            .set(
                keys::CUSTOM_ARTICLES,
                r#"[{"id":1,"title":"Bueno","content":"[a]","date":"2025-09-01"},
                    {"id":2,"title":"Sin fecha","content":"[b]","date":""},
                    {"id":3,"content":"sin título"}]"#,
            )
            .unwrap();

        let mut lib = ArticleLibrary::load(&store);
        let titles: Vec<_> = lib.articles().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Bueno", "Sin fecha"]);

        lib.create(draft("Nuevo", "[c]"), now()).unwrap();
        lib.persist(&store).unwrap();
        let reloaded = ArticleLibrary::load(&store);
        let titles: Vec<_> = reloaded.articles().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Nuevo", "Bueno", "Sin fecha"]);
    }

    #[test]
    fn append_keeps_existing_first() {
        let mut lib = ArticleLibrary::default();
        lib.create(draft("Local", "x"), now()).unwrap();
        assert_eq!(lib.append(vec![default_article()]), 1);
        assert_eq!(lib.articles()[0].title, "Local");
        assert_eq!(lib.articles()[1].id.as_str(), DEFAULT_ARTICLE_ID);
    }
}
