//! Archive listing over published articles.

use crate::keywords::strip_markers;
use crate::types::{Article, ArticleId, Language, Level};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArchiveSort {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl ArchiveSort {
    pub const ALL: [ArchiveSort; 3] = [ArchiveSort::Newest, ArchiveSort::Oldest, ArchiveSort::Title];

    pub fn code(&self) -> &'static str {
        match self {
            ArchiveSort::Newest => "newest",
            ArchiveSort::Oldest => "oldest",
            ArchiveSort::Title => "title",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "oldest" => ArchiveSort::Oldest,
            "title" => ArchiveSort::Title,
            _ => ArchiveSort::Newest,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveFilter {
    pub language: Option<Language>,
    pub level: Option<Level>,
    pub query: String,
    pub sort: ArchiveSort,
}

impl ArchiveFilter {
    pub fn matches(&self, article: &Article) -> bool {
        if !article.is_published() {
            return false;
        }
        if self.language.is_some_and(|lang| article.language != lang) {
            return false;
        }
        if self.level.is_some_and(|level| article.level != level) {
            return false;
        }
        let needle = self.query.trim().to_lowercase();
        needle.is_empty()
            || article.title.to_lowercase().contains(&needle)
            || article.summary.to_lowercase().contains(&needle)
            || strip_markers(&article.content).to_lowercase().contains(&needle)
    }
}

pub fn listing<'a>(articles: &'a [Article], filter: &ArchiveFilter) -> Vec<&'a Article> {
    let mut out: Vec<&Article> = articles.iter().filter(|a| filter.matches(a)).collect();
    match filter.sort {
        ArchiveSort::Newest => out.sort_by(|a, b| b.date.cmp(&a.date)),
        ArchiveSort::Oldest => out.sort_by(|a, b| a.date.cmp(&b.date)),
        ArchiveSort::Title => out.sort_by_key(|a| a.title.to_lowercase()),
    }
    out
}

pub fn find<'a>(articles: &'a [Article], id: &ArticleId) -> Option<&'a Article> {
    articles.iter().find(|a| &a.id == id)
}

/// Featured published article, else the newest published one.
pub fn latest(articles: &[Article]) -> Option<&Article> {
    let published = articles.iter().filter(|a| a.is_published());
    published
        .clone()
        .find(|a| a.is_featured)
        .or_else(|| published.max_by_key(|a| a.date))
}

pub fn language_counts(articles: &[Article]) -> BTreeMap<Language, usize> {
    let mut counts = BTreeMap::new();
    for article in articles.iter().filter(|a| a.is_published()) {
        *counts.entry(article.language).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::default_article;
    use crate::types::ArticleStatus;
    use chrono::NaiveDate;

    fn article(id: &str, title: &str, lang: Language, level: Level, day: u32) -> Article {
        Article {
            id: id.into(),
            title: title.into(),
            content: format!("Texto sobre [{}]", title.to_lowercase()),
            language: lang,
            level,
            date: NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
            summary: String::new(),
            keywords: vec![],
            status: ArticleStatus::Published,
            created_at: None,
            updated_at: None,
            is_featured: false,
        }
    }

    fn sample() -> Vec<Article> {
        let mut draft = article("4", "Borrador", Language::Es, Level::Beginner, 9);
        draft.status = ArticleStatus::Draft;
        vec![
            article("1", "Mercato", Language::It, Level::Beginner, 1),
            article("2", "Economía", Language::Es, Level::Advanced, 5),
            article("3", "Abertura", Language::Pt, Level::Intermediate, 3),
            draft,
        ]
    }

    fn ids(list: Vec<&Article>) -> Vec<&str> {
        list.into_iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn drafts_are_hidden_and_newest_first() {
        let articles = sample();
        assert_eq!(ids(listing(&articles, &ArchiveFilter::default())), vec!["2", "3", "1"]);
    }

    #[test]
    fn sort_orders() {
        let articles = sample();
        let mut filter = ArchiveFilter {
            sort: ArchiveSort::Oldest,
            ..ArchiveFilter::default()
        };
        assert_eq!(ids(listing(&articles, &filter)), vec!["1", "3", "2"]);
        filter.sort = ArchiveSort::Title;
        assert_eq!(ids(listing(&articles, &filter)), vec!["3", "2", "1"]);
        assert_eq!(ArchiveSort::from_code("title"), ArchiveSort::Title);
        assert_eq!(ArchiveSort::from_code("bogus"), ArchiveSort::Newest);
    }

    #[test]
    fn language_level_and_query_filters() {
        let articles = sample();
        let by_lang = ArchiveFilter {
            language: Some(Language::It),
            ..ArchiveFilter::default()
        };
        assert_eq!(ids(listing(&articles, &by_lang)), vec!["1"]);

        let by_level = ArchiveFilter {
            level: Some(Level::Beginner),
            ..ArchiveFilter::default()
        };
        assert_eq!(ids(listing(&articles, &by_level)), vec!["1"]);

        // Matches stripped content, not the bracketed form.
        let by_query = ArchiveFilter {
            query: "sobre ECONOMÍA".into(),
            ..ArchiveFilter::default()
        };
        assert_eq!(ids(listing(&articles, &by_query)), vec!["2"]);
    }

    #[test]
    fn latest_prefers_featured() {
        let mut articles = sample();
        assert_eq!(latest(&articles).unwrap().id.as_str(), "2");
        articles[0].is_featured = true;
        assert_eq!(latest(&articles).unwrap().id.as_str(), "1");
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn counts_published_per_language() {
        let mut articles = sample();
        articles.push(default_article());
        let counts = language_counts(&articles);
        assert_eq!(counts.get(&Language::Es), Some(&2));
        assert_eq!(counts.get(&Language::Fr), None);
        assert!(find(&articles, &"3".into()).is_some());
    }
}
