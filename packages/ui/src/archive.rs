use api::archive::{find, language_counts, latest, listing, ArchiveFilter, ArchiveSort};
use api::articles::default_article;
use api::keywords::strip_markers;
use api::types::{Article, ArticleId, Language, Level};
use dioxus::prelude::*;

use crate::article::{ArticleView, TranslationPopup};
use crate::quiz::QuizPanel;
use crate::state::{use_learning, LearningState};

const ARCHIVE_CSS: Asset = asset!("/assets/styling/archive.css");

/// Custom articles plus the built-in one, unless a custom article replaced it.
fn archive_source(state: &LearningState) -> Vec<Article> {
    let mut articles = state.library.read().articles().to_vec();
    let builtin = default_article();
    if find(&articles, &builtin.id).is_none() {
        articles.push(builtin);
    }
    articles
}

#[component]
pub fn ArchivePage() -> Element {
    let lang = crate::use_lang()();
    let state = use_learning();
    let mut filter = use_signal(ArchiveFilter::default);

    let articles = archive_source(&state);
    let current = filter();
    let shown = listing(&articles, &current);
    let counts = language_counts(&articles);
    let newest = latest(&articles).map(|a| a.id.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: ARCHIVE_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {crate::t(lang, "archive.title")} " " span { class: "count_badge", "{shown.len()}" } }
            }

            div { class: "chips",
                for (language, count) in counts {
                    button {
                        key: "{language.code()}",
                        class: if current.language == Some(language) { "chip chip_ok" } else { "chip" },
                        onclick: move |_| filter.with_mut(|f| {
                            f.language = if f.language == Some(language) { None } else { Some(language) };
                        }),
                        "{language.label()} ({count})"
                    }
                }
            }

            div { class: "filters",
                input {
                    r#type: "search",
                    value: "{current.query}",
                    placeholder: crate::t(lang, "archive.search_ph"),
                    oninput: move |e| filter.with_mut(|f| f.query = e.value()),
                }
                select {
                    onchange: move |e| filter.with_mut(|f| f.language = Language::from_code(&e.value())),
                    option { value: "", selected: current.language.is_none(), {crate::t(lang, "filter.all_languages")} }
                    for l in Language::ALL {
                        option { key: "{l.code()}", value: "{l.code()}", selected: current.language == Some(l), "{l.label()}" }
                    }
                }
                select {
                    onchange: move |e| filter.with_mut(|f| f.level = Level::from_code(&e.value())),
                    option { value: "", selected: current.level.is_none(), {crate::t(lang, "filter.all_levels")} }
                    for level in Level::ALL {
                        option {
                            key: "{level.code()}",
                            value: "{level.code()}",
                            selected: current.level == Some(level),
                            {crate::t(lang, &format!("level.{}", level.code()))}
                        }
                    }
                }
                select {
                    onchange: move |e| filter.with_mut(|f| f.sort = ArchiveSort::from_code(&e.value())),
                    for sort in ArchiveSort::ALL {
                        option {
                            key: "{sort.code()}",
                            value: "{sort.code()}",
                            selected: current.sort == sort,
                            {crate::t(lang, &format!("archive.sort.{}", sort.code()))}
                        }
                    }
                }
            }

            if shown.is_empty() {
                p { class: "hint", {crate::t(lang, "archive.empty")} }
            }

            div { class: "archive_grid",
                for article in shown {
                    a {
                        key: "{article.id}",
                        class: "archive_card",
                        href: "/archive/{article.id}",
                        div { class: "article_meta",
                            span { class: "badge badge_level level_{article.level.code()}",
                                {crate::t(lang, &format!("level.{}", article.level.code()))}
                            }
                            span { class: "badge badge_lang", "{article.language.label()}" }
                            span { class: "article_date", "{article.display_date()}" }
                            if newest.as_ref() == Some(&article.id) {
                                span { class: "badge badge_current", {crate::t(lang, "archive.latest")} }
                            }
                        }
                        h3 { "{article.title}" }
                        p { class: "hint", "{card_summary(article)}" }
                        span { class: "hint", "{article.keywords.len()} " {crate::t(lang, "admin.articles.keywords")} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ArchiveReadPage(id: String) -> Element {
    let lang = crate::use_lang()();
    let state = use_learning();
    let articles = archive_source(&state);
    let article = find(&articles, &ArticleId::new(id)).cloned();
    let custom_words = state.dictionary.read().custom().len();

    rsx! {
        document::Link { rel: "stylesheet", href: ARCHIVE_CSS }
        div { class: "page",
            a { class: "btn", href: "/archive", {crate::t(lang, "archive.back")} }
            match article {
                None => rsx! {
                    div { class: "empty_state",
                        p { {crate::t(lang, "archive.not_found")} }
                    }
                },
                Some(article) => rsx! {
                    ArticleView { article: article.clone() }
                    QuizPanel { key: "{article.id}-{custom_words}", article }
                },
            }
        }
        TranslationPopup {}
    }
}

fn card_summary(article: &Article) -> String {
    if !article.summary.trim().is_empty() {
        return article.summary.clone();
    }
    let plain = strip_markers(&article.content);
    let mut out: String = plain.chars().take(160).collect();
    if plain.chars().count() > 160 {
        out.push('…');
    }
    out
}
