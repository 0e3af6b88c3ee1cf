use api::keywords::{paragraph_segments, Segment};
use api::types::{Article, Language};
use dioxus::prelude::*;

use crate::state::use_learning;

const ARTICLE_CSS: Asset = asset!("/assets/styling/article.css");

#[component]
pub fn ArticleView(article: Article) -> Element {
    let lang = crate::use_lang()();
    let paragraphs = paragraph_segments(&article.content);

    rsx! {
        document::Link { rel: "stylesheet", href: ARTICLE_CSS }
        article { class: "article",
            div { class: "article_meta",
                span { class: "badge badge_level level_{article.level.code()}",
                    {crate::t(lang, &format!("level.{}", article.level.code()))}
                }
                span { class: "badge badge_lang", "{article.language.label()}" }
                span { class: "article_date", "{article.display_date()}" }
            }
            h1 { class: "article_title", "{article.title}" }
            if !article.summary.trim().is_empty() {
                p { class: "article_summary", "{article.summary}" }
            }
            div { class: "article_body",
                for (i, paragraph) in paragraphs.into_iter().enumerate() {
                    p { key: "{i}",
                        for segment in paragraph {
                            match segment {
                                Segment::Text(text) => rsx! { "{text}" },
                                Segment::Keyword(word) => rsx! { KeywordSpan { word: word.to_string() } },
                            }
                        }
                    }
                }
            }
            p { class: "hint", {crate::t(lang, "article.click_hint")} }
        }
    }
}

#[component]
pub fn KeywordSpan(word: String) -> Element {
    let state = use_learning();
    let known = state.dictionary.read().contains(&word);
    let mut popup = state.popup;
    let class = if known { "keyword" } else { "keyword keyword_missing" };

    rsx! {
        span {
            class: "{class}",
            role: "button",
            tabindex: 0,
            onclick: {
                let word = word.clone();
                move |_| popup.set(Some(word.clone()))
            },
            "{word}"
        }
    }
}

/// Popup for the keyword in `LearningState::popup`. Closes on the close
/// button, a backdrop click or Escape.
#[component]
pub fn TranslationPopup() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let state = use_learning();
    let mut popup = state.popup;

    let Some(word) = popup() else {
        return rsx! {};
    };
    let entry = state.dictionary.read().lookup(&word).cloned();
    let already_saved = state.saved.read().contains(&word);

    rsx! {
        div {
            class: "popup_backdrop",
            tabindex: 0,
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onclick: move |_| popup.set(None),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    popup.set(None);
                }
            },
            div {
                class: "popup",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),
                div { class: "popup_header",
                    h3 { class: "popup_word", "{capitalize(&word)}" }
                    button {
                        class: "popup_close",
                        "aria-label": crate::t(lang, "common.close"),
                        onclick: move |_| popup.set(None),
                        "×"
                    }
                }
                match entry {
                    None => rsx! { p { class: "hint", {crate::t(lang, "popup.no_translation")} } },
                    Some(entry) => rsx! {
                        div { class: "translations",
                            for code in Language::ALL {
                                div { key: "{code.code()}", class: "translation_row",
                                    span { class: "translation_lang", "{code.label()}" }
                                    span { class: "translation_text",
                                        if entry.translation(code).is_empty() {
                                            "—"
                                        } else {
                                            "{entry.translation(code)}"
                                        }
                                    }
                                }
                            }
                        }
                        if !entry.grammar.trim().is_empty() {
                            div { class: "grammar_note",
                                strong { {crate::t(lang, "popup.grammar")} }
                                p { "{entry.grammar}" }
                            }
                        }
                        if let Some(example) = &entry.usage_example {
                            p { class: "usage_example", "« {example} »" }
                        }
                        button {
                            class: if already_saved { "btn saved" } else { "btn primary" },
                            disabled: already_saved,
                            onclick: {
                                let word = word.clone();
                                let state = state.clone();
                                move |_| match state.save_word(&word) {
                                    Ok(true) => toasts.success(
                                        crate::t(lang, "toast.word_saved"),
                                        Some(word.clone()),
                                    ),
                                    Ok(false) => toasts.info(crate::t(lang, "popup.already_saved"), None),
                                    Err(e) => toasts.error(
                                        crate::t(lang, "toast.storage_error"),
                                        Some(e.to_string()),
                                    ),
                                }
                            },
                            if already_saved {
                                {crate::t(lang, "popup.already_saved")}
                            } else {
                                {crate::t(lang, "popup.save")}
                            }
                        }
                    },
                }
            }
        }
    }
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_accented_words() {
        assert_eq!(capitalize("aéreos"), "Aéreos");
        assert_eq!(capitalize("écoles"), "Écoles");
        assert_eq!(capitalize(""), "");
    }
}
