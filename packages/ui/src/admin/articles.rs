use api::articles::ArticleDraft;
use api::dictionary::WordDraft;
use api::error::Error;
use api::keywords::{detect_keywords, strip_markers};
use api::types::{ArticleId, ArticleStatus, Language, Level};
use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;

use super::use_admin;
use crate::state::use_learning;
use crate::toast::Toasts;
use crate::Lang;

#[derive(Debug, Clone, PartialEq)]
enum Editing {
    New,
    Existing(ArticleId),
}

#[component]
pub(super) fn ArticlesTab() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let state = use_learning();
    let mut editing = use_signal(|| None::<Editing>);
    let mut draft = use_signal(|| ArticleDraft::empty(Utc::now().date_naive()));

    let articles = state.library.read().articles().to_vec();
    let selected = state.selected.read().clone();

    rsx! {
        div { class: "admin_section",
            div { class: "section_header",
                h2 { {crate::t(lang, "admin.articles.title")} " " span { class: "count_badge", "{articles.len()}" } }
                button {
                    class: "btn primary",
                    onclick: move |_| {
                        draft.set(ArticleDraft::empty(Utc::now().date_naive()));
                        editing.set(Some(Editing::New));
                    },
                    {crate::t(lang, "admin.articles.new")}
                }
            }

            if let Some(mode) = editing() {
                ArticleEditor { mode, draft, editing }
            }

            if articles.is_empty() {
                p { class: "hint", {crate::t(lang, "admin.articles.empty")} }
            }
            div { class: "admin_list",
                for article in articles {
                    div { key: "{article.id}", class: "admin_item",
                        div { class: "admin_item_main",
                            h4 {
                                "{article.title}"
                                if selected.as_ref() == Some(&article.id) {
                                    span { class: "badge badge_current", {crate::t(lang, "admin.articles.in_use")} }
                                }
                            }
                            div { class: "hint",
                                "{article.display_date()} · {article.language.label()} · "
                                {crate::t(lang, &format!("level.{}", article.level.code()))}
                                " · "
                                {crate::t(lang, &format!("status.{}", article.status.code()))}
                                " · {article.keywords.len()} "
                                {crate::t(lang, "admin.articles.keywords")}
                            }
                            p { class: "admin_preview", "{preview(&article.content)}" }
                        }
                        div { class: "admin_item_actions",
                            button {
                                class: "btn",
                                onclick: {
                                    let id = article.id.clone();
                                    let mut selected = state.selected;
                                    let toasts = toasts.clone();
                                    move |_| {
                                        selected.set(Some(id.clone()));
                                        toasts.success(crate::t(lang, "admin.articles.used"), None);
                                    }
                                },
                                {crate::t(lang, "admin.articles.use")}
                            }
                            button {
                                class: "btn",
                                onclick: {
                                    let article = article.clone();
                                    move |_| {
                                        draft.set(ArticleDraft::from_article(&article));
                                        editing.set(Some(Editing::Existing(article.id.clone())));
                                    }
                                },
                                {crate::t(lang, "common.edit")}
                            }
                            button {
                                class: "btn danger",
                                onclick: {
                                    let id = article.id.clone();
                                    let state = state.clone();
                                    let toasts = toasts.clone();
                                    move |_| {
                                        let id = id.clone();
                                        let state = state.clone();
                                        let toasts = toasts.clone();
                                        spawn(async move {
                                            if !crate::browser::confirm(&crate::t(lang, "admin.articles.confirm_delete")).await {
                                                return;
                                            }
                                            let mut library = state.library;
                                            library.with_mut(|l| l.delete(&id));
                                            if editing.peek().as_ref() == Some(&Editing::Existing(id.clone())) {
                                                editing.set(None);
                                            }
                                            let mut selected = state.selected;
                                            if selected.peek().as_ref() == Some(&id) {
                                                selected.set(None);
                                            }
                                            report(state.persist_library(), &toasts, lang, "admin.articles.deleted");
                                        });
                                    }
                                },
                                {crate::t(lang, "common.delete")}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ArticleEditor(
    mode: Editing,
    draft: Signal<ArticleDraft>,
    editing: Signal<Option<Editing>>,
) -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let state = use_learning();
    let admin = use_admin();
    let mut draft = draft;
    let mut editing = editing;

    let current = draft();
    let detected = detect_keywords(&current.content, &state.dictionary.read());
    let title_key = match mode {
        Editing::New => "admin.articles.editor_new",
        Editing::Existing(_) => "admin.articles.editor_edit",
    };

    let on_save = {
        let state = state.clone();
        let toasts = toasts.clone();
        let mode = mode.clone();
        move |_: MouseEvent| {
            let now = Utc::now();
            let mut library = state.library;
            let result = library.with_mut(|l| match &mode {
                Editing::New => l.create(draft(), now).map(|_| ()),
                Editing::Existing(id) => l.update(id, draft(), now),
            });
            match result {
                Ok(()) => {
                    report(state.persist_library(), &toasts, lang, "admin.articles.saved");
                    editing.set(None);
                }
                Err(Error::Validation(e)) => toasts.error(crate::t(lang, e.message_key()), None),
                Err(e) => toasts.error(crate::t(lang, "toast.storage_error"), Some(e.to_string())),
            }
        }
    };

    rsx! {
        div { class: "panel editor",
            h3 { {crate::t(lang, title_key)} }
            label { {crate::t(lang, "admin.articles.field_title")} }
            input {
                value: "{current.title}",
                oninput: move |e| draft.with_mut(|d| d.title = e.value()),
            }
            div { class: "editor_row",
                div {
                    label { {crate::t(lang, "admin.articles.field_date")} }
                    input {
                        r#type: "date",
                        value: "{current.date}",
                        oninput: move |e| {
                            if let Ok(date) = NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d") {
                                draft.with_mut(|d| d.date = date);
                            }
                        },
                    }
                }
                div {
                    label { {crate::t(lang, "admin.articles.field_language")} }
                    select {
                        value: "{current.language.code()}",
                        onchange: move |e| {
                            if let Some(l) = Language::from_code(&e.value()) {
                                draft.with_mut(|d| d.language = l);
                            }
                        },
                        for l in Language::ALL {
                            option { key: "{l.code()}", value: "{l.code()}", selected: l == current.language, "{l.label()}" }
                        }
                    }
                }
                div {
                    label { {crate::t(lang, "admin.articles.field_level")} }
                    select {
                        value: "{current.level.code()}",
                        onchange: move |e| {
                            if let Some(level) = Level::from_code(&e.value()) {
                                draft.with_mut(|d| d.level = level);
                            }
                        },
                        for level in Level::ALL {
                            option {
                                key: "{level.code()}",
                                value: "{level.code()}",
                                selected: level == current.level,
                                {crate::t(lang, &format!("level.{}", level.code()))}
                            }
                        }
                    }
                }
                div {
                    label { {crate::t(lang, "admin.articles.field_status")} }
                    select {
                        value: "{current.status.code()}",
                        onchange: move |e| {
                            let status = if e.value() == "draft" { ArticleStatus::Draft } else { ArticleStatus::Published };
                            draft.with_mut(|d| d.status = status);
                        },
                        for status in [ArticleStatus::Published, ArticleStatus::Draft] {
                            option {
                                key: "{status.code()}",
                                value: "{status.code()}",
                                selected: status == current.status,
                                {crate::t(lang, &format!("status.{}", status.code()))}
                            }
                        }
                    }
                }
            }
            label { {crate::t(lang, "admin.articles.field_summary")} }
            input {
                value: "{current.summary}",
                oninput: move |e| draft.with_mut(|d| d.summary = e.value()),
            }
            label { {crate::t(lang, "admin.articles.field_content")} }
            textarea {
                rows: 12,
                value: "{current.content}",
                placeholder: crate::t(lang, "admin.articles.content_ph"),
                oninput: move |e| draft.with_mut(|d| d.content = e.value()),
            }

            div { class: "detected_keywords",
                strong { {crate::t(lang, "admin.articles.detected")} " ({detected.len()})" }
                if detected.is_empty() {
                    p { class: "hint", {crate::t(lang, "admin.articles.no_keywords")} }
                }
                div { class: "chips",
                    for kw in detected {
                        button {
                            key: "{kw.keyword}",
                            class: if kw.has_translation { "chip chip_ok" } else { "chip chip_missing" },
                            title: if kw.has_translation { crate::t(lang, "admin.articles.chip_edit") } else { crate::t(lang, "admin.articles.chip_add") },
                            onclick: {
                                let state = state.clone();
                                let word = kw.keyword.clone();
                                move |_| {
                                    let existing = state.dictionary.read().lookup(&word).cloned();
                                    match existing {
                                        Some(entry) => admin.edit_word(&word, WordDraft::from_entry(&word, &entry), true),
                                        None => {
                                            let word = word.clone();
                                            spawn(async move {
                                                if crate::browser::confirm(&missing_word_question(lang, &word)).await {
                                                    admin.edit_word(&word, WordDraft::for_keyword(&word), false);
                                                }
                                            });
                                        }
                                    }
                                }
                            },
                            if kw.has_translation { "✓ " } else { "+ " }
                            "{kw.keyword}"
                        }
                    }
                }
            }

            div { class: "editor_actions",
                button { class: "btn primary", onclick: on_save, {crate::t(lang, "common.save")} }
                button {
                    class: "btn",
                    onclick: move |_| editing.set(None),
                    {crate::t(lang, "common.cancel")}
                }
            }
        }
    }
}

fn preview(content: &str) -> String {
    let plain = strip_markers(content);
    let mut out: String = plain.chars().take(140).collect();
    if plain.chars().count() > 140 {
        out.push('…');
    }
    out
}

fn missing_word_question(lang: Lang, word: &str) -> String {
    format!("« {} » {}", word, crate::t(lang, "admin.articles.missing_word"))
}

fn report(result: api::error::Result<()>, toasts: &Toasts, lang: Lang, ok_key: &str) {
    match result {
        Ok(()) => toasts.success(crate::t(lang, ok_key), None),
        Err(e) => toasts.error(crate::t(lang, "toast.storage_error"), Some(e.to_string())),
    }
}
