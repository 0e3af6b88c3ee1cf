use api::dictionary::{summary_line, WordDraft};
use api::error::Error;
use api::types::Language;
use dioxus::prelude::*;

use super::{use_admin, WordEditor};
use crate::state::use_learning;

#[component]
pub(super) fn WordsTab() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let state = use_learning();
    let admin = use_admin();
    let mut query = use_signal(String::new);
    let mut language = use_signal(|| None::<Language>);

    let dictionary = state.dictionary.read().clone();
    let rows = dictionary.rows(&query(), language());
    let custom_count = dictionary.custom().len();

    rsx! {
        div { class: "admin_section",
            div { class: "section_header",
                h2 {
                    {crate::t(lang, "admin.words.title")}
                    " "
                    span { class: "count_badge", "{dictionary.len()}" }
                    span { class: "hint", " ({custom_count} " {crate::t(lang, "admin.words.custom")} ")" }
                }
                button {
                    class: "btn primary",
                    onclick: move |_| admin.edit_word("", WordDraft::default(), false),
                    {crate::t(lang, "admin.words.new")}
                }
            }

            if admin.word_editor.read().is_some() {
                WordEditorPanel {}
            }

            div { class: "filters",
                input {
                    r#type: "search",
                    value: "{query}",
                    placeholder: crate::t(lang, "admin.words.search_ph"),
                    oninput: move |e| query.set(e.value()),
                }
                select {
                    onchange: move |e| language.set(Language::from_code(&e.value())),
                    option { value: "", selected: language().is_none(), {crate::t(lang, "filter.all_languages")} }
                    for l in Language::ALL {
                        option { key: "{l.code()}", value: "{l.code()}", selected: language() == Some(l), "{l.label()}" }
                    }
                }
            }

            if rows.is_empty() {
                p { class: "hint", {crate::t(lang, "admin.words.empty")} }
            }
            div { class: "admin_list",
                for row in rows {
                    div { key: "{row.word}", class: "admin_item",
                        div { class: "admin_item_main",
                            h4 {
                                "{row.word}"
                                span { class: if row.is_custom { "badge badge_custom" } else { "badge badge_seed" },
                                    if row.is_custom {
                                        {crate::t(lang, "admin.words.badge_custom")}
                                    } else {
                                        {crate::t(lang, "admin.words.badge_seed")}
                                    }
                                }
                            }
                            p { class: "hint", "{summary_line(row.entry)}" }
                        }
                        div { class: "admin_item_actions",
                            button {
                                class: "btn",
                                onclick: {
                                    let word = row.word.to_string();
                                    let draft = WordDraft::from_entry(row.word, row.entry);
                                    move |_| admin.edit_word(&word, draft.clone(), true)
                                },
                                {crate::t(lang, "common.edit")}
                            }
                            if row.is_custom {
                                button {
                                    class: "btn danger",
                                    onclick: {
                                        let word = row.word.to_string();
                                        let state = state.clone();
                                        let toasts = toasts.clone();
                                        move |_| {
                                            let word = word.clone();
                                            let state = state.clone();
                                            let toasts = toasts.clone();
                                            spawn(async move {
                                                let question = format!("{} « {} » ?", crate::t(lang, "admin.words.confirm_delete"), word);
                                                if !crate::browser::confirm(&question).await {
                                                    return;
                                                }
                                                let mut dictionary = state.dictionary;
                                                dictionary.with_mut(|d| d.delete_word(&word));
                                                match state.persist_dictionary() {
                                                    Ok(()) => toasts.success(crate::t(lang, "admin.words.deleted"), Some(word)),
                                                    Err(e) => toasts.error(crate::t(lang, "toast.storage_error"), Some(e.to_string())),
                                                }
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
}

#[component]
fn WordEditorPanel() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let state = use_learning();
    let admin = use_admin();
    let mut editor = admin.word_editor;

    let Some(WordEditor { original, draft }) = editor() else {
        return rsx! {};
    };
    let title_key = if original.is_some() {
        "admin.words.editor_edit"
    } else {
        "admin.words.editor_new"
    };

    let on_save = {
        let state = state.clone();
        let toasts = toasts.clone();
        let original = original.clone();
        move |_: MouseEvent| {
            let Some(current) = editor().map(|e| e.draft) else {
                return;
            };
            let mut dictionary = state.dictionary;
            let result = dictionary.with_mut(|d| {
                let saved = d.save_word(current)?;
                // A renamed custom word drops its old key.
                if let Some(old) = &original {
                    if *old != saved {
                        d.delete_word(old);
                    }
                }
                Ok::<_, Error>(saved)
            });
            match result.and_then(|word| state.persist_dictionary().map(|()| word)) {
                Ok(word) => {
                    toasts.success(crate::t(lang, "admin.words.saved"), Some(word));
                    editor.set(None);
                }
                Err(Error::Validation(e)) => toasts.error(crate::t(lang, e.message_key()), None),
                Err(e) => toasts.error(crate::t(lang, "toast.storage_error"), Some(e.to_string())),
            }
        }
    };

    rsx! {
        div { class: "panel editor",
            h3 { {crate::t(lang, title_key)} }
            label { {crate::t(lang, "admin.words.field_word")} }
            input {
                value: "{draft.word}",
                oninput: move |e| editor.with_mut(|ed| {
                    if let Some(ed) = ed.as_mut() {
                        ed.draft.word = e.value();
                    }
                }),
            }
            div { class: "editor_grid",
                for code in Language::ALL {
                    div { key: "{code.code()}",
                        label { "{code.label()}" }
                        input {
                            value: "{draft.translation(code)}",
                            oninput: move |e| editor.with_mut(|ed| {
                                if let Some(ed) = ed.as_mut() {
                                    *ed.draft.translation_mut(code) = e.value();
                                }
                            }),
                        }
                    }
                }
            }
            label { {crate::t(lang, "admin.words.field_grammar")} }
            textarea {
                rows: 3,
                value: "{draft.grammar}",
                oninput: move |e| editor.with_mut(|ed| {
                    if let Some(ed) = ed.as_mut() {
                        ed.draft.grammar = e.value();
                    }
                }),
            }
            div { class: "editor_actions",
                button { class: "btn primary", onclick: on_save, {crate::t(lang, "common.save")} }
                button { class: "btn", onclick: move |_| editor.set(None), {crate::t(lang, "common.cancel")} }
            }
        }
    }
}
