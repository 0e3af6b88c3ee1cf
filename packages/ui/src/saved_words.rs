use api::saved_words::{export_file_name, LanguageFilter};
use api::types::Language;
use chrono::Utc;
use dioxus::prelude::*;

use crate::state::use_learning;

const SAVED_CSS: Asset = asset!("/assets/styling/saved.css");

#[component]
pub fn SavedWordsPage() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let state = use_learning();
    let mut filter = use_signal(LanguageFilter::default);

    let saved = state.saved.read().clone();
    let counts = saved.counts();
    let words: Vec<_> = saved.filtered(filter()).into_iter().cloned().collect();

    let tabs = std::iter::once((LanguageFilter::All, crate::t(lang, "saved.all")))
        .chain(Language::ALL.into_iter().map(|l| (LanguageFilter::Only(l), l.label().to_string())))
        .collect::<Vec<_>>();

    let on_clear = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_: MouseEvent| {
            let state = state.clone();
            let toasts = toasts.clone();
            spawn(async move {
                if !crate::browser::confirm(&crate::t(lang, "saved.confirm_clear")).await {
                    return;
                }
                match state.clear_saved() {
                    Ok(()) => toasts.success(crate::t(lang, "saved.cleared"), None),
                    Err(e) => toasts.error(crate::t(lang, "toast.storage_error"), Some(e.to_string())),
                }
            });
        }
    };

    let on_export = {
        let toasts = toasts.clone();
        let saved = saved.clone();
        move |_: MouseEvent| match saved.export_json() {
            Ok(json) => {
                let name = export_file_name(Utc::now());
                spawn(async move {
                    crate::browser::download_json(&name, &json).await;
                });
            }
            Err(_) => toasts.warning(crate::t(lang, "saved.nothing_to_export"), None),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SAVED_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {crate::t(lang, "saved.title")} " " span { class: "count_badge", "{counts.total}" } }
                div { class: "actions",
                    button { class: "btn", onclick: on_export, {crate::t(lang, "saved.export")} }
                    button { class: "btn danger", disabled: saved.is_empty(), onclick: on_clear, {crate::t(lang, "saved.clear_all")} }
                }
            }

            div { class: "tabs",
                for (tab, label) in tabs {
                    button {
                        key: "{label}",
                        class: if filter() == tab { "tab active" } else { "tab" },
                        onclick: move |_| filter.set(tab),
                        "{label} "
                        span { class: "tab_count", "{counts.get(tab)}" }
                    }
                }
            }

            if words.is_empty() {
                div { class: "empty_state",
                    p { {crate::t(lang, "saved.empty")} }
                    a { class: "btn primary", href: "/", {crate::t(lang, "saved.back_to_article")} }
                }
            }

            div { class: "saved_grid",
                for word in words {
                    div { key: "{word.id}", class: "saved_card",
                        div { class: "saved_card_header",
                            div {
                                h4 { class: "saved_word", "{word.word}" }
                                div { class: "hint", {crate::t(lang, "saved.saved_on")} " {word.display_date()}" }
                            }
                            button {
                                class: "icon_btn",
                                "aria-label": crate::t(lang, "saved.remove"),
                                onclick: {
                                    let state = state.clone();
                                    let toasts = toasts.clone();
                                    let id = word.id;
                                    move |_| {
                                        if let Err(e) = state.remove_saved(id) {
                                            toasts.error(crate::t(lang, "toast.storage_error"), Some(e.to_string()));
                                        }
                                    }
                                },
                                "×"
                            }
                        }
                        div { class: "saved_translations",
                            for code in Language::ALL {
                                div { key: "{code.code()}", class: "saved_translation",
                                    div { class: "lang", "{code.label()}" }
                                    div { class: "text", "{word.translations.translation(code)}" }
                                }
                            }
                        }
                        if !word.grammar.trim().is_empty() {
                            div { class: "saved_grammar", "{word.grammar}" }
                        }
                    }
                }
            }
        }
    }
}
