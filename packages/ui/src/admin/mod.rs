//! Password-gated authoring panel: articles, words and settings.

use api::admin::AdminGate;
use api::dictionary::WordDraft;
use dioxus::prelude::*;

use crate::state::use_learning;

mod articles;
mod settings;
mod words;

const ADMIN_CSS: Asset = asset!("/assets/styling/admin.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdminTab {
    Articles,
    Words,
    Settings,
}

/// Word editor contents. `original` is the key being edited, if any.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WordEditor {
    pub original: Option<String>,
    pub draft: WordDraft,
}

/// Signals shared between the tabs.
#[derive(Clone, Copy)]
pub(crate) struct AdminContext {
    pub tab: Signal<AdminTab>,
    pub word_editor: Signal<Option<WordEditor>>,
}

impl AdminContext {
    /// Jump to the Words tab with the editor open on `word`.
    pub fn edit_word(mut self, word: &str, draft: WordDraft, existing: bool) {
        self.word_editor.set(Some(WordEditor {
            original: existing.then(|| word.to_string()),
            draft,
        }));
        self.tab.set(AdminTab::Words);
    }
}

#[component]
pub fn AdminPage() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let state = use_learning();
    let mut gate = use_signal(AdminGate::default);
    let mut attempt = use_signal(String::new);

    let ctx = AdminContext {
        tab: use_signal(|| AdminTab::Articles),
        word_editor: use_signal(|| None::<WordEditor>),
    };
    use_context_provider(|| ctx);

    if !gate.read().is_authenticated() {
        let store = state.store.clone();
        let mut try_login = move || {
            let ok = gate.with_mut(|g| g.authenticate(store.get(), &attempt()));
            if ok {
                attempt.set(String::new());
            } else {
                toasts.error(crate::t(lang, "admin.wrong_password"), None);
            }
        };
        let mut try_login_key = try_login.clone();

        return rsx! {
            document::Link { rel: "stylesheet", href: ADMIN_CSS }
            div { class: "page",
                div { class: "panel admin_login",
                    h1 { {crate::t(lang, "admin.title")} }
                    label { {crate::t(lang, "admin.password")} }
                    input {
                        r#type: "password",
                        name: "admin_password",
                        value: "{attempt}",
                        oninput: move |e| attempt.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                try_login_key();
                            }
                        },
                    }
                    button { class: "btn primary", onclick: move |_| try_login(), {crate::t(lang, "admin.login")} }
                }
            }
        };
    }

    let mut tab = ctx.tab;
    let tabs = [
        (AdminTab::Articles, "admin.tab.articles"),
        (AdminTab::Words, "admin.tab.words"),
        (AdminTab::Settings, "admin.tab.settings"),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: ADMIN_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {crate::t(lang, "admin.title")} }
                button {
                    class: "btn",
                    onclick: move |_| gate.with_mut(|g| g.logout()),
                    {crate::t(lang, "admin.logout")}
                }
            }
            div { class: "tabs",
                for (value, key) in tabs {
                    button {
                        key: "{key}",
                        class: if tab() == value { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(value),
                        {crate::t(lang, key)}
                    }
                }
            }
            match tab() {
                AdminTab::Articles => rsx! { articles::ArticlesTab {} },
                AdminTab::Words => rsx! { words::WordsTab {} },
                AdminTab::Settings => rsx! { settings::SettingsTab {} },
            }
        }
    }
}

pub(crate) fn use_admin() -> AdminContext {
    use_context::<AdminContext>()
}
