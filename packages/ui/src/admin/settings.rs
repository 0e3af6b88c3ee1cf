use api::admin::{
    apply_import, change_password, export_bundle, export_file_name, parse_import, reset_all,
};
use api::error::Error;
use chrono::Utc;
use dioxus::prelude::*;

use crate::state::use_learning;

#[component]
pub(super) fn SettingsTab() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let state = use_learning();
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut import_text = use_signal(String::new);

    let on_change_password = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_: MouseEvent| {
            if new_password() != confirm_password() {
                toasts.error(crate::t(lang, "admin.settings.password_mismatch"), None);
                return;
            }
            match change_password(state.store.get(), &new_password()) {
                Ok(()) => {
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    toasts.success(crate::t(lang, "admin.settings.password_changed"), None);
                }
                Err(Error::Validation(e)) => toasts.error(crate::t(lang, e.message_key()), None),
                Err(e) => toasts.error(crate::t(lang, "toast.storage_error"), Some(e.to_string())),
            }
        }
    };

    let on_export = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_: MouseEvent| {
            let now = Utc::now();
            let bundle = export_bundle(&state.library.read(), &state.dictionary.read(), now);
            match bundle {
                Ok(json) => {
                    let name = export_file_name(now);
                    spawn(async move {
                        crate::browser::download_json(&name, &json).await;
                    });
                    toasts.success(crate::t(lang, "admin.settings.exported"), None);
                }
                Err(e) => toasts.error(crate::t(lang, "admin.settings.export_failed"), Some(e.to_string())),
            }
        }
    };

    let on_import = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_: MouseEvent| {
            let data = match parse_import(&import_text()) {
                Ok(data) => data,
                Err(e) => {
                    toasts.error(crate::t(lang, "admin.settings.import_invalid"), Some(e.to_string()));
                    return;
                }
            };
            let (mut library, mut dictionary) = (state.library, state.dictionary);
            let result = library.with_mut(|l| {
                dictionary.with_mut(|d| apply_import(state.store.get(), l, d, data))
            });
            match result {
                Ok(summary) => {
                    import_text.set(String::new());
                    toasts.success(
                        crate::t(lang, "admin.settings.imported"),
                        Some(format!(
                            "{} {} · {} {}",
                            summary.articles,
                            crate::t(lang, "admin.tab.articles"),
                            summary.words,
                            crate::t(lang, "admin.tab.words"),
                        )),
                    );
                }
                Err(e) => toasts.error(crate::t(lang, "toast.storage_error"), Some(e.to_string())),
            }
        }
    };

    let on_reset = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_: MouseEvent| {
            let state = state.clone();
            let toasts = toasts.clone();
            spawn(async move {
                if !crate::browser::confirm(&crate::t(lang, "admin.settings.confirm_reset")).await {
                    return;
                }
                let (mut library, mut dictionary) = (state.library, state.dictionary);
                let result = library.with_mut(|l| {
                    dictionary.with_mut(|d| reset_all(state.store.get(), l, d))
                });
                let mut selected = state.selected;
                selected.set(None);
                match result {
                    Ok(()) => toasts.success(crate::t(lang, "admin.settings.reset_done"), None),
                    Err(e) => toasts.error(crate::t(lang, "toast.storage_error"), Some(e.to_string())),
                }
            });
        }
    };

    rsx! {
        div { class: "admin_section settings",
            div { class: "panel",
                h3 { {crate::t(lang, "admin.settings.password_title")} }
                label { {crate::t(lang, "admin.settings.new_password")} }
                input {
                    r#type: "password",
                    value: "{new_password}",
                    oninput: move |e| new_password.set(e.value()),
                }
                label { {crate::t(lang, "admin.settings.confirm_password")} }
                input {
                    r#type: "password",
                    value: "{confirm_password}",
                    oninput: move |e| confirm_password.set(e.value()),
                }
                button { class: "btn primary", onclick: on_change_password, {crate::t(lang, "admin.settings.change_password")} }
            }

            div { class: "panel",
                h3 { {crate::t(lang, "admin.settings.export_title")} }
                p { class: "hint", {crate::t(lang, "admin.settings.export_hint")} }
                button { class: "btn", onclick: on_export, {crate::t(lang, "admin.settings.export")} }
            }

            div { class: "panel",
                h3 { {crate::t(lang, "admin.settings.import_title")} }
                p { class: "hint", {crate::t(lang, "admin.settings.import_hint")} }
                textarea {
                    rows: 8,
                    value: "{import_text}",
                    placeholder: "{{\"articles\": [], \"words\": {{}}}}",
                    oninput: move |e| import_text.set(e.value()),
                }
                button {
                    class: "btn",
                    disabled: import_text.read().trim().is_empty(),
                    onclick: on_import,
                    {crate::t(lang, "admin.settings.import")}
                }
            }

            div { class: "panel danger_zone",
                h3 { {crate::t(lang, "admin.settings.reset_title")} }
                p { class: "hint", {crate::t(lang, "admin.settings.reset_hint")} }
                button { class: "btn danger", onclick: on_reset, {crate::t(lang, "admin.settings.reset")} }
            }
        }
    }
}
