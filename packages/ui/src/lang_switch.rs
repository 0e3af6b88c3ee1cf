use dioxus::prelude::*;

use crate::{set_lang, Lang};

/// FR / EN toggle for the navbar.
#[component]
pub fn LangSwitch() -> Element {
    let lang_sig = crate::use_lang();
    let lang = lang_sig();

    rsx! {
        div { class: "lang_switch", title: crate::t(lang, "lang.label"),
            for option in [Lang::Fr, Lang::En] {
                button {
                    key: "{option.code()}",
                    class: if option == lang { "btn lang_btn active" } else { "btn lang_btn" },
                    onclick: move |_| set_lang(lang_sig, option),
                    "{option.code().to_uppercase()}"
                }
            }
        }
    }
}
