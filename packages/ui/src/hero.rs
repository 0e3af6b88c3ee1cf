use api::types::Language;
use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Banner above the home article: tagline, the five languages and shortcuts.
#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    let saved = crate::use_learning().saved.read().len();

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero",
            h1 { {crate::t(lang, "app.name")} }
            p { class: "hero_subtitle", {crate::t(lang, "home.subtitle")} }
            ul { class: "hero_languages",
                for l in Language::ALL {
                    li { key: "{l.code()}", class: "hero_language lang_{l.code()}", "{l.label()}" }
                }
            }
            div { class: "cta_row",
                a { class: "btn primary", href: "/archive", {crate::t(lang, "home.cta.archive")} }
                a { class: "btn", href: "/saved",
                    {crate::t(lang, "home.cta.saved")}
                    if saved > 0 {
                        span { class: "count_badge", "{saved}" }
                    }
                }
            }
            p { class: "hint", {crate::t(lang, "home.tip")} }
        }
    }
}
