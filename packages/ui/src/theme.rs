use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Palette, layout and shared widgets, plus the page title.
#[component]
pub fn LinguaTheme() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Title { {crate::t(lang, "app.name")} }
        document::Meta { name: "theme-color", content: "#b4472f" }
        document::Link { rel: "stylesheet", href: THEME_CSS }
    }
}
