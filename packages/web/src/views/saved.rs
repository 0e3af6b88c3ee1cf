use dioxus::prelude::*;

#[component]
pub fn Saved() -> Element {
    rsx! { ui::SavedWordsPage {} }
}
