use dioxus::prelude::*;

#[component]
pub fn Archive() -> Element {
    rsx! { ui::ArchivePage {} }
}

#[component]
pub fn ArchiveArticle(id: String) -> Element {
    rsx! { ui::ArchiveReadPage { id } }
}
