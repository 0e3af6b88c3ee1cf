use dioxus::prelude::*;

#[component]
pub fn Admin() -> Element {
    rsx! { ui::AdminPage {} }
}
