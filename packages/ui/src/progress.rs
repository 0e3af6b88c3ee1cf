use api::progress::format_points;
use dioxus::prelude::*;

use crate::state::use_learning;

/// Streak and points for the navbar.
#[component]
pub fn ProgressBadge() -> Element {
    let lang = crate::use_lang()();
    let state = use_learning();
    let progress = state.progress.read().clone();
    let session = state.session.read();
    let user = session.user.as_ref().map(|u| u.username.clone());

    rsx! {
        div { class: "progress_badge",
            span { class: "streak", title: crate::t(lang, "progress.streak"),
                "🔥 {progress.current_streak}"
            }
            span { class: "points", title: crate::t(lang, "progress.points"),
                "⭐ {format_points(progress.total_points)}"
            }
            match user {
                Some(name) => rsx! { span { class: "user_name", "{name}" } },
                None => rsx! { span { class: "guest_label", {crate::t(lang, "progress.guest")} } },
            }
        }
    }
}
