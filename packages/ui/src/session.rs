use api::backend::{csrf_from_cookie, BackendClient};
use api::error::Error;
use dioxus::prelude::*;

use crate::state::{use_learning, Session};

/// Find out whether a progress backend is configured and whether the visitor
/// is signed in to it. Guests keep local, temporary progress.
///
/// Must be rendered inside `LearningProvider`.
#[component]
pub fn SessionBootstrap() -> Element {
    let state = use_learning();

    use_effect(move || {
        let mut session = state.session;
        let mut progress = state.progress;
        spawn(async move {
            let config = match api::public_config().await {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("session: config unavailable: {e}");
                    return;
                }
            };
            let Some(base_url) = config.backend_url else {
                tracing::debug!("session: no backend configured, guest mode");
                return;
            };

            let cookies = crate::browser::read_cookies().await;
            let client = BackendClient::new(base_url).with_csrf_token(csrf_from_cookie(&cookies));

            match client.fetch_profile().await {
                Ok(profile) => {
                    tracing::info!("session: signed in as {}", profile.user.username);
                    progress.with_mut(|p| p.apply_profile(&profile.profile));
                    session.set(Session {
                        backend: Some(client),
                        user: Some(profile.user),
                    });
                }
                Err(Error::Unauthorized) => {
                    tracing::debug!("session: guest");
                    session.set(Session {
                        backend: Some(client),
                        user: None,
                    });
                }
                Err(e) => {
                    tracing::warn!("session: profile fetch failed: {e}");
                }
            }
        });
    });

    rsx! {}
}
