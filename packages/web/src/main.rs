use dioxus::prelude::*;

use views::{Admin, Archive, ArchiveArticle, Home, Saved};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/saved")]
    Saved {},
    #[route("/archive")]
    Archive {},
    #[route("/archive/:id")]
    ArchiveArticle { id: String },
    #[route("/admin")]
    Admin {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    #[cfg(feature = "server")]
    {
        api::config::load_dotenv();
        init_tracing();
        log_runtime_config();
    }
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("startup: tracing already initialised: {e}");
    }
}

#[cfg(feature = "server")]
fn log_runtime_config() {
    let config = api::config::AppConfig::from_env();
    let ip = std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    tracing::info!("startup: IP={ip} PORT={port} mode={:?}", config.mode);
    match &config.backend_url {
        Some(url) => tracing::info!("startup: BACKEND_URL={url}"),
        None => tracing::info!("startup: no BACKEND_URL, progress stays local"),
    }
    match &config.sync_file {
        Some(path) => tracing::info!("startup: LINGUAROMANA_SYNC_FILE={}", path.display()),
        None => tracing::info!("startup: serving built-in sync content"),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::LinguaTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                ui::LearningProvider {
                    ui::SessionBootstrap {}
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Top navigation with progress and the language toggle, wrapping every route.
#[component]
fn WebNavbar() -> Element {
    let lang = ui::use_lang()();
    let saved_count = ui::use_learning().saved.read().len();

    rsx! {
        div { class: "lingua_nav",
            div { class: "lingua_nav_inner",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand_mark" }
                    span { class: "brand_name", {ui::t(lang, "app.name")} }
                }
                div { class: "nav_links",
                    Link { class: "nav_link", to: Route::Home {}, {ui::t(lang, "nav.home")} }
                    Link { class: "nav_link", to: Route::Saved {},
                        {ui::t(lang, "nav.saved")}
                        if saved_count > 0 {
                            span { class: "count_badge", "{saved_count}" }
                        }
                    }
                    Link { class: "nav_link", to: Route::Archive {}, {ui::t(lang, "nav.archive")} }
                    Link { class: "nav_link", to: Route::Admin {}, {ui::t(lang, "nav.admin")} }
                }
                div { class: "nav_tools",
                    ui::ProgressBadge {}
                    ui::LangSwitch {}
                }
            }
        }
        div { class: "lingua_container route_view", Outlet::<Route> {} }
    }
}
