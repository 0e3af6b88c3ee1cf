//! This crate contains the LinguaRomana domain and the shared fullstack
//! server functions.
use dioxus::prelude::*;

pub mod admin;
pub mod archive;
pub mod articles;
pub mod backend;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod keywords;
pub mod progress;
pub mod quiz;
pub mod saved_words;
pub mod store;
pub mod sync;
pub mod types;



pub use config::PublicConfig;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

/// Browser-facing settings such as the progress backend URL.
#[get("/api/config")]
pub async fn public_config() -> Result<PublicConfig, ServerFnError> {
    #[cfg(feature = "server")]
    {
        tracing::debug!("public_config");
        Ok(config::AppConfig::from_env().public())
    }

    #[cfg(not(feature = "server"))]
    Err(ServerFnError::new("public_config is server-only"))
}

/// Articles and words to seed local storage with.
#[get("/api/sync")]
pub async fn sync_payload() -> Result<types::SyncPayload, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let config = config::AppConfig::from_env();
        sync::server::load_payload(&config).await.map_err(|e| {
            tracing::warn!("sync_payload: {e:#}");
            ServerFnError::new(format!("sync: {e:#}"))
        })
    }

    #[cfg(not(feature = "server"))]
    Err(ServerFnError::new("sync_payload is server-only"))
}
