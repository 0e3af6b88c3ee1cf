//! Error types shared by the domain modules.

use thiserror::Error;

/// Input rejected by one of the editors before anything is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("article title is required")]
    TitleRequired,
    #[error("article content is required")]
    ContentRequired,
    #[error("keyword is required")]
    WordRequired,
    #[error("at least one translation is required")]
    TranslationRequired,
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
}

impl ValidationError {
    /// i18n key used by the UI to render this error.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::TitleRequired | ValidationError::ContentRequired => {
                "admin.error.title_content_required"
            }
            ValidationError::WordRequired => "admin.error.word_required",
            ValidationError::TranslationRequired => "admin.error.translation_required",
            ValidationError::PasswordTooShort(_) => "admin.error.password_too_short",
        }
    }
}

/// The main error type for LinguaRomana operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("storage write failed for {key}: {message}")]
    Storage { key: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("nothing to export")]
    NothingToExport,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("not signed in")]
    Unauthorized,

    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
