//! Client for the external progress backend (points, streaks, profile).

use crate::error::{Error, Result};
use crate::quiz::QuizResult;
use crate::types::{ArticleId, ProfileResponse, QuizSubmission, QuizSubmitResponse};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            csrf_token: None,
        }
    }

    pub fn with_csrf_token(mut self, token: Option<String>) -> Self {
        self.csrf_token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/profile/`. A guest gets [`Error::Unauthorized`].
    pub async fn fetch_profile(&self) -> Result<ProfileResponse> {
        debug!("backend.fetch_profile: base={}", self.base_url);
        let resp = self
            .with_credentials(self.http.get(self.url("/api/profile/")))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizSubmitResponse> {
        debug!(
            "backend.submit_quiz: article={} score={:.0}",
            submission.article_id, submission.score
        );
        let mut req = self.http.post(self.url("/api/submit-quiz/")).json(submission);
        if let Some(token) = &self.csrf_token {
            req = req.header(CSRF_HEADER, token);
        }
        let resp = self.with_credentials(req).send().await?;
        decode(resp).await
    }

    fn with_credentials(&self, req: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let req = req.fetch_credentials_include();
        req
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        debug!("backend: not signed in status={}", status);
        return Err(Error::Unauthorized);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
        warn!("backend: status={} message={}", status, message);
        return Err(Error::Backend {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp.json().await?)
}

/// The `error` field of a JSON error body, if there is one.
pub fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}

/// Pull the CSRF token out of a `document.cookie` string.
pub fn csrf_from_cookie(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl QuizSubmission {
    pub fn from_result(article_id: ArticleId, result: &QuizResult, time_spent: Option<u64>) -> Self {
        Self {
            article_id,
            score: result.percentage,
            points_earned: result.points_earned,
            time_spent,
        }
    }
}
