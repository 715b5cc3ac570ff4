//! Smoke-test helpers for a running backend.
//!
//! Tests built on this crate target the URL in `BACKEND_URL` and return early
//! when it is unset, so a plain `cargo test` without a backend stays green.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use shared::config::DEVELOPMENT_API_BASE_URL;

/// Environment variable naming the backend to smoke-test.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Initializes `env_logger` for tests; repeated calls are harmless.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Trims whitespace and trailing slashes; empty input means "not configured".
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn backend_base_url() -> Option<String> {
    std::env::var(BACKEND_URL_VAR)
        .ok()
        .and_then(|raw| normalize_base_url(&raw))
}

/// Body posted to the trap endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttackSubmission {
    pub input_text: String,
    pub ip_address: String,
    pub user_agent: String,
}

impl AttackSubmission {
    pub fn new(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            ip_address: "127.0.0.1".to_string(),
            user_agent: "TestAgent/1.0".to_string(),
        }
    }
}

/// Sample inputs with the classification the backend is expected to report.
pub fn attack_cases() -> Vec<(&'static str, &'static str)> {
    vec![
        ("admin' OR 1=1--", "SQLI"),
        ("<script>alert('xss')</script>", "XSS"),
        ("<!--#exec cmd=\"ls\"-->", "SSI"),
        ("Hello, this is normal text", "BENIGN"),
    ]
}

pub fn looks_like_html(body: &str) -> bool {
    body.to_lowercase().contains("<!doctype html>")
}

/// Minimal HTTP client for the smoke endpoints.
pub struct SmokeClient {
    base_url: String,
    client: reqwest::Client,
}

impl SmokeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Client for the local development backend.
    pub fn local() -> Result<Self> {
        Self::new(DEVELOPMENT_API_BASE_URL)
    }

    /// Client for `BACKEND_URL`, or `None` when it is unset.
    pub fn from_env() -> Result<Option<Self>> {
        backend_base_url().map(Self::new).transpose()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn health(&self) -> Result<(reqwest::StatusCode, serde_json::Value)> {
        let url = self.url("/api/health");
        log::info!("Checking health at {}", url);
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;
        let status = res.status();
        let body = res.json().await.context("Health response is not JSON")?;
        Ok((status, body))
    }

    pub async fn submit_attack(
        &self,
        submission: &AttackSubmission,
    ) -> Result<(reqwest::StatusCode, serde_json::Value)> {
        let url = self.url("/api/trap/submit");
        log::info!("Submitting {:?} to {}", submission.input_text, url);
        let res = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;
        let status = res.status();
        let body = res.json().await.context("Submission response is not JSON")?;
        Ok((status, body))
    }

    pub async fn index(&self) -> Result<(reqwest::StatusCode, String)> {
        let url = self.url("/");
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;
        let status = res.status();
        let body = res.text().await.context("Failed to read index body")?;
        Ok((status, body))
    }
}
