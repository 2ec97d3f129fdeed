//! VAD inference backend boundary
//!
//! The engine only needs one capability from the outside world: score a
//! span of text as a raw VAD triple. It is injected as a trait so tests
//! substitute a deterministic stub and the orchestrator never hard-codes
//! a concrete client.

use super::types::RawVad;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;

/// VAD backend call errors
#[derive(Debug, Error)]
pub enum VadSourceError {
    /// Network communication error (connect, timeout, transport)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend returned a non-success HTTP status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Backend responded, but not with a finite numeric triple
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl VadSourceError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Transport failures and server-side errors are transient; a
    /// malformed body or a client-side rejection will not improve on
    /// retry.
    pub fn is_transient(&self) -> bool {
        match self {
            VadSourceError::Network(_) => true,
            VadSourceError::Api(status, _) => *status >= 500 || *status == 429,
            VadSourceError::Malformed(_) => false,
        }
    }
}

/// Capability to score one text chunk as a raw VAD triple
#[async_trait]
pub trait VadSource: Send + Sync {
    async fn score(&self, chunk: &str) -> Result<RawVad, VadSourceError>;
}

/// Minimum-interval rate limiter for the inference backend
struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval,
        }
    }

    /// Wait if necessary to comply with the minimum interval
    async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!("VAD backend rate limiting: waiting {:?}", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }
}

/// Gradio predict response body: `{"data": [valence, arousal, dominance]}`
#[derive(Debug, Deserialize)]
struct GradioPredictResponse {
    data: Vec<f64>,
}

/// HTTP client for a Gradio-hosted VAD inference model
pub struct GradioVadClient {
    http_client: reqwest::Client,
    predict_url: String,
    rate_limiter: RateLimiter,
}

impl GradioVadClient {
    /// Create a client for the given Gradio space base URL.
    ///
    /// `min_interval` throttles successive predict calls; the hosted
    /// space rate-limits aggressively and has no coordination of its
    /// own.
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        min_interval: Duration,
    ) -> Result<Self, VadSourceError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("VibeTrackr/", env!("CARGO_PKG_VERSION")))
            .timeout(request_timeout)
            .build()
            .map_err(|e| VadSourceError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            predict_url: format!("{}/api/predict", base_url.trim_end_matches('/')),
            rate_limiter: RateLimiter::new(min_interval),
        })
    }
}

#[async_trait]
impl VadSource for GradioVadClient {
    async fn score(&self, chunk: &str) -> Result<RawVad, VadSourceError> {
        self.rate_limiter.wait().await;

        tracing::debug!(url = %self.predict_url, chunk_chars = chunk.chars().count(), "Querying VAD backend");

        let response = self
            .http_client
            .post(&self.predict_url)
            .json(&serde_json::json!({ "data": [chunk] }))
            .send()
            .await
            .map_err(|e| VadSourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(VadSourceError::Api(status.as_u16(), error_text));
        }

        let body: GradioPredictResponse = response
            .json()
            .await
            .map_err(|e| VadSourceError::Malformed(e.to_string()))?;

        if body.data.len() != 3 {
            return Err(VadSourceError::Malformed(format!(
                "expected 3 scores, got {}",
                body.data.len()
            )));
        }

        let raw = RawVad::new(body.data[0], body.data[1], body.data[2]);
        if !raw.is_finite() {
            return Err(VadSourceError::Malformed(format!(
                "non-finite score in {:?}",
                body.data
            )));
        }

        Ok(raw)
    }
}
