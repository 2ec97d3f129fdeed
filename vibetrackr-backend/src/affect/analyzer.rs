//! Journal analysis orchestrator
//!
//! Composes chunking, backend scoring, aggregation, classification,
//! and score derivation into the single entry point the route layer
//! consumes. Backend calls run sequentially in chunk order; an
//! analysis run completes or fails as a whole, never partially.

use super::aggregate::aggregate;
use super::chunker::chunk_text;
use super::classify::classify;
use super::error::AffectError;
use super::score::vibe_score;
use super::types::{JournalAnalysis, RawVad};
use super::vad_source::{VadSource, VadSourceError};
use std::sync::Arc;
use std::time::Duration;
use vibetrackr_common::config::AnalysisSettings;

/// How a journal's text reaches the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// One backend call for the whole text, regardless of length.
    /// Degenerate case of `Chunked` with the window spanning the text.
    SingleCall,
    /// Sliding-window chunking; tolerates arbitrarily long input at
    /// the cost of one backend call per window.
    Chunked,
}

/// Analyzer tuning
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    pub mode: AnalysisMode,
    /// Chunk window size, characters
    pub window: usize,
    /// Chunk stride, characters
    pub stride: usize,
    /// Pause between sequential backend calls
    pub call_delay: Duration,
    /// Retries per backend call after the initial attempt
    pub max_retries: u32,
    /// First retry backoff; doubles on each subsequent retry
    pub initial_backoff: Duration,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            mode: AnalysisMode::Chunked,
            window: 128,
            stride: 32,
            call_delay: Duration::from_millis(250),
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

impl AnalyzerOptions {
    /// Build options from resolved configuration.
    ///
    /// Settings are validated at config load, so the mode string is
    /// one of the two known values here.
    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        let mode = match settings.mode.as_str() {
            "single-call" => AnalysisMode::SingleCall,
            _ => AnalysisMode::Chunked,
        };
        Self {
            mode,
            window: settings.window,
            stride: settings.stride,
            call_delay: Duration::from_millis(settings.call_delay_ms),
            max_retries: settings.max_retries,
            initial_backoff: Duration::from_millis(settings.initial_backoff_ms),
        }
    }
}

/// Text-to-analysis orchestrator
pub struct JournalAnalyzer {
    source: Arc<dyn VadSource>,
    options: AnalyzerOptions,
}

impl JournalAnalyzer {
    pub fn new(source: Arc<dyn VadSource>, options: AnalyzerOptions) -> Self {
        Self { source, options }
    }

    /// Analyze raw journal text into a full analysis record.
    ///
    /// Empty or whitespace-only text is `EmptyInput`; whether that is a
    /// valid journal is the caller's decision, not defaulted to Neutral
    /// here.
    pub async fn analyze(&self, text: &str) -> Result<JournalAnalysis, AffectError> {
        let chunks: Vec<&str> = match self.options.mode {
            AnalysisMode::Chunked => chunk_text(text, self.options.window, self.options.stride),
            AnalysisMode::SingleCall => {
                if text.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![text]
                }
            }
        };

        if chunks.is_empty() {
            return Err(AffectError::EmptyInput);
        }

        tracing::debug!(chunks = chunks.len(), mode = ?self.options.mode, "Scoring journal text");

        let mut scores = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            // Throttle sequential calls; the backend is rate-limited
            if index > 0 && !self.options.call_delay.is_zero() {
                tokio::time::sleep(self.options.call_delay).await;
            }
            scores.push(self.score_with_retry(chunk, index).await?);
        }

        let vad = aggregate(&scores)?;
        let (emotion, angular_distance) = classify(vad);

        Ok(JournalAnalysis {
            valence: vad.valence,
            arousal: vad.arousal,
            dominance: vad.dominance,
            emotion,
            valence_scaled_by_mag: vibe_score(vad),
            emotive_angular_distance: angular_distance,
        })
    }

    /// Score one chunk with bounded exponential-backoff retries.
    ///
    /// Only transient failures are retried. A malformed response fails
    /// the run immediately: coercing it to zero would corrupt the mean.
    async fn score_with_retry(&self, chunk: &str, index: usize) -> Result<RawVad, AffectError> {
        let mut backoff = self.options.initial_backoff;

        for attempt in 0..=self.options.max_retries {
            match self.source.score(chunk).await {
                Ok(raw) => {
                    if !raw.is_finite() {
                        return Err(AffectError::MalformedResponse(format!(
                            "non-finite triple for chunk {}",
                            index
                        )));
                    }
                    if attempt > 0 {
                        tracing::debug!(chunk = index, attempt, "VAD call succeeded after retry");
                    }
                    return Ok(raw);
                }
                Err(VadSourceError::Malformed(msg)) => {
                    return Err(AffectError::MalformedResponse(msg));
                }
                Err(err) if err.is_transient() && attempt < self.options.max_retries => {
                    tracing::warn!(
                        chunk = index,
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %err,
                        "VAD call failed, will retry after backoff"
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
                Err(err) => {
                    tracing::error!(chunk = index, attempt, error = %err, "VAD call failed");
                    return Err(AffectError::BackendUnavailable(format!(
                        "chunk {} failed after {} attempt(s): {}",
                        index,
                        attempt + 1,
                        err
                    )));
                }
            }
        }

        unreachable!("retry loop returns on every path")
    }
}
