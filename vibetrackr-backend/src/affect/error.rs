//! Affect engine errors

use thiserror::Error;

/// Failures local to one analysis run
///
/// All variants are terminal for the run: the engine never returns a
/// partial or degraded record. Callers decide the user-visible response.
#[derive(Debug, Error)]
pub enum AffectError {
    /// No scoreable content: the text was empty or whitespace-only
    #[error("Journal has no scoreable content")]
    EmptyInput,

    /// VAD backend calls failed and the retry budget is exhausted
    #[error("VAD backend unavailable: {0}")]
    BackendUnavailable(String),

    /// VAD backend returned something other than a finite numeric triple
    #[error("Malformed VAD backend response: {0}")]
    MalformedResponse(String),
}
