//! Affect analysis engine
//!
//! Turns raw journal text into a point in the three-axis VAD affect
//! space and derives a discrete emotion label plus two scalar scores:
//!
//! 1. `chunker` windows the text so the bounded-input inference
//!    backend can score journals of any length
//! 2. `vad_source` scores each window as a raw VAD triple
//! 3. `aggregate` averages the raw triples and rescales them into the
//!    normalized affect cube
//! 4. `classify` picks the nearest emotion prototype by angular
//!    similarity
//! 5. `score` derives the magnitude-weighted vibe score
//!
//! `analyzer` composes the pipeline into the one entry point the route
//! layer calls.

pub mod aggregate;
pub mod analyzer;
pub mod chunker;
pub mod classify;
pub mod error;
pub mod prototypes;
pub mod score;
pub mod types;
pub mod vad_source;

pub use aggregate::aggregate;
pub use analyzer::{AnalysisMode, AnalyzerOptions, JournalAnalyzer};
pub use chunker::chunk_text;
pub use classify::{classify, cosine_similarity};
pub use error::AffectError;
pub use prototypes::EMOTION_PROTOTYPES;
pub use score::vibe_score;
pub use types::{Emotion, JournalAnalysis, RawVad, Vad};
pub use vad_source::{GradioVadClient, VadSource, VadSourceError};
