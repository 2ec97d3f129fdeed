//! Vibe score derivation

use super::types::Vad;

/// Valence weighted by the triple's Euclidean magnitude.
///
/// Pure scalar function; NaN/Inf inputs propagate untouched.
pub fn vibe_score(vad: Vad) -> f64 {
    vad.valence * vad.norm()
}
