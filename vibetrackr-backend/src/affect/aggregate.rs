//! Per-chunk score aggregation
//!
//! Chunk scores are combined by unweighted element-wise mean on the raw
//! scale, then rescaled once into the normalized affect cube. No chunk
//! is weighted by length or position, so the mean is order-independent.

use super::error::AffectError;
use super::types::{RawVad, Vad};

/// Average raw chunk scores and rescale to normalized coordinates.
///
/// Callers must guarantee at least one chunk was scored; zero triples
/// is an `EmptyInput` error, never an average over nothing.
pub fn aggregate(scores: &[RawVad]) -> Result<Vad, AffectError> {
    if scores.is_empty() {
        return Err(AffectError::EmptyInput);
    }

    let n = scores.len() as f64;
    let mean = RawVad::new(
        scores.iter().map(|s| s.valence).sum::<f64>() / n,
        scores.iter().map(|s| s.arousal).sum::<f64>() / n,
        scores.iter().map(|s| s.dominance).sum::<f64>() / n,
    );

    Ok(mean.to_normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scores_is_empty_input() {
        assert!(matches!(aggregate(&[]), Err(AffectError::EmptyInput)));
    }

    #[test]
    fn single_score_passes_through_normalization() {
        let vad = aggregate(&[RawVad::new(4.5, 4.0, 3.8)]).unwrap();
        assert!((vad.valence - 0.8).abs() < 1e-12);
        assert!((vad.arousal - 0.6).abs() < 1e-12);
        assert!((vad.dominance - 0.52).abs() < 1e-12);
    }

    #[test]
    fn mean_is_elementwise_and_unweighted() {
        let scores = [
            RawVad::new(0.0, 1.0, 5.0),
            RawVad::new(5.0, 4.0, 0.0),
        ];
        // Raw means: (2.5, 2.5, 2.5) -> origin after rescale
        let vad = aggregate(&scores).unwrap();
        assert!(vad.valence.abs() < 1e-12);
        assert!(vad.arousal.abs() < 1e-12);
        assert!(vad.dominance.abs() < 1e-12);
    }

    #[test]
    fn mean_is_order_independent() {
        let a = [
            RawVad::new(1.0, 2.0, 3.0),
            RawVad::new(4.0, 0.5, 2.0),
            RawVad::new(3.0, 3.0, 3.0),
        ];
        let mut b = a;
        b.reverse();
        assert_eq!(aggregate(&a).unwrap(), aggregate(&b).unwrap());
    }
}
