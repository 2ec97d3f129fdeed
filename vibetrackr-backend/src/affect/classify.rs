//! Nearest-prototype emotion classification
//!
//! A normalized VAD triple is matched to the prototype with the highest
//! cosine similarity. The scan uses strict-greater-than comparison over
//! the fixed table order, so the earliest entry wins all ties.

use super::prototypes::EMOTION_PROTOTYPES;
use super::types::{Emotion, Vad};

/// Guards the zero-vector denominator (Neutral is the origin)
const SIMILARITY_EPSILON: f64 = 1e-8;

/// Cosine similarity between two VAD triples
pub fn cosine_similarity(a: &Vad, b: &Vad) -> f64 {
    let dot = a.valence * b.valence + a.arousal * b.arousal + a.dominance * b.dominance;
    dot / (a.norm() * b.norm() + SIMILARITY_EPSILON)
}

/// Classify a normalized VAD triple.
///
/// Returns the winning label and the angular distance to it, computed
/// as `acos(similarity) * PI / 180`. That constant is part of the
/// stored-record contract: existing documents and the frontend depend
/// on the resulting numeric range, so it is preserved as-is.
pub fn classify(vad: Vad) -> (Emotion, f64) {
    // The origin is the Neutral prototype itself. Cosine similarity
    // cannot rank a zero vector (every denominator collapses to the
    // epsilon guard and all similarities read 0), so match it exactly
    // before the scan.
    if vad.norm() == 0.0 {
        return (Emotion::Neutral, angular_distance(1.0));
    }

    let mut best_emotion = Emotion::Neutral;
    let mut best_score = -1.0;

    for (emotion, prototype) in EMOTION_PROTOTYPES.iter() {
        let sim = cosine_similarity(&vad, prototype);
        if sim > best_score {
            best_score = sim;
            best_emotion = *emotion;
        }
    }

    (best_emotion, angular_distance(best_score))
}

/// Angular distance from a similarity value.
///
/// Similarity is clamped to [-1,1] first; floating-point overshoot
/// past 1.0 would otherwise push `acos` out of its domain.
fn angular_distance(similarity: f64) -> f64 {
    similarity.clamp(-1.0, 1.0).acos() * std::f64::consts::PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_classifies_as_neutral_with_zero_distance() {
        let (emotion, dist) = classify(Vad::new(0.0, 0.0, 0.0));
        assert_eq!(emotion, Emotion::Neutral);
        assert!(dist.abs() < 1e-9);
    }

    #[test]
    fn prototype_input_classifies_as_itself() {
        for (emotion, prototype) in EMOTION_PROTOTYPES.iter() {
            let (label, dist) = classify(*prototype);
            assert_eq!(label, *emotion, "prototype for {} misclassified", emotion);
            // Self-similarity is ~1, so the distance is ~acos(1) = 0
            assert!(dist < 1e-3, "{} self-distance {}", emotion, dist);
        }
    }

    #[test]
    fn classification_is_scale_invariant() {
        let samples = [
            Vad::new(0.8, 0.6, 0.52),
            Vad::new(-0.7, 0.75, 0.55),
            Vad::new(0.1, -0.2, 0.05),
        ];
        for vad in samples {
            let (base, _) = classify(vad);
            for k in [0.25, 0.5, 2.0] {
                let scaled = Vad::new(vad.valence * k, vad.arousal * k, vad.dominance * k);
                let (label, _) = classify(scaled);
                assert_eq!(label, base, "scaling by {} changed the label", k);
            }
        }
    }

    #[test]
    fn unambiguous_positive_affect_classifies_as_excited() {
        let (emotion, dist) = classify(Vad::new(0.8, 0.6, 0.52));
        assert_eq!(emotion, Emotion::Excited);
        assert!(dist >= 0.0);
    }

    #[test]
    fn angular_distance_is_nonnegative_and_clamped() {
        // Overshoot past 1.0 must clamp rather than produce NaN
        assert_eq!(angular_distance(1.0 + 1e-12), 0.0);
        assert!(angular_distance(-1.0 - 1e-12).is_finite());
        assert!(angular_distance(0.0) > 0.0);
    }

    #[test]
    fn distance_uses_the_stored_record_transform() {
        // acos(0) * PI/180 = (PI/2) * PI/180
        let expected = std::f64::consts::FRAC_PI_2 * std::f64::consts::PI / 180.0;
        assert!((angular_distance(0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn cosine_similarity_of_parallel_vectors_is_one() {
        let a = Vad::new(0.5, 0.5, 0.5);
        let b = Vad::new(1.0, 1.0, 1.0);
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_similarity_of_opposed_vectors_is_minus_one() {
        let a = Vad::new(0.5, 0.0, 0.0);
        let b = Vad::new(-1.0, 0.0, 0.0);
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }
}
