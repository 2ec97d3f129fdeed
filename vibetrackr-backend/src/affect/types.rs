//! Core affect types
//!
//! Two VAD scales exist and must never be conflated: the inference
//! backend's raw scale (roughly [0,5] per axis) and the normalized
//! affect-cube scale ([-1,1] per axis). They are separate types so the
//! compiler enforces the distinction.

use serde::{Deserialize, Serialize};

/// VAD triple on the inference backend's raw scale (roughly [0,5])
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawVad {
    pub valence: f64,
    pub arousal: f64,
    pub dominance: f64,
}

impl RawVad {
    pub fn new(valence: f64, arousal: f64, dominance: f64) -> Self {
        Self {
            valence,
            arousal,
            dominance,
        }
    }

    /// Rescale to normalized affect-cube coordinates: `2*raw/5 - 1` per axis
    pub fn to_normalized(self) -> Vad {
        Vad {
            valence: 2.0 * self.valence / 5.0 - 1.0,
            arousal: 2.0 * self.arousal / 5.0 - 1.0,
            dominance: 2.0 * self.dominance / 5.0 - 1.0,
        }
    }

    /// All three components are finite (not NaN, not infinite)
    pub fn is_finite(&self) -> bool {
        self.valence.is_finite() && self.arousal.is_finite() && self.dominance.is_finite()
    }
}

/// VAD triple in normalized affect-cube coordinates ([-1,1] per axis)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vad {
    pub valence: f64,
    pub arousal: f64,
    pub dominance: f64,
}

impl Vad {
    pub const fn new(valence: f64, arousal: f64, dominance: f64) -> Self {
        Self {
            valence,
            arousal,
            dominance,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.valence, self.arousal, self.dominance]
    }

    /// Euclidean norm of the triple
    pub fn norm(&self) -> f64 {
        (self.valence * self.valence + self.arousal * self.arousal
            + self.dominance * self.dominance)
            .sqrt()
    }
}

/// Closed set of emotion labels, one per prototype in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    Angry,
    Anxious,
    Distressed,
    Pessimistic,
    Rejected,
    Surprised,
    Sad,
    Excited,
    Relaxed,
    Satisfied,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Angry => "Angry",
            Emotion::Anxious => "Anxious",
            Emotion::Distressed => "Distressed",
            Emotion::Pessimistic => "Pessimistic",
            Emotion::Rejected => "Rejected",
            Emotion::Surprised => "Surprised",
            Emotion::Sad => "Sad",
            Emotion::Excited => "Excited",
            Emotion::Relaxed => "Relaxed",
            Emotion::Satisfied => "Satisfied",
            Emotion::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full analysis record attached to a journal entry
///
/// Field names on the wire match the document format the frontend and
/// stored journals already use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalAnalysis {
    /// Normalized valence
    #[serde(rename = "V")]
    pub valence: f64,
    /// Normalized arousal
    #[serde(rename = "A")]
    pub arousal: f64,
    /// Normalized dominance
    #[serde(rename = "D")]
    pub dominance: f64,
    /// Nearest emotion prototype by angular similarity
    #[serde(rename = "Emotion")]
    pub emotion: Emotion,
    /// Vibe score: valence weighted by the triple's magnitude
    #[serde(rename = "Valence_Scaled_By_Mag")]
    pub valence_scaled_by_mag: f64,
    /// Angular distance to the winning prototype
    #[serde(rename = "Emotive_Angular_Distance")]
    pub emotive_angular_distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_maps_raw_domain_into_affect_cube() {
        let corners = [
            RawVad::new(0.0, 0.0, 0.0),
            RawVad::new(5.0, 5.0, 5.0),
            RawVad::new(0.0, 5.0, 2.5),
            RawVad::new(4.9, 0.1, 3.3),
        ];
        for raw in corners {
            let vad = raw.to_normalized();
            for c in vad.as_array() {
                assert!((-1.0..=1.0).contains(&c), "component {} out of range", c);
            }
        }
    }

    #[test]
    fn raw_midpoint_normalizes_to_origin() {
        let vad = RawVad::new(2.5, 2.5, 2.5).to_normalized();
        assert_eq!(vad.as_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn nan_raw_triple_is_not_finite() {
        assert!(!RawVad::new(f64::NAN, 1.0, 1.0).is_finite());
        assert!(!RawVad::new(1.0, f64::INFINITY, 1.0).is_finite());
        assert!(RawVad::new(0.0, 2.5, 5.0).is_finite());
    }

    #[test]
    fn analysis_record_serializes_with_document_field_names() {
        let record = JournalAnalysis {
            valence: 0.8,
            arousal: 0.6,
            dominance: 0.52,
            emotion: Emotion::Excited,
            valence_scaled_by_mag: 0.9,
            emotive_angular_distance: 0.002,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["V"], 0.8);
        assert_eq!(json["Emotion"], "Excited");
        assert!(json.get("Valence_Scaled_By_Mag").is_some());
        assert!(json.get("Emotive_Angular_Distance").is_some());
    }
}
