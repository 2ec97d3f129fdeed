//! Emotion prototype table
//!
//! Each emotion label maps to a fixed reference point in the normalized
//! VAD cube. Ranged axes from the affect literature are collapsed to
//! their midpoints; Neutral sits at the origin. The table is built once
//! and never mutated, so concurrent readers need no synchronization.

use super::types::{Emotion, Vad};
use once_cell::sync::Lazy;

/// Fixed prototype table, scanned in this order by the classifier.
///
/// Scan order is part of the contract: ties go to the earliest entry.
pub static EMOTION_PROTOTYPES: Lazy<[(Emotion, Vad); 11]> = Lazy::new(|| {
    [
        (
            Emotion::Angry,
            Vad::new((-0.6 + -0.8) / 2.0, (0.6 + 0.9) / 2.0, (0.4 + 0.7) / 2.0),
        ),
        (
            Emotion::Anxious,
            Vad::new((-0.5 + -0.7) / 2.0, (0.7 + 0.9) / 2.0, (-0.3 + -0.6) / 2.0),
        ),
        (Emotion::Distressed, Vad::new(-0.7, 0.8, -0.5)),
        (Emotion::Pessimistic, Vad::new(-0.6, -0.3, -0.4)),
        (Emotion::Rejected, Vad::new(-0.8, 0.5, -0.7)),
        (
            Emotion::Surprised,
            Vad::new((0.5 + 0.7) / 2.0, (0.8 + 0.9) / 2.0, (0.2 + 0.5) / 2.0),
        ),
        (
            Emotion::Sad,
            Vad::new((-0.7 + -0.9) / 2.0, (-0.3 + -0.5) / 2.0, (-0.5 + -0.7) / 2.0),
        ),
        (
            Emotion::Excited,
            Vad::new((0.7 + 0.9) / 2.0, (0.7 + 0.9) / 2.0, (0.5 + 0.7) / 2.0),
        ),
        (
            Emotion::Relaxed,
            Vad::new((0.6 + 0.8) / 2.0, (-0.5 + -0.7) / 2.0, (0.3 + 0.5) / 2.0),
        ),
        (
            Emotion::Satisfied,
            Vad::new((0.7 + 0.9) / 2.0, (-0.2 + 0.2) / 2.0, (0.4 + 0.6) / 2.0),
        ),
        (Emotion::Neutral, Vad::new(0.0, 0.0, 0.0)),
    ]
});
