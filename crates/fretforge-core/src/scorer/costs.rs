use super::physics::HandShape;
use super::types::{Difficulty, StaticCost};
use crate::config::ScoringWeights;

const DIFFICULTY_LEVELS: [Difficulty; 8] = [
    Difficulty::VeryEasy,
    Difficulty::Easy,
    Difficulty::Moderate,
    Difficulty::Challenging,
    Difficulty::Hard,
    Difficulty::VeryHard,
    Difficulty::Extreme,
    Difficulty::Impossible,
];

/// Classify a discounted dominant stretch (mm) against the 7 band bounds.
pub fn classify(dominant_mm: f32, thresholds: &[f32; 7]) -> Difficulty {
    for (i, &bound) in thresholds.iter().enumerate() {
        if dominant_mm <= bound {
            return DIFFICULTY_LEVELS[i];
        }
    }
    Difficulty::Impossible
}

/// Assemble the structured static cost from a raw hand shape.
///
/// The position factor discounts every physical distance; hand shapes are
/// objectively easier higher up the neck where frets sit closer together
/// and the hand is already curled.
pub fn assemble_static_cost(
    shape: &HandShape,
    position_factor: f32,
    thresholds: &[f32; 7],
    weights: &ScoringWeights,
    max_span: u8,
    string_count: usize,
) -> StaticCost {
    if shape.fretted_count == 0 {
        return StaticCost::free();
    }

    let span_mm = shape.span_mm * position_factor;
    let max_stretch_mm = shape.max_stretch_mm * position_factor;
    let avg_stretch_mm = shape.avg_stretch_mm * position_factor;
    let string_span_mm = shape.string_span_mm * position_factor;
    let diagonal_mm = shape.diagonal_mm * position_factor;

    let over_span = shape.fret_span > max_span;
    let over_fingers = shape.fretted_count > string_count;
    let over_reach =
        max_stretch_mm > weights.ceiling_stretch_mm || diagonal_mm > weights.ceiling_diagonal_mm;
    let playable = !(over_span || over_fingers || over_reach);

    let difficulty = if playable {
        classify(max_stretch_mm, thresholds)
    } else {
        Difficulty::Impossible
    };

    let total = weights.weight_span * span_mm
        + weights.weight_max_stretch * max_stretch_mm
        + weights.weight_avg_stretch * avg_stretch_mm
        + weights.weight_string_span * string_span_mm
        + weights.weight_diagonal * diagonal_mm;

    StaticCost {
        fret_span: shape.fret_span,
        span_mm,
        max_stretch_mm,
        avg_stretch_mm,
        string_span_mm,
        diagonal_mm,
        avg_fret: shape.avg_fret,
        position_factor,
        difficulty,
        playable,
        total,
    }
}
