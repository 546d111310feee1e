use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Ordered ergonomic difficulty of holding one realization.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Difficulty {
    VeryEasy,
    Easy,
    Moderate,
    Challenging,
    Hard,
    VeryHard,
    Extreme,
    Impossible,
}

/// Structured ergonomic measurement of a single realization. Physical
/// distances are already discounted by the position factor; the raw values
/// are recoverable by dividing it back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticCost {
    pub fret_span: u8,
    pub span_mm: f32,
    pub max_stretch_mm: f32,
    pub avg_stretch_mm: f32,
    pub string_span_mm: f32,
    pub diagonal_mm: f32,
    pub avg_fret: f32,
    pub position_factor: f32,
    pub difficulty: Difficulty,
    pub playable: bool,
    /// Scalar used as the node weight in the sequence search.
    pub total: f32,
}

impl StaticCost {
    /// Cost of a realization with no fingers down (all open or muted).
    pub fn free() -> Self {
        Self {
            fret_span: 0,
            span_mm: 0.0,
            max_stretch_mm: 0.0,
            avg_stretch_mm: 0.0,
            string_span_mm: 0.0,
            diagonal_mm: 0.0,
            avg_fret: 0.0,
            position_factor: 1.0,
            difficulty: Difficulty::VeryEasy,
            playable: true,
            total: 0.0,
        }
    }
}
