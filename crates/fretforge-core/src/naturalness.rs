use crate::position::Realization;
use crate::scorer::StaticCost;

/// Stylistic-fit collaborator, typically backed by an external embedding
/// service. The solver only ever consumes the scalar; scores are resolved
/// for every candidate of every step before the search phase begins, so
/// implementations may block.
pub trait NaturalnessModel: Send + Sync {
    /// Score in [0, 1]; 1 is perfectly natural for the style. Return `None`
    /// when no answer is available (service down, unknown style); the
    /// solver substitutes a neutral 1.0 rather than failing the solve.
    fn score(&self, realization: &Realization, cost: &StaticCost, style: &str) -> Option<f32>;
}

/// No-op model: every candidate is equally natural.
pub struct NeutralNaturalness;

impl NaturalnessModel for NeutralNaturalness {
    fn score(&self, _realization: &Realization, _cost: &StaticCost, _style: &str) -> Option<f32> {
        None
    }
}
