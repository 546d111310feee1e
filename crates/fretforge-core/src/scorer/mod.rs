pub mod costs;
pub mod metrics;
pub mod physics;
pub mod types;

pub use self::types::{Difficulty, StaticCost};

use crate::config::{ScoringWeights, SolverParams};
use crate::error::FfResult;
use crate::fretboard::Fretboard;
use crate::position::Realization;

/// Physical/ergonomic cost model over one fretboard. Weight strings are
/// parsed once here so the per-candidate paths stay allocation-free and
/// infallible.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub weights: ScoringWeights,
    fretboard: Fretboard,
    position_bands: [f32; 4],
    position_factors: [f32; 5],
    difficulty_thresholds: [f32; 7],
    max_span: u8,
    max_shift: u8,
}

impl Scorer {
    pub fn new(fretboard: Fretboard, weights: ScoringWeights, params: &SolverParams) -> FfResult<Self> {
        let position_bands = weights.get_position_bands()?;
        let position_factors = weights.get_position_factors()?;
        let difficulty_thresholds = weights.get_difficulty_thresholds()?;
        Ok(Self {
            weights,
            fretboard,
            position_bands,
            position_factors,
            difficulty_thresholds,
            max_span: params.max_span,
            max_shift: params.max_shift,
        })
    }

    pub fn fretboard(&self) -> &Fretboard {
        &self.fretboard
    }

    pub fn max_span(&self) -> u8 {
        self.max_span
    }

    /// Discount multiplier for the hand's average fret position.
    pub fn position_factor(&self, avg_fret: f32) -> f32 {
        for (i, &bound) in self.position_bands.iter().enumerate() {
            if avg_fret <= bound {
                return self.position_factors[i];
            }
        }
        self.position_factors[self.position_factors.len() - 1]
    }

    /// Ergonomic cost of holding `realization` by itself.
    pub fn static_cost(&self, realization: &Realization) -> StaticCost {
        let shape = physics::analyze_hand_shape(&self.fretboard, realization);
        let factor = self.position_factor(shape.avg_fret);
        costs::assemble_static_cost(
            &shape,
            factor,
            &self.difficulty_thresholds,
            &self.weights,
            self.max_span,
            self.fretboard.string_count(),
        )
    }

    /// Cost of moving the fretting hand between two consecutive
    /// realizations: physical anchor shift plus a fixed inertia penalty for
    /// jumps beyond `max_shift` frets. Anchor-less realizations (all open
    /// or muted) move for free.
    pub fn transition_cost(&self, prev: &Realization, curr: &Realization) -> f32 {
        let (Some(a1), Some(a2)) = (prev.anchor_fret(), curr.anchor_fret()) else {
            return 0.0;
        };
        let shift_mm = (self.fretboard.fret_center(a1) - self.fretboard.fret_center(a2)).abs();
        let mut cost = shift_mm * self.weights.weight_shift;
        if a1.abs_diff(a2) > self.max_shift {
            cost += self.weights.penalty_position_jump;
        }
        cost
    }
}
