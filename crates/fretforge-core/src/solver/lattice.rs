use crate::error::{FfResult, FretForgeError};
use crate::mapper;
use crate::naturalness::NaturalnessModel;
use crate::pitch::Pitch;
use crate::position::Realization;
use crate::scorer::{Scorer, StaticCost};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// One state in the search lattice: a realization with its precomputed
/// static cost and stylistic-fit score. Immutable once the lattice is
/// frozen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub realization: Realization,
    pub static_cost: StaticCost,
    pub naturalness: f32,
}

impl Candidate {
    /// Node weight in the DP: static cost plus the style penalty.
    pub fn node_cost(&self, weight_style: f32) -> f32 {
        self.static_cost.total + (1.0 - self.naturalness) * weight_style
    }
}

/// Cooperative cancellation checked between step-level batches during
/// candidate precomputation. Once the DP pass starts it runs to completion.
#[derive(Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-step candidate states, one inner vec per input step.
pub type Lattice = Vec<Vec<Candidate>>;

/// Phase 1a: enumerate and statically score candidates for every step.
/// Steps are independent, so this fans out across them; unplayable shapes
/// are dropped here and never reach the search.
pub fn build(scorer: &Scorer, steps: &[Vec<Pitch>], cancel: &CancelFlag) -> FfResult<Lattice> {
    let lattice: Lattice = steps
        .par_iter()
        .map(|targets| {
            if cancel.is_cancelled() {
                return Vec::new();
            }
            mapper::enumerate_realizations(scorer.fretboard(), targets, scorer.max_span())
                .into_iter()
                .map(|realization| {
                    let static_cost = scorer.static_cost(&realization);
                    Candidate {
                        realization,
                        static_cost,
                        naturalness: 1.0,
                    }
                })
                .filter(|c| c.static_cost.playable)
                .collect()
        })
        .collect();

    if cancel.is_cancelled() {
        return Err(FretForgeError::Cancelled);
    }

    debug!(
        "Lattice built: {} steps, {} candidates",
        lattice.len(),
        lattice.iter().map(|s| s.len()).sum::<usize>()
    );
    Ok(lattice)
}

/// Phase 1b: resolve naturalness for every candidate of every step. After
/// this the cost matrix is fixed and the DP pass never suspends. A model
/// that declines (or answers with a non-finite value) falls back to the
/// neutral 1.0.
pub fn apply_naturalness(lattice: &mut Lattice, model: &dyn NaturalnessModel, style: &str) {
    lattice.par_iter_mut().for_each(|stage| {
        for candidate in stage.iter_mut() {
            candidate.naturalness = model
                .score(&candidate.realization, &candidate.static_cost, style)
                .filter(|v| v.is_finite())
                .map(|v| v.clamp(0.0, 1.0))
                .unwrap_or(1.0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScoringWeights, SolverParams};
    use crate::fretboard::Fretboard;
    use crate::instrument::InstrumentConfig;
    use crate::naturalness::NeutralNaturalness;

    fn scorer() -> Scorer {
        Scorer::new(
            Fretboard::new(&InstrumentConfig::standard_guitar()),
            ScoringWeights::default(),
            &SolverParams::default(),
        )
        .unwrap()
    }

    fn step(names: &[&str]) -> Vec<Pitch> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    #[test]
    fn test_build_drops_unplayable() {
        let lattice = build(&scorer(), &[step(&["C4", "E4", "G4"])], &CancelFlag::new()).unwrap();
        assert_eq!(lattice.len(), 1);
        assert!(!lattice[0].is_empty());
        assert!(lattice[0].iter().all(|c| c.static_cost.playable));
    }

    #[test]
    fn test_cancel_aborts_before_search() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let err = build(&scorer(), &[step(&["C4"])], &cancel).unwrap_err();
        assert!(matches!(err, FretForgeError::Cancelled));
    }

    #[test]
    fn test_neutral_model_leaves_scores_at_one() {
        let mut lattice =
            build(&scorer(), &[step(&["C4", "E4", "G4"])], &CancelFlag::new()).unwrap();
        apply_naturalness(&mut lattice, &NeutralNaturalness, "default");
        assert!(lattice[0].iter().all(|c| c.naturalness == 1.0));
    }

    #[test]
    fn test_bad_model_scores_are_recovered() {
        struct Hostile;
        impl crate::naturalness::NaturalnessModel for Hostile {
            fn score(
                &self,
                _r: &Realization,
                _c: &StaticCost,
                _s: &str,
            ) -> Option<f32> {
                Some(f32::NAN)
            }
        }
        let mut lattice = build(&scorer(), &[step(&["C4"])], &CancelFlag::new()).unwrap();
        apply_naturalness(&mut lattice, &Hostile, "default");
        assert!(lattice[0].iter().all(|c| c.naturalness == 1.0));
    }
}
