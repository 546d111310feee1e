pub mod categorize;
pub mod kbest;
pub mod lattice;

pub use categorize::{categorize, FingeringAlternatives};
pub use kbest::RankedPath;
pub use lattice::{Candidate, CancelFlag};

use crate::config::{Config, SolverParams};
use crate::error::{FfResult, FretForgeError};
use crate::fretboard::Fretboard;
use crate::instrument::InstrumentConfig;
use crate::naturalness::NaturalnessModel;
use crate::pitch::Pitch;
use crate::scorer::Scorer;
use tracing::debug;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct SolverBuildParams {
    pub instrument: InstrumentConfig,
    #[builder(default)]
    pub config: Config,
}

impl SolverBuildParams {
    pub fn build_solver(self) -> FfResult<Solver> {
        self.instrument.validate()?;
        let fretboard = Fretboard::new(&self.instrument);
        let scorer = Scorer::new(fretboard, self.config.weights, &self.config.solver)?;
        Ok(Solver {
            scorer,
            params: self.config.solver,
        })
    }
}

/// Finds the K ergonomically best fingering sequences for a series of pitch
/// sets. Strict two-phase pipeline: candidates and all external scores are
/// resolved up front (in parallel, cancellable), then a pure synchronous
/// K-best Viterbi runs over the frozen cost matrix.
pub struct Solver {
    scorer: Scorer,
    params: SolverParams,
}

impl Solver {
    pub fn new(instrument: &InstrumentConfig, config: Config) -> FfResult<Self> {
        SolverBuildParams::builder()
            .instrument(instrument.clone())
            .config(config)
            .build()
            .build_solver()
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn solve(
        &self,
        steps: &[Vec<Pitch>],
        model: &dyn NaturalnessModel,
    ) -> FfResult<Vec<RankedPath>> {
        self.solve_cancellable(steps, model, &CancelFlag::new())
    }

    pub fn solve_cancellable(
        &self,
        steps: &[Vec<Pitch>],
        model: &dyn NaturalnessModel,
        cancel: &CancelFlag,
    ) -> FfResult<Vec<RankedPath>> {
        if steps.is_empty() {
            return Ok(Vec::new());
        }

        let mut lattice = lattice::build(&self.scorer, steps, cancel)?;

        // A step nobody can finger is fatal for the whole solve; report
        // which one instead of silently skipping it.
        if let Some(step) = lattice.iter().position(|stage| stage.is_empty()) {
            return Err(FretForgeError::UnrealizableStep { step });
        }

        lattice::apply_naturalness(&mut lattice, model, &self.params.style);

        if cancel.is_cancelled() {
            return Err(FretForgeError::Cancelled);
        }

        let paths = kbest::run(&self.scorer, &lattice, self.params.k);
        debug!(
            "Solve complete: {} paths, best cost {:.2}",
            paths.len(),
            paths.first().map(|p| p.total_cost).unwrap_or(0.0)
        );
        Ok(paths)
    }

    /// Bucket the K best paths into named alternatives.
    pub fn categorize(&self, paths: &[RankedPath]) -> FingeringAlternatives {
        categorize::categorize(paths, self.scorer.weights.high_position_fret)
    }
}
