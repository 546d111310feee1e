#![allow(dead_code)]

use fretforge_core::config::{Config, ScoringWeights, SolverParams};
use fretforge_core::fretboard::Fretboard;
use fretforge_core::instrument::InstrumentConfig;
use fretforge_core::pitch::Pitch;
use fretforge_core::scorer::Scorer;
use fretforge_core::solver::Solver;

pub fn standard_fretboard() -> Fretboard {
    Fretboard::new(&InstrumentConfig::standard_guitar())
}

pub fn standard_scorer() -> Scorer {
    Scorer::new(
        standard_fretboard(),
        ScoringWeights::default(),
        &SolverParams::default(),
    )
    .expect("default weights must parse")
}

pub fn standard_solver(k: usize) -> Solver {
    let config = Config {
        solver: SolverParams {
            k,
            ..Default::default()
        },
        ..Default::default()
    };
    Solver::new(&InstrumentConfig::standard_guitar(), config).expect("solver must build")
}

pub fn pitches(names: &[&str]) -> Vec<Pitch> {
    names.iter().map(|n| n.parse().expect("pitch name")).collect()
}

/// The open C-major voicing's exact pitch multiset (x-3-2-0-1-0).
pub fn c_major_open_step() -> Vec<Pitch> {
    pitches(&["C3", "E3", "G3", "C4", "E4"])
}

/// The open-position G-chord fragment used in the two-step scenario.
pub fn g_chord_step() -> Vec<Pitch> {
    pitches(&["G3", "B3", "D4", "G4"])
}
