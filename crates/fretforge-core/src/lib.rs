// Internal Modules
pub mod config;
pub mod consts;
pub mod error;
pub mod fretboard;
pub mod instrument;
pub mod mapper;
pub mod naturalness;
pub mod pitch;
pub mod position;
pub mod scorer;
pub mod solver;

pub use config::{Config, ScoringWeights, SolverParams};
pub use error::{FfResult, FretForgeError};
pub use fretboard::Fretboard;
pub use instrument::{InstrumentConfig, Tuning};
pub use naturalness::{NaturalnessModel, NeutralNaturalness};
pub use pitch::Pitch;
pub use position::{Fret, Position, Realization, StringIndex};
pub use scorer::{Difficulty, Scorer, StaticCost};
pub use solver::{Candidate, CancelFlag, FingeringAlternatives, RankedPath, Solver};
