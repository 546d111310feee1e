use crate::reports;
use clap::Args;
use fretforge_core::config::Config;
use fretforge_core::error::{FfResult, FretForgeError};
use fretforge_core::instrument::InstrumentConfig;
use fretforge_core::naturalness::NeutralNaturalness;
use fretforge_core::pitch::Pitch;
use fretforge_core::solver::Solver;
use serde::Serialize;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub config: Config,

    /// Inline progression: steps separated by spaces, pitches by commas,
    /// e.g. "C3,E3,G3,C4,E4 G3,B3,D4,G4".
    #[arg(long)]
    pub progression: Option<String>,

    /// JSON file holding an array of pitch-name arrays.
    #[arg(long)]
    pub steps: Option<String>,

    /// Emit raw JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveReport {
    paths: Vec<fretforge_core::solver::RankedPath>,
    alternatives: fretforge_core::solver::FingeringAlternatives,
}

pub fn parse_progression(input: &str) -> FfResult<Vec<Vec<Pitch>>> {
    input
        .split_whitespace()
        .map(|step| step.split(',').map(|name| name.parse()).collect())
        .collect()
}

fn load_steps(args: &SolveArgs) -> FfResult<Vec<Vec<Pitch>>> {
    match (&args.progression, &args.steps) {
        (Some(inline), _) => parse_progression(inline),
        (None, Some(path)) => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        (None, None) => Err(FretForgeError::Config(
            "Provide --progression or --steps".to_string(),
        )),
    }
}

pub fn run(args: SolveArgs, instrument: &InstrumentConfig, config: Config) -> FfResult<()> {
    let steps = load_steps(&args)?;
    info!("🎼 Solving {} steps (k = {})", steps.len(), config.solver.k);

    let solver = Solver::new(instrument, config)?;
    let paths = solver.solve(&steps, &NeutralNaturalness)?;
    let alternatives = solver.categorize(&paths);

    if args.json {
        let report = SolveReport {
            paths,
            alternatives,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if paths.is_empty() {
        println!("No steps, nothing to solve.");
        return Ok(());
    }

    reports::print_best_path(&steps, &paths[0]);
    reports::print_ranking(&paths);
    reports::print_alternatives(&alternatives);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_progression() {
        let steps = parse_progression("C4,E4,G4 G3,B3").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].len(), 3);
        assert_eq!(steps[1].len(), 2);
    }

    #[test]
    fn test_parse_progression_rejects_bad_pitch() {
        assert!(parse_progression("C4,X9").is_err());
    }
}
