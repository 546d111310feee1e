use crate::error::{FfResult, FretForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub solver: SolverParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// Style tag forwarded to the naturalness model.
    #[arg(long, default_value = "default")]
    pub style: String,

    /// Number of best paths to retain per state and globally.
    #[arg(long, default_value_t = 5)]
    pub k: usize,

    /// Maximum playable fret span; wider shapes are pruned and unplayable.
    #[arg(long, default_value_t = 6)]
    pub max_span: u8,

    /// Anchor shift (in frets) tolerated before the inertia penalty kicks in.
    #[arg(long, default_value_t = 2)]
    pub max_shift: u8,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            style: "default".to_string(),
            k: 5,
            max_span: 6,
            max_shift: 2,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === STATIC (per-realization, per mm) ===
    #[arg(long, default_value_t = 0.08)]
    pub weight_span: f32,
    #[arg(long, default_value_t = 0.35)]
    pub weight_max_stretch: f32,
    #[arg(long, default_value_t = 0.15)]
    pub weight_avg_stretch: f32,
    #[arg(long, default_value_t = 0.05)]
    pub weight_string_span: f32,
    #[arg(long, default_value_t = 0.12)]
    pub weight_diagonal: f32,

    // === TRANSITION ===
    #[arg(long, default_value_t = 0.30)]
    pub weight_shift: f32,
    #[arg(long, default_value_t = 40.0)]
    pub penalty_position_jump: f32,

    // === STYLE ===
    #[arg(long, default_value_t = 25.0)]
    pub weight_style: f32,

    // === HUMAN-REACH CEILINGS ===
    #[arg(long, default_value_t = 80.0)]
    pub ceiling_stretch_mm: f32,
    #[arg(long, default_value_t = 130.0)]
    pub ceiling_diagonal_mm: f32,

    // === POSITION DISCOUNT BANDS ===
    // Upper fret of each band; anything above the last bound falls in the
    // final factor.
    #[arg(long, default_value = "3,7,12,17")]
    pub position_bands: String,
    #[arg(long, default_value = "1.0,0.92,0.85,0.78,0.72")]
    pub position_factors: String,

    // === DIFFICULTY CLASSIFICATION (mm, 7 bounds for 8 levels) ===
    #[arg(long, default_value = "25,40,55,70,82,95,110")]
    pub difficulty_thresholds_mm: String,

    // === CATEGORIZER ===
    #[arg(long, default_value_t = 7.0)]
    pub high_position_fret: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_span: 0.08,
            weight_max_stretch: 0.35,
            weight_avg_stretch: 0.15,
            weight_string_span: 0.05,
            weight_diagonal: 0.12,
            weight_shift: 0.30,
            penalty_position_jump: 40.0,
            weight_style: 25.0,
            ceiling_stretch_mm: 80.0,
            ceiling_diagonal_mm: 130.0,
            position_bands: "3,7,12,17".to_string(),
            position_factors: "1.0,0.92,0.85,0.78,0.72".to_string(),
            difficulty_thresholds_mm: "25,40,55,70,82,95,110".to_string(),
            high_position_fret: 7.0,
        }
    }
}

impl ScoringWeights {
    pub fn get_position_bands(&self) -> FfResult<[f32; 4]> {
        parse_f32_array::<4>(&self.position_bands, "position_bands")
    }

    pub fn get_position_factors(&self) -> FfResult<[f32; 5]> {
        let factors = parse_f32_array::<5>(&self.position_factors, "position_factors")?;
        if factors.windows(2).any(|w| w[1] > w[0]) {
            return Err(FretForgeError::Config(
                "position_factors must be monotonically non-increasing".to_string(),
            ));
        }
        Ok(factors)
    }

    pub fn get_difficulty_thresholds(&self) -> FfResult<[f32; 7]> {
        let bounds =
            parse_f32_array::<7>(&self.difficulty_thresholds_mm, "difficulty_thresholds_mm")?;
        if bounds.windows(2).any(|w| w[1] <= w[0]) {
            return Err(FretForgeError::Config(
                "difficulty_thresholds_mm must be strictly increasing".to_string(),
            ));
        }
        Ok(bounds)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field.clone();
                }
            };
        }

        update_if_present!(weight_span, "weight_span");
        update_if_present!(weight_max_stretch, "weight_max_stretch");
        update_if_present!(weight_avg_stretch, "weight_avg_stretch");
        update_if_present!(weight_string_span, "weight_string_span");
        update_if_present!(weight_diagonal, "weight_diagonal");

        update_if_present!(weight_shift, "weight_shift");
        update_if_present!(penalty_position_jump, "penalty_position_jump");

        update_if_present!(weight_style, "weight_style");

        update_if_present!(ceiling_stretch_mm, "ceiling_stretch_mm");
        update_if_present!(ceiling_diagonal_mm, "ceiling_diagonal_mm");

        update_if_present!(position_bands, "position_bands");
        update_if_present!(position_factors, "position_factors");
        update_if_present!(difficulty_thresholds_mm, "difficulty_thresholds_mm");

        update_if_present!(high_position_fret, "high_position_fret");
    }
}

fn parse_f32_array<const N: usize>(s: &str, name: &str) -> FfResult<[f32; N]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        return Err(FretForgeError::Config(format!(
            "--{} requires {} values",
            name, N
        )));
    }
    let mut arr = [0.0; N];
    for (i, p) in parts.iter().enumerate() {
        arr[i] = p.trim().parse().map_err(|_| {
            FretForgeError::Config(format!("Invalid number in {}", name))
        })?;
    }
    Ok(arr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arrays_parse() {
        let w = ScoringWeights::default();
        assert_eq!(w.get_position_bands().unwrap(), [3.0, 7.0, 12.0, 17.0]);
        assert_eq!(w.get_position_factors().unwrap().len(), 5);
        assert_eq!(w.get_difficulty_thresholds().unwrap().len(), 7);
    }

    #[test]
    fn test_bad_array_rejected() {
        let w = ScoringWeights {
            position_factors: "1.0,2.0".to_string(),
            ..Default::default()
        };
        assert!(w.get_position_factors().is_err());

        let w = ScoringWeights {
            position_factors: "0.5,0.9,1.0,1.0,1.0".to_string(),
            ..Default::default()
        };
        assert!(w.get_position_factors().is_err(), "must reject increasing factors");
    }
}
