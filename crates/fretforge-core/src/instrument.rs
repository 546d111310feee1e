use crate::consts::{DEFAULT_BRIDGE_WIDTH_MM, DEFAULT_NUT_WIDTH_MM, DEFAULT_SCALE_LENGTH_MM};
use crate::error::{FfResult, FretForgeError};
use crate::pitch::Pitch;
use crate::position::{Fret, StringIndex};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ordered open-string pitches; index 0 is the lowest-pitched string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuning(Vec<Pitch>);

impl Tuning {
    pub fn new(open_pitches: Vec<Pitch>) -> Self {
        Self(open_pitches)
    }

    pub fn string_count(&self) -> usize {
        self.0.len()
    }

    pub fn open_pitch(&self, string: StringIndex) -> Pitch {
        self.0[string]
    }

    pub fn iter(&self) -> impl Iterator<Item = Pitch> + '_ {
        self.0.iter().copied()
    }
}

/// Plain configuration value describing one instrument. Loaded from JSON or
/// taken from a built-in preset; validated once, then immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentConfig {
    pub name: String,
    pub tuning: Tuning,
    pub fret_count: Fret,
    pub scale_length_mm: f32,
    pub nut_width_mm: f32,
    pub bridge_width_mm: f32,
}

impl InstrumentConfig {
    pub fn validate(&self) -> FfResult<()> {
        if self.tuning.string_count() == 0 {
            return Err(FretForgeError::Validation(
                "Instrument must have at least one string".to_string(),
            ));
        }
        if self.fret_count == 0 {
            return Err(FretForgeError::Validation(
                "Instrument must have a positive fret count".to_string(),
            ));
        }
        if self.scale_length_mm <= 0.0
            || !self.scale_length_mm.is_finite()
            || self.nut_width_mm <= 0.0
            || self.bridge_width_mm <= 0.0
        {
            return Err(FretForgeError::Validation(format!(
                "Instrument '{}' has non-positive physical dimensions",
                self.name
            )));
        }
        Ok(())
    }

    pub fn string_count(&self) -> usize {
        self.tuning.string_count()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: InstrumentConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Standard 6-string guitar, E2 A2 D3 G3 B3 E4.
    pub fn standard_guitar() -> Self {
        Self {
            name: "Standard Guitar".to_string(),
            tuning: Tuning::new(
                [40, 45, 50, 55, 59, 64].map(Pitch::from_midi).to_vec(),
            ),
            fret_count: 19,
            scale_length_mm: DEFAULT_SCALE_LENGTH_MM,
            nut_width_mm: DEFAULT_NUT_WIDTH_MM,
            bridge_width_mm: DEFAULT_BRIDGE_WIDTH_MM,
        }
    }

    /// Drop-D: low string down a whole step.
    pub fn drop_d_guitar() -> Self {
        Self {
            name: "Drop D Guitar".to_string(),
            tuning: Tuning::new(
                [38, 45, 50, 55, 59, 64].map(Pitch::from_midi).to_vec(),
            ),
            ..Self::standard_guitar()
        }
    }

    /// 7-string guitar with a low B1.
    pub fn seven_string_guitar() -> Self {
        Self {
            name: "7-String Guitar".to_string(),
            tuning: Tuning::new(
                [35, 40, 45, 50, 55, 59, 64].map(Pitch::from_midi).to_vec(),
            ),
            nut_width_mm: 48.0,
            bridge_width_mm: 58.0,
            ..Self::standard_guitar()
        }
    }

    /// 4-string bass, E1 A1 D2 G2, 34" scale.
    pub fn bass_standard() -> Self {
        Self {
            name: "Standard Bass".to_string(),
            tuning: Tuning::new([28, 33, 38, 43].map(Pitch::from_midi).to_vec()),
            fret_count: 20,
            scale_length_mm: 864.0,
            nut_width_mm: 38.0,
            bridge_width_mm: 57.0,
        }
    }
}
