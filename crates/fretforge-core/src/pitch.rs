use crate::error::FretForgeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Absolute, octave-qualified pitch stored as a MIDI note number (C4 = 60).
///
/// Serialized as scientific pitch notation (`"E2"`, `"F#3"`, `"Bb4"`) so
/// tunings and step files stay human-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pitch(u8);

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

impl Pitch {
    pub fn from_midi(midi: u8) -> Self {
        Self(midi)
    }

    pub fn midi(&self) -> u8 {
        self.0
    }

    /// Octave in scientific notation (C4 = 60 => 4).
    pub fn octave(&self) -> i32 {
        self.0 as i32 / 12 - 1
    }

    pub fn pitch_class(&self) -> u8 {
        self.0 % 12
    }

    /// Signed semitone distance from `other` to `self`.
    pub fn semitones_from(&self, other: Pitch) -> i32 {
        self.0 as i32 - other.0 as i32
    }

    pub fn transpose(&self, semitones: i32) -> Option<Pitch> {
        let midi = self.0 as i32 + semitones;
        if (0..=127).contains(&midi) {
            Some(Pitch(midi as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            SHARP_NAMES[self.pitch_class() as usize],
            self.octave()
        )
    }
}

impl FromStr for Pitch {
    type Err = FretForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(|| {
            FretForgeError::Validation("Empty pitch name".to_string())
        })?;

        let class: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => {
                return Err(FretForgeError::Validation(format!(
                    "Unknown note letter in '{}'",
                    trimmed
                )))
            }
        };

        let rest: String = chars.collect();
        let mut accidental = 0i32;
        let mut idx = 0;
        for c in rest.chars() {
            match c {
                '#' | 's' => accidental += 1,
                'b' => accidental -= 1,
                _ => break,
            }
            idx += c.len_utf8();
        }

        let octave: i32 = rest[idx..].parse().map_err(|_| {
            FretForgeError::Validation(format!("Missing octave in pitch '{}'", trimmed))
        })?;

        let midi = (octave + 1) * 12 + class + accidental;
        if !(0..=127).contains(&midi) {
            return Err(FretForgeError::Validation(format!(
                "Pitch '{}' is outside the MIDI range",
                trimmed
            )));
        }
        Ok(Pitch(midi as u8))
    }
}

impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Pitch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
