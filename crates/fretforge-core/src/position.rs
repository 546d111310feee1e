use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};

/// 0-based string index; the lowest-pitched string is 0.
pub type StringIndex = usize;

/// Fret offset from the nut; 0 is the open string.
pub type Fret = u8;

pub const OPEN_FRET: Fret = 0;

/// One string's state inside a realization. Muted is its own variant rather
/// than a negative fret, so it can never be confused with a playable offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Position {
    Muted {
        string: StringIndex,
    },
    Played {
        string: StringIndex,
        fret: Fret,
        pitch: Pitch,
    },
}

impl Position {
    pub fn string(&self) -> StringIndex {
        match self {
            Position::Muted { string } => *string,
            Position::Played { string, .. } => *string,
        }
    }

    pub fn played_pitch(&self) -> Option<Pitch> {
        match self {
            Position::Muted { .. } => None,
            Position::Played { pitch, .. } => Some(*pitch),
        }
    }

    /// `(string, fret)` when a finger is actually down (fret > 0).
    pub fn fretted(&self) -> Option<(StringIndex, Fret)> {
        match self {
            Position::Played { string, fret, .. } if *fret > OPEN_FRET => Some((*string, *fret)),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Position::Played { fret, .. } if *fret == OPEN_FRET)
    }
}

/// One way of fretting the instrument for a single step: exactly one
/// `Position` per string, in string order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realization {
    positions: Vec<Position>,
}

impl Realization {
    pub fn new(positions: Vec<Position>) -> Self {
        debug_assert!(positions
            .iter()
            .enumerate()
            .all(|(i, p)| p.string() == i));
        Self { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn string_count(&self) -> usize {
        self.positions.len()
    }

    pub fn played(&self) -> impl Iterator<Item = (StringIndex, Fret, Pitch)> + '_ {
        self.positions.iter().filter_map(|p| match p {
            Position::Played {
                string,
                fret,
                pitch,
            } => Some((*string, *fret, *pitch)),
            Position::Muted { .. } => None,
        })
    }

    /// Fretted positions (finger down, fret > 0), in string order.
    pub fn fretted(&self) -> impl Iterator<Item = (StringIndex, Fret)> + '_ {
        self.positions.iter().filter_map(|p| p.fretted())
    }

    /// Sorted multiset of sounding pitches.
    pub fn pitches(&self) -> Vec<Pitch> {
        let mut out: Vec<Pitch> = self.played().map(|(_, _, p)| p).collect();
        out.sort();
        out
    }

    /// Lowest non-open fret, the hand's reference position. `None` for
    /// all-open/all-muted realizations, which anchor anywhere for free.
    pub fn anchor_fret(&self) -> Option<Fret> {
        self.fretted().map(|(_, f)| f).min()
    }

    pub fn open_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_open()).count()
    }

    pub fn fretted_count(&self) -> usize {
        self.fretted().count()
    }

    /// Span in frets over fretted positions only; 0 when fewer than two
    /// fingers are down.
    pub fn fret_span(&self) -> u8 {
        let mut min = Fret::MAX;
        let mut max = OPEN_FRET;
        for (_, f) in self.fretted() {
            min = min.min(f);
            max = max.max(f);
        }
        if min == Fret::MAX {
            0
        } else {
            max - min
        }
    }

    /// Mean fret of fretted positions; 0.0 when none.
    pub fn avg_fret(&self) -> f32 {
        let frets: Vec<Fret> = self.fretted().map(|(_, f)| f).collect();
        if frets.is_empty() {
            return 0.0;
        }
        frets.iter().map(|&f| f as f32).sum::<f32>() / frets.len() as f32
    }

    /// Low-to-high fret string, e.g. `x-3-2-0-1-0`.
    pub fn tab_string(&self) -> String {
        self.positions
            .iter()
            .map(|p| match p {
                Position::Muted { .. } => "x".to_string(),
                Position::Played { fret, .. } => fret.to_string(),
            })
            .collect::<Vec<_>>()
            .join("-")
    }
}
