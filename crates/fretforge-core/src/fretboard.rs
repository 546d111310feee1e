use crate::consts::SEMITONES_PER_OCTAVE;
use crate::instrument::{InstrumentConfig, Tuning};
use crate::pitch::Pitch;
use crate::position::{Fret, StringIndex, OPEN_FRET};

/// Precomputed physical geometry of a fretted neck.
///
/// Fret wire distances follow the equal-temperament law
/// `d(f) = scale · (1 − 2^(−f/12))`, so fret slots shrink geometrically
/// toward the body. A finger lands in the middle of its slot, between the
/// previous wire and its own. String spacing widens linearly from nut to
/// bridge.
#[derive(Debug, Clone)]
pub struct Fretboard {
    tuning: Tuning,
    fret_count: Fret,
    scale_length_mm: f32,
    nut_gap_mm: f32,
    bridge_gap_mm: f32,
    fret_wire_mm: Vec<f32>,
    fret_center_mm: Vec<f32>,
}

impl Fretboard {
    pub fn new(config: &InstrumentConfig) -> Self {
        let scale = config.scale_length_mm;
        let gaps = (config.string_count().saturating_sub(1)).max(1) as f32;

        let mut fret_wire_mm = Vec::with_capacity(config.fret_count as usize + 1);
        let mut fret_center_mm = Vec::with_capacity(config.fret_count as usize + 1);
        fret_wire_mm.push(0.0);
        fret_center_mm.push(0.0);
        for f in 1..=config.fret_count as i32 {
            let d = scale * (1.0 - (2.0_f32).powf(-(f as f32) / SEMITONES_PER_OCTAVE));
            let prev = fret_wire_mm[(f - 1) as usize];
            fret_wire_mm.push(d);
            fret_center_mm.push((prev + d) / 2.0);
        }

        Self {
            tuning: config.tuning.clone(),
            fret_count: config.fret_count,
            scale_length_mm: scale,
            nut_gap_mm: config.nut_width_mm / gaps,
            bridge_gap_mm: config.bridge_width_mm / gaps,
            fret_wire_mm,
            fret_center_mm,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn string_count(&self) -> usize {
        self.tuning.string_count()
    }

    pub fn fret_count(&self) -> Fret {
        self.fret_count
    }

    pub fn open_pitch(&self, string: StringIndex) -> Pitch {
        self.tuning.open_pitch(string)
    }

    /// Distance from the nut to fret wire `f`; 0 at the nut itself.
    pub fn distance_from_nut(&self, fret: Fret) -> f32 {
        self.fret_wire_mm[fret as usize]
    }

    /// Where a finger lands for fret `f`: the middle of the slot behind the
    /// wire. 0 for the open string (no finger).
    pub fn fret_center(&self, fret: Fret) -> f32 {
        self.fret_center_mm[fret as usize]
    }

    /// Width of fret slot `f` (wire to wire).
    pub fn fret_width(&self, fret: Fret) -> f32 {
        if fret == OPEN_FRET {
            return 0.0;
        }
        self.fret_wire_mm[fret as usize] - self.fret_wire_mm[fret as usize - 1]
    }

    /// Gap between adjacent strings at `x_mm` from the nut.
    pub fn string_gap_at(&self, x_mm: f32) -> f32 {
        let t = (x_mm / self.scale_length_mm).clamp(0.0, 1.0);
        self.nut_gap_mm + (self.bridge_gap_mm - self.nut_gap_mm) * t
    }

    /// Vertical offset of a string across the neck at `x_mm` from the nut.
    pub fn string_y(&self, string: StringIndex, x_mm: f32) -> f32 {
        string as f32 * self.string_gap_at(x_mm)
    }

    /// Physical `(x, y)` in mm of a finger holding `string` at `fret`.
    pub fn finger_position(&self, string: StringIndex, fret: Fret) -> (f32, f32) {
        let x = self.fret_center(fret);
        (x, self.string_y(string, x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::InstrumentConfig;

    fn standard() -> Fretboard {
        Fretboard::new(&InstrumentConfig::standard_guitar())
    }

    #[test]
    fn test_octave_wire_at_half_scale() {
        let fb = standard();
        let half = fb.distance_from_nut(12);
        assert!((half - 648.0 / 2.0).abs() < 0.01, "got {}", half);
    }

    #[test]
    fn test_fret_widths_shrink_geometrically() {
        let fb = standard();
        for f in 2..=fb.fret_count() {
            assert!(
                fb.fret_width(f) < fb.fret_width(f - 1),
                "fret {} wider than fret {}",
                f,
                f - 1
            );
        }
        // The law is exponential, not linear: the ratio of adjacent widths
        // must stay 2^(-1/12), not drift toward 1.
        let ratio = fb.fret_width(2) / fb.fret_width(1);
        assert!((ratio - (2.0_f32).powf(-1.0 / 12.0)).abs() < 1e-4);
    }

    #[test]
    fn test_string_spacing_widens_toward_bridge() {
        let fb = standard();
        assert!(fb.string_gap_at(600.0) > fb.string_gap_at(10.0));
        let nut_gap = fb.string_gap_at(0.0);
        assert!((nut_gap - 43.0 / 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_open_string_has_zero_center() {
        let fb = standard();
        assert_eq!(fb.fret_center(0), 0.0);
        let (x, y) = fb.finger_position(3, 0);
        assert_eq!(x, 0.0);
        assert!(y > 0.0);
    }
}
