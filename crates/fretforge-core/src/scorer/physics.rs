use super::metrics::euclidean_dist;
use crate::fretboard::Fretboard;
use crate::position::{Fret, Realization, StringIndex};
use itertools::Itertools;

/// Raw physical measurement of the fretting hand for one realization,
/// before any position discount is applied. All distances in mm.
#[derive(Debug, Default, PartialEq)]
pub struct HandShape {
    pub fretted_count: usize,
    pub min_fret: Fret,
    pub max_fret: Fret,
    pub fret_span: u8,
    /// Horizontal distance between the outermost fret centers.
    pub span_mm: f32,
    /// Largest Euclidean gap between fingers adjacent in string order.
    pub max_stretch_mm: f32,
    pub avg_stretch_mm: f32,
    /// Vertical reach across strings at the hand's average position.
    pub string_span_mm: f32,
    /// Diagonal reach combining horizontal span and vertical string span.
    pub diagonal_mm: f32,
    pub avg_fret: f32,
}

/// Measure the hand over the fretted (non-open, non-muted) positions.
/// Open and muted strings cost nothing to hold.
pub fn analyze_hand_shape(fb: &Fretboard, realization: &Realization) -> HandShape {
    let fretted: Vec<(StringIndex, Fret)> = realization.fretted().collect();
    if fretted.is_empty() {
        return HandShape::default();
    }

    let mut min_fret = Fret::MAX;
    let mut max_fret = 0;
    let mut fret_sum = 0.0;
    for &(_, f) in &fretted {
        min_fret = min_fret.min(f);
        max_fret = max_fret.max(f);
        fret_sum += f as f32;
    }
    let avg_fret = fret_sum / fretted.len() as f32;
    let span_mm = fb.fret_center(max_fret) - fb.fret_center(min_fret);

    let fingers: Vec<(f32, f32)> = fretted
        .iter()
        .map(|&(s, f)| fb.finger_position(s, f))
        .collect();

    let mut max_stretch_mm = 0.0f32;
    let mut stretch_sum = 0.0f32;
    let mut pair_count = 0usize;
    for ((x1, y1), (x2, y2)) in fingers.iter().tuple_windows() {
        let d = euclidean_dist(*x1, *y1, *x2, *y2);
        max_stretch_mm = max_stretch_mm.max(d);
        stretch_sum += d;
        pair_count += 1;
    }
    let avg_stretch_mm = if pair_count > 0 {
        stretch_sum / pair_count as f32
    } else {
        0.0
    };

    let avg_x = fingers.iter().map(|(x, _)| x).sum::<f32>() / fingers.len() as f32;
    let lo_string = fretted.iter().map(|&(s, _)| s).min().unwrap_or(0);
    let hi_string = fretted.iter().map(|&(s, _)| s).max().unwrap_or(0);
    let string_span_mm = fb.string_y(hi_string, avg_x) - fb.string_y(lo_string, avg_x);

    let diagonal_mm = euclidean_dist(0.0, 0.0, span_mm, string_span_mm);

    HandShape {
        fretted_count: fretted.len(),
        min_fret,
        max_fret,
        fret_span: max_fret - min_fret,
        span_mm,
        max_stretch_mm,
        avg_stretch_mm,
        string_span_mm,
        diagonal_mm,
        avg_fret,
    }
}
