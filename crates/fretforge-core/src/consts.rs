/// Semitones per octave; the exponent base of the equal-temperament fret law.
pub const SEMITONES_PER_OCTAVE: f32 = 12.0;

/// Sentinel for "no predecessor" in the DP rank table (stage-0 entries).
pub const NO_PREV: usize = usize::MAX;

/// Default scale length in mm (25.5" steel-string).
pub const DEFAULT_SCALE_LENGTH_MM: f32 = 648.0;

/// Default string-band width at the nut, outer string to outer string.
pub const DEFAULT_NUT_WIDTH_MM: f32 = 43.0;

/// Default string-band width at the bridge saddles.
pub const DEFAULT_BRIDGE_WIDTH_MM: f32 = 52.5;
