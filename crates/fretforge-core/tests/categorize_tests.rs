mod common;

use common::{standard_scorer, standard_solver};
use fretforge_core::instrument::InstrumentConfig;
use fretforge_core::pitch::Pitch;
use fretforge_core::position::{Position, Realization};
use fretforge_core::solver::{categorize, Candidate, RankedPath};

fn realization(frets: &[i32]) -> Realization {
    let cfg = InstrumentConfig::standard_guitar();
    Realization::new(
        frets
            .iter()
            .enumerate()
            .map(|(s, &f)| {
                if f < 0 {
                    Position::Muted { string: s }
                } else {
                    Position::Played {
                        string: s,
                        fret: f as u8,
                        pitch: cfg
                            .tuning
                            .open_pitch(s)
                            .transpose(f)
                            .unwrap_or(Pitch::from_midi(127)),
                    }
                }
            })
            .collect(),
    )
}

fn path(frets_per_step: &[&[i32]], total_cost: f32) -> RankedPath {
    let scorer = standard_scorer();
    RankedPath {
        steps: frets_per_step
            .iter()
            .map(|frets| {
                let r = realization(frets);
                let static_cost = scorer.static_cost(&r);
                Candidate {
                    realization: r,
                    static_cost,
                    naturalness: 1.0,
                }
            })
            .collect(),
        total_cost,
    }
}

#[test]
fn test_buckets_pick_distinct_paths() {
    let open = path(&[&[-1, 3, 2, 0, 1, 0]], 10.0);
    let compact = path(&[&[-1, -1, 5, 5, 6, -1]], 12.0);
    let high = path(&[&[-1, -1, 9, 10, 11, -1]], 15.0);
    let paths = vec![open, compact, high];

    let alts = categorize(&paths, 7.0);

    let open_pick = alts.open_position.expect("open bucket");
    assert_eq!(open_pick.steps[0].realization.tab_string(), "x-3-2-0-1-0");

    let compact_pick = alts.compact.expect("compact bucket");
    assert_eq!(
        compact_pick.steps[0].realization.tab_string(),
        "x-x-5-5-6-x",
        "compact must exclude the open pick and take the tightest spread"
    );

    let high_pick = alts.high_position.expect("high bucket");
    assert_eq!(high_pick.steps[0].realization.tab_string(), "x-x-9-10-11-x");
}

#[test]
fn test_open_bucket_tie_breaks_by_lower_average_fret() {
    // Same open count (2), different hand positions.
    let low = path(&[&[0, 0, 2, 2, -1, -1]], 9.0);
    let high = path(&[&[0, 0, 9, 9, -1, -1]], 8.0);
    let alts = categorize(&[high, low], 7.0);
    let pick = alts.open_position.expect("open bucket");
    assert_eq!(pick.steps[0].realization.tab_string(), "0-0-2-2-x-x");
}

#[test]
fn test_buckets_are_optional() {
    // No open strings, nothing above fret 7: only the compact bucket fires.
    let fretted = path(&[&[-1, -1, 5, 5, 6, -1]], 4.0);
    let alts = categorize(&[fretted], 7.0);
    assert!(alts.open_position.is_none());
    assert!(alts.compact.is_some());
    assert!(alts.high_position.is_none());

    let alts = categorize(&[], 7.0);
    assert!(alts.open_position.is_none());
    assert!(alts.compact.is_none());
    assert!(alts.high_position.is_none());
}

#[test]
fn test_categorize_does_not_mutate_inputs() {
    let paths = vec![
        path(&[&[-1, 3, 2, 0, 1, 0]], 10.0),
        path(&[&[-1, -1, 9, 10, 11, -1]], 15.0),
    ];
    let tabs_before: Vec<String> = paths
        .iter()
        .map(|p| p.steps[0].realization.tab_string())
        .collect();
    let _ = categorize(&paths, 7.0);
    let tabs_after: Vec<String> = paths
        .iter()
        .map(|p| p.steps[0].realization.tab_string())
        .collect();
    assert_eq!(tabs_before, tabs_after);
}

#[test]
fn test_solver_categorize_end_to_end() {
    let solver = standard_solver(8);
    let steps = vec![
        vec!["C3", "E3", "G3", "C4", "E4"]
            .into_iter()
            .map(|n| n.parse::<Pitch>().unwrap())
            .collect::<Vec<_>>(),
    ];
    let paths = solver.solve(&steps, &fretforge_core::NeutralNaturalness).unwrap();
    let alts = solver.categorize(&paths);

    if let Some(open) = &alts.open_position {
        let opens: usize = open
            .steps
            .iter()
            .map(|c| c.realization.open_count())
            .sum();
        assert!(opens > 0);
        // Nothing else in the set has more open strings.
        for p in &paths {
            let o: usize = p.steps.iter().map(|c| c.realization.open_count()).sum();
            assert!(o <= opens);
        }
    }
}
