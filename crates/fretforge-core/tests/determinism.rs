mod common;

use common::{c_major_open_step, g_chord_step, standard_solver};
use fretforge_core::naturalness::NeutralNaturalness;
use fretforge_core::solver::RankedPath;

fn fingerprint(paths: &[RankedPath]) -> Vec<(Vec<String>, u32)> {
    paths
        .iter()
        .map(|p| {
            (
                p.steps
                    .iter()
                    .map(|c| c.realization.tab_string())
                    .collect(),
                p.total_cost.to_bits(),
            )
        })
        .collect()
}

#[test]
fn test_solver_determinism() {
    let steps = vec![
        c_major_open_step(),
        g_chord_step(),
        c_major_open_step(),
        g_chord_step(),
    ];

    // Two independent solver instances; the parallel candidate phase must
    // not leak scheduling order into the results.
    let run_a = standard_solver(5).solve(&steps, &NeutralNaturalness).unwrap();
    let run_b = standard_solver(5).solve(&steps, &NeutralNaturalness).unwrap();

    assert_eq!(fingerprint(&run_a), fingerprint(&run_b));
}

#[test]
fn test_determinism_across_repeated_calls() {
    let solver = standard_solver(3);
    let steps = vec![c_major_open_step(), g_chord_step()];
    let first = fingerprint(&solver.solve(&steps, &NeutralNaturalness).unwrap());
    for _ in 0..5 {
        let again = fingerprint(&solver.solve(&steps, &NeutralNaturalness).unwrap());
        assert_eq!(first, again);
    }
}
