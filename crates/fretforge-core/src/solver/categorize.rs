use super::kbest::RankedPath;
use crate::scorer::metrics::std_dev;
use serde::Serialize;

/// Human-meaningful buckets picked out of the K best raw paths. Every
/// bucket is optional; picks are clones and never mutate the inputs.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FingeringAlternatives {
    /// Most open strings, tie-broken by lowest average fret.
    pub open_position: Option<RankedPath>,
    /// Tightest hand movement: minimum spread of fretted positions.
    pub compact: Option<RankedPath>,
    /// Highest average fret above the threshold.
    pub high_position: Option<RankedPath>,
}

fn path_open_count(path: &RankedPath) -> usize {
    path.steps
        .iter()
        .map(|c| c.realization.open_count())
        .sum()
}

fn path_fretted_frets(path: &RankedPath) -> Vec<f32> {
    path.steps
        .iter()
        .flat_map(|c| c.realization.fretted().map(|(_, f)| f as f32))
        .collect()
}

fn path_avg_fret(path: &RankedPath) -> f32 {
    let frets = path_fretted_frets(path);
    if frets.is_empty() {
        return 0.0;
    }
    frets.iter().sum::<f32>() / frets.len() as f32
}

/// Select at most one representative path per named style bucket.
pub fn categorize(paths: &[RankedPath], high_position_fret: f32) -> FingeringAlternatives {
    let mut taken: Vec<usize> = Vec::new();

    // Open/compact-low: maximize open strings.
    let open_idx = paths
        .iter()
        .enumerate()
        .filter(|(_, p)| path_open_count(p) > 0)
        .fold(None::<usize>, |best, (i, p)| match best {
            None => Some(i),
            Some(b) => {
                let (bc, ic) = (path_open_count(&paths[b]), path_open_count(p));
                if ic > bc || (ic == bc && path_avg_fret(p) < path_avg_fret(&paths[b])) {
                    Some(i)
                } else {
                    Some(b)
                }
            }
        });
    if let Some(i) = open_idx {
        taken.push(i);
    }

    // Compact/jazz: minimum spread of fretted positions among the rest.
    let compact_idx = paths
        .iter()
        .enumerate()
        .filter(|(i, p)| !taken.contains(i) && !path_fretted_frets(p).is_empty())
        .fold(None::<usize>, |best, (i, p)| match best {
            None => Some(i),
            Some(b) => {
                if std_dev(&path_fretted_frets(p)) < std_dev(&path_fretted_frets(&paths[b])) {
                    Some(i)
                } else {
                    Some(b)
                }
            }
        });
    if let Some(i) = compact_idx {
        taken.push(i);
    }

    // Higher inversions: above the fret threshold, highest wins.
    let high_idx = paths
        .iter()
        .enumerate()
        .filter(|(i, p)| !taken.contains(i) && path_avg_fret(p) > high_position_fret)
        .fold(None::<usize>, |best, (i, p)| match best {
            None => Some(i),
            Some(b) => {
                if path_avg_fret(p) > path_avg_fret(&paths[b]) {
                    Some(i)
                } else {
                    Some(b)
                }
            }
        });

    FingeringAlternatives {
        open_position: open_idx.map(|i| paths[i].clone()),
        compact: compact_idx.map(|i| paths[i].clone()),
        high_position: high_idx.map(|i| paths[i].clone()),
    }
}
