use super::lattice::{Candidate, Lattice};
use crate::consts::NO_PREV;
use crate::scorer::Scorer;
use serde::Serialize;

/// One retained route into a state: accumulated cost plus backtracking
/// indices. `prev_state == NO_PREV` marks stage-0 entries.
#[derive(Debug, Clone, Copy)]
struct PathNode {
    cost: f32,
    prev_state: usize,
    prev_rank: usize,
}

/// Flat rank table for one stage: `state * k + rank` indexing, write-once
/// per cell. Backtracking is pure index arithmetic, with no object graph.
struct RankTable {
    k: usize,
    nodes: Vec<PathNode>,
    counts: Vec<usize>,
}

impl RankTable {
    fn new(states: usize, k: usize) -> Self {
        Self {
            k,
            nodes: vec![
                PathNode {
                    cost: 0.0,
                    prev_state: NO_PREV,
                    prev_rank: 0,
                };
                states * k
            ],
            counts: vec![0; states],
        }
    }

    fn push(&mut self, state: usize, node: PathNode) {
        let rank = self.counts[state];
        debug_assert!(rank < self.k);
        self.nodes[state * self.k + rank] = node;
        self.counts[state] = rank + 1;
    }

    fn get(&self, state: usize, rank: usize) -> PathNode {
        debug_assert!(rank < self.counts[state]);
        self.nodes[state * self.k + rank]
    }

    fn count(&self, state: usize) -> usize {
        self.counts[state]
    }
}

/// One of the K best fingering sequences, cheapest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPath {
    pub steps: Vec<Candidate>,
    pub total_cost: f32,
}

/// K-best Viterbi over the frozen lattice.
///
/// Unlike single-best Viterbi, every state keeps its K cheapest incoming
/// routes: a locally suboptimal predecessor can be globally optimal for a
/// different successor. Ties break by enumeration order (stable sort), so
/// results are fully deterministic.
///
/// Callers guarantee a non-empty lattice with no empty stage.
pub fn run(scorer: &Scorer, lattice: &Lattice, k: usize) -> Vec<RankedPath> {
    debug_assert!(!lattice.is_empty());
    debug_assert!(lattice.iter().all(|stage| !stage.is_empty()));

    let k = k.max(1);
    let n = lattice.len();
    let weight_style = scorer.weights.weight_style;

    let mut tables: Vec<RankTable> = Vec::with_capacity(n);

    let mut first = RankTable::new(lattice[0].len(), k);
    for (state, candidate) in lattice[0].iter().enumerate() {
        first.push(
            state,
            PathNode {
                cost: candidate.node_cost(weight_style),
                prev_state: NO_PREV,
                prev_rank: 0,
            },
        );
    }
    tables.push(first);

    for stage_idx in 1..n {
        let prev_stage = &lattice[stage_idx - 1];
        let stage = &lattice[stage_idx];
        let prev_table = &tables[stage_idx - 1];

        let mut table = RankTable::new(stage.len(), k);
        let mut entries: Vec<PathNode> = Vec::new();

        for (state, candidate) in stage.iter().enumerate() {
            let node_cost = candidate.node_cost(weight_style);
            entries.clear();

            for (prev_state, prev_candidate) in prev_stage.iter().enumerate() {
                let transition =
                    scorer.transition_cost(&prev_candidate.realization, &candidate.realization);
                for prev_rank in 0..prev_table.count(prev_state) {
                    entries.push(PathNode {
                        cost: prev_table.get(prev_state, prev_rank).cost + transition + node_cost,
                        prev_state,
                        prev_rank,
                    });
                }
            }

            entries.sort_by(|a, b| a.cost.total_cmp(&b.cost));
            for entry in entries.iter().take(k) {
                table.push(state, *entry);
            }
        }
        tables.push(table);
    }

    // Collect terminal routes across the whole last stage, then keep the
    // global top K.
    let last = n - 1;
    let mut terminal: Vec<(f32, usize, usize)> = Vec::new();
    for state in 0..lattice[last].len() {
        for rank in 0..tables[last].count(state) {
            terminal.push((tables[last].get(state, rank).cost, state, rank));
        }
    }
    terminal.sort_by(|a, b| a.0.total_cmp(&b.0));
    terminal.truncate(k);

    terminal
        .into_iter()
        .map(|(total_cost, state, rank)| {
            let mut states = vec![0usize; n];
            let mut s = state;
            let mut r = rank;
            for stage_idx in (0..n).rev() {
                states[stage_idx] = s;
                let node = tables[stage_idx].get(s, r);
                s = node.prev_state;
                r = node.prev_rank;
            }
            RankedPath {
                steps: states
                    .iter()
                    .enumerate()
                    .map(|(stage_idx, &st)| lattice[stage_idx][st].clone())
                    .collect(),
                total_cost,
            }
        })
        .collect()
}
