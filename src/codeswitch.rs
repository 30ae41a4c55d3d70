//! Substitution selection and sentence synthesis.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alignment::AlignmentGraph;

/// Picks the target positions to substitute: the degree-1 (unambiguously
/// aligned) positions, shuffled with the supplied RNG, then truncated to
/// `floor(target_len * fraction)`.
///
/// The cap is computed from the target sentence length, not from the eligible
/// count: a short eligible set is kept whole, a large one is cut to the cap.
pub fn select_positions<R: Rng>(graph: &AlignmentGraph, fraction: f64, rng: &mut R) -> Vec<usize> {
    let mut eligible: Vec<usize> = (0..graph.target_len())
        .filter(|&j| graph.degree(j) == 1)
        .collect();
    eligible.shuffle(rng);
    let cap = (graph.target_len() as f64 * fraction) as usize;
    eligible.truncate(cap);
    eligible
}

/// Copies the target sentence and replaces each selected position with its
/// aligned source token. Inputs are untouched; output length always equals the
/// target length.
pub fn synthesize<S: AsRef<str>>(
    target: &[S],
    source: &[S],
    graph: &AlignmentGraph,
    selected: &[usize],
) -> Vec<String> {
    let mut out: Vec<String> = target.iter().map(|t| t.as_ref().to_string()).collect();
    for &j in selected {
        if let Some(i) = graph.partner(j) {
            out[j] = source[i].as_ref().to_string();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::AlignmentEdge;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn graph(source_len: usize, target_len: usize, pairs: &[(usize, usize)]) -> AlignmentGraph {
        let edges: Vec<AlignmentEdge> = pairs
            .iter()
            .map(|&(source, target)| AlignmentEdge { source, target })
            .collect();
        AlignmentGraph::build(source_len, target_len, &edges).expect("build")
    }

    #[test]
    fn only_degree_one_positions_selected() {
        // position 1 is doubly aligned, position 2 unaligned
        let g = graph(5, 5, &[(0, 0), (1, 1), (2, 1), (3, 3), (4, 4)]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            for &j in &select_positions(&g, 1.0, &mut rng) {
                assert_eq!(g.degree(j), 1);
            }
        }
    }

    #[test]
    fn cap_uses_target_length_not_eligible_count() {
        // 10 target positions, only 2 eligible; fraction 0.5 caps at 5, so
        // both eligible positions survive.
        let g = graph(10, 10, &[(0, 0), (1, 1)]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut selected = select_positions(&g, 0.5, &mut rng);
        selected.sort_unstable();
        assert_eq!(selected, vec![0, 1]);

        // all 10 eligible, fraction 0.2 caps at 2
        let g = graph(10, 10, &(0..10).map(|k| (k, k)).collect::<Vec<_>>());
        let selected = select_positions(&g, 0.2, &mut rng);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn cap_is_floored() {
        // 4 eligible positions, fraction 0.2: floor(4 * 0.2) == 0
        let g = graph(4, 4, &[(0, 0), (1, 1), (2, 2), (3, 3)]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_positions(&g, 0.2, &mut rng).is_empty());
    }

    #[test]
    fn fraction_zero_selects_nothing() {
        let g = graph(6, 6, &(0..6).map(|k| (k, k)).collect::<Vec<_>>());
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_positions(&g, 0.0, &mut rng).is_empty());
    }

    #[test]
    fn synthesize_replaces_only_selected() {
        let target = ["saya", "suka", "makan", "nasi"];
        let source = ["i", "like", "eating", "rice"];
        let g = graph(4, 4, &[(0, 0), (1, 1), (2, 2), (3, 3)]);

        let out = synthesize(&target, &source, &g, &[1, 3]);
        assert_eq!(out, vec!["saya", "like", "makan", "rice"]);

        let out = synthesize(&target, &source, &g, &[]);
        assert_eq!(out, target.to_vec());
    }

    #[test]
    fn synthesize_preserves_length() {
        let target = ["a", "b", "c", "d", "e"];
        let source = ["v", "w", "x", "y", "z"];
        let g = graph(5, 5, &[(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)]);
        let out = synthesize(&target, &source, &g, &[0, 2, 4]);
        assert_eq!(out.len(), target.len());
        assert_eq!(out, vec!["z", "b", "x", "d", "v"]);
    }
}
