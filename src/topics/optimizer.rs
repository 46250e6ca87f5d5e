// Silhouette-guided search for the number of topics.
//
// Single ascending sweep over [min_k, max_k]: one K-Means run per candidate,
// scored once. There are no restarts, so K-Means init variance means two
// sweeps can disagree; that is an accepted limitation of the greedy search.
// Callers that need stable answers must seed the generator.

use std::collections::BTreeMap;

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use super::{kmeans, silhouette};

/// Sweep cluster counts and pick the best-scoring one.
///
/// `max_k` is capped so the average cluster keeps at least 3 documents, and
/// never drops below `min_k`. Returns the winning k and the full sweep
/// (k → mean silhouette). Ties resolve to the lowest k.
pub fn find_optimal_k<R: Rng + ?Sized>(
    vectors: &[Vec<f64>],
    min_k: usize,
    max_k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> (usize, BTreeMap<usize, f64>) {
    let capped = max_k.min(vectors.len() / 3).max(min_k);

    let pb = ProgressBar::new((capped - min_k + 1) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Sweep [{bar:30}] {pos}/{len}")
            .unwrap(),
    );

    let mut scores_by_k = BTreeMap::new();
    let mut best_k = min_k;
    let mut best_score = f64::NEG_INFINITY;

    for k in min_k..=capped {
        let assignments = kmeans::cluster(vectors, k, max_iterations, rng);
        let (_, mean) = silhouette::score(vectors, &assignments);
        scores_by_k.insert(k, mean);

        if mean > best_score {
            best_score = mean;
            best_k = k;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    (best_k, scores_by_k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_best_k_matches_best_sweep_score() {
        let mut rng = StdRng::seed_from_u64(3);
        let vectors: Vec<Vec<f64>> = (0..12)
            .map(|i| {
                let mut v = vec![0.0; 6];
                v[i % 3] = 1.0;
                v[3 + i % 3] = 0.2;
                v
            })
            .collect();

        let (best_k, scores) = find_optimal_k(&vectors, 2, 10, 50, &mut rng);
        // 12 documents cap the sweep at k = 4
        assert!(scores.keys().all(|&k| (2..=4).contains(&k)));
        assert!((2..=4).contains(&best_k));

        let best = scores[&best_k];
        let max = scores.values().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!((best - max).abs() < 1e-12);
    }

    #[test]
    fn test_single_document_corpus_degenerates_cleanly() {
        let mut rng = StdRng::seed_from_u64(3);
        let vectors = vec![vec![1.0, 0.0]];
        // max_k caps to n/3 = 0 but is floored back up to min_k
        let (best_k, scores) = find_optimal_k(&vectors, 2, 10, 50, &mut rng);
        assert_eq!(best_k, 2);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[&2], 0.0);
    }
}
