// Cosine-similarity K-Means over TF-IDF vectors.
//
// Centroids are rebuilt from scratch each iteration as the element-wise mean
// of the member vectors; an empty cluster keeps its previous centroid rather
// than being re-seeded mid-run. Assignment scans centroids in cluster-id
// order and the first maximum wins, so similarity ties resolve to the lowest
// cluster id. That tie-break is an artifact of the scan order preserved for
// compatibility, not a deliberate policy.

use rand::seq::index::sample;
use rand::Rng;

use super::similarity::cosine_similarity;

/// Partition `vectors` into `k` clusters, returning one cluster id per input.
///
/// Initial centroids are `k` distinct documents drawn from `rng`; runs are
/// only reproducible when the caller seeds the generator. With fewer
/// documents than clusters the call degenerates to one document per cluster
/// instead of failing. Iteration stops at the first fixed point or after
/// `max_iterations`, whichever comes first; a non-converged assignment is
/// returned as-is.
pub fn cluster<R: Rng + ?Sized>(
    vectors: &[Vec<f64>],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> Vec<usize> {
    if k == 0 || vectors.len() < k {
        // Not enough documents to form k meaningful groups.
        return (0..vectors.len()).collect();
    }

    let mut centroids: Vec<Vec<f64>> = sample(rng, vectors.len(), k)
        .into_iter()
        .map(|i| vectors[i].clone())
        .collect();
    let mut assignments = vec![0usize; vectors.len()];

    for _ in 0..max_iterations {
        // Assignment step: join the most similar centroid.
        let mut next = Vec::with_capacity(vectors.len());
        for vector in vectors {
            let mut best_cluster = 0;
            let mut best_similarity = f64::NEG_INFINITY;
            for (cluster_id, centroid) in centroids.iter().enumerate() {
                let similarity = cosine_similarity(vector, centroid);
                if similarity > best_similarity {
                    best_similarity = similarity;
                    best_cluster = cluster_id;
                }
            }
            next.push(best_cluster);
        }

        if next == assignments {
            break;
        }
        assignments = next;

        // Update step: fresh centroids from the new assignments.
        centroids = (0..k)
            .map(|cluster_id| {
                let members: Vec<&Vec<f64>> = assignments
                    .iter()
                    .zip(vectors)
                    .filter(|(assigned, _)| **assigned == cluster_id)
                    .map(|(_, vector)| vector)
                    .collect();

                if members.is_empty() {
                    // No data to average; the cluster keeps its centroid.
                    return centroids[cluster_id].clone();
                }

                let mut mean = vec![0.0; centroids[cluster_id].len()];
                for member in &members {
                    for (slot, value) in mean.iter_mut().zip(member.iter()) {
                        *slot += value;
                    }
                }
                for slot in &mut mean {
                    *slot /= members.len() as f64;
                }
                mean
            })
            .collect();
    }

    assignments
}
