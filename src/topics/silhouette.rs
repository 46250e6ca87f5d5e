// Silhouette scoring for cluster quality.
//
// For each document: a = mean cosine distance to its own cluster's other
// members, b = the smallest mean distance to any other cluster's members.
// The per-point score (b - a) / max(a, b) rewards tight, well-separated
// clusters. Points that cannot be measured (sole members, or a partition
// with only one populated cluster) score a neutral 0.0 instead of
// poisoning the mean with NaN.
//
// Cost is O(n²) similarity computations, and the optimizer calls this once
// per candidate k. For large corpora this is the dominant cost of the whole
// pipeline.

use std::collections::BTreeMap;

use super::similarity::cosine_similarity;

/// Per-document silhouette scores in [-1, 1] and their corpus mean.
///
/// An empty corpus scores (empty, 0.0). Panics if `vectors` and
/// `assignments` disagree in length.
pub fn score(vectors: &[Vec<f64>], assignments: &[usize]) -> (Vec<f64>, f64) {
    assert_eq!(
        vectors.len(),
        assignments.len(),
        "silhouette scoring requires one assignment per vector"
    );

    if vectors.is_empty() {
        return (Vec::new(), 0.0);
    }

    // Document indices grouped by cluster id.
    let mut members: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, &cluster) in assignments.iter().enumerate() {
        members.entry(cluster).or_default().push(i);
    }

    let mut scores = Vec::with_capacity(vectors.len());
    for (i, &own_cluster) in assignments.iter().enumerate() {
        let own_members = &members[&own_cluster];

        // Sole member: intra-cluster cohesion is unmeasurable.
        if own_members.len() < 2 {
            scores.push(0.0);
            continue;
        }

        let a = mean_distance(vectors, i, own_members);

        // Smallest mean distance to any other populated cluster.
        let b = members
            .iter()
            .filter(|(cluster, _)| **cluster != own_cluster)
            .map(|(_, docs)| mean_distance(vectors, i, docs))
            .fold(f64::INFINITY, f64::min);

        if b.is_infinite() {
            // Only one populated cluster: separation is undefined.
            scores.push(0.0);
            continue;
        }

        let denominator = a.max(b);
        scores.push(if denominator == 0.0 {
            0.0
        } else {
            (b - a) / denominator
        });
    }

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    (scores, mean)
}

/// Mean cosine distance from document `i` to every document in `docs`,
/// skipping `i` itself.
fn mean_distance(vectors: &[Vec<f64>], i: usize, docs: &[usize]) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for &j in docs {
        if j == i {
            continue;
        }
        total += 1.0 - cosine_similarity(&vectors[i], &vectors[j]);
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
