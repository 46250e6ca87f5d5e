// Topic discovery orchestration: preprocess → vectorize → cluster → label.
//
// One call runs the whole unsupervised pipeline. With auto-optimization on
// (the default), the cluster count comes from a silhouette-scored sweep
// instead of the configured num_topics. Clustering inherits K-Means'
// random initialization, so two runs over the same corpus can produce
// different partitions unless a seed is set.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::articles::Article;

use super::preprocess::Preprocessor;
use super::{kmeans, labeler, optimizer, silhouette, tfidf};

/// Tunables for a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Number of topics when auto-optimization is off.
    pub num_topics: usize,
    /// Topics smaller than this are excluded from the valid-topic view.
    pub min_articles_per_topic: usize,
    /// Pick the cluster count by silhouette sweep instead of num_topics.
    pub auto_optimize: bool,
    /// Lower bound of the auto-optimization sweep.
    pub min_k: usize,
    /// Upper bound of the auto-optimization sweep (capped by corpus size).
    pub max_k: usize,
    /// Keywords kept per topic.
    pub top_keywords: usize,
    /// K-Means iteration cap.
    pub max_iterations: usize,
    /// Seed for centroid initialization; None draws from the OS.
    pub seed: Option<u64>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            num_topics: 10,
            min_articles_per_topic: 2,
            auto_optimize: true,
            min_k: 2,
            max_k: 10,
            top_keywords: 5,
            max_iterations: 50,
            seed: None,
        }
    }
}

/// The outcome of one discovery run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicResult {
    /// Cluster id per article, in input order. May reference topics that
    /// did not survive the minimum-size filter.
    pub topic_assignments: Vec<usize>,
    pub topic_names: BTreeMap<usize, String>,
    pub topic_keywords: BTreeMap<usize, Vec<String>>,
    pub topic_sizes: BTreeMap<usize, usize>,
    /// Names of the topics that meet the minimum-size threshold.
    pub valid_topics: BTreeMap<usize, String>,
    /// The k actually used for clustering.
    pub num_topics: usize,
    /// Mean silhouette score of the final clustering.
    pub silhouette_score: f64,
    /// Sweep results when auto-optimization ran, empty otherwise.
    pub silhouette_scores_by_k: BTreeMap<usize, f64>,
}

impl TopicResult {
    /// Per-article (topic name, keywords) pairs for report columns.
    ///
    /// Falls back to a synthetic name for assignments whose topic carries
    /// no name, so the output always lines up with the article list.
    pub fn article_labels(&self) -> Vec<(String, Vec<String>)> {
        self.topic_assignments
            .iter()
            .map(|id| {
                let name = self
                    .topic_names
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| format!("Topic {id}"));
                let keywords = self.topic_keywords.get(id).cloned().unwrap_or_default();
                (name, keywords)
            })
            .collect()
    }
}

/// Discovers what articles are about without predefined categories.
pub struct TopicDiscovery {
    config: DiscoveryConfig,
    preprocessor: Preprocessor,
}

impl TopicDiscovery {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self {
            config,
            preprocessor: Preprocessor::new(),
        }
    }

    /// Run the full unsupervised pipeline over `articles`.
    pub fn discover(&self, articles: &[Article]) -> TopicResult {
        info!(articles = articles.len(), "Discovering topics");

        // Tokenize content plus title per article.
        let documents: Vec<Vec<String>> = articles
            .iter()
            .map(|a| {
                self.preprocessor
                    .tokenize(&format!("{} {}", a.content, a.title))
            })
            .collect();

        info!("Computing TF-IDF vectors");
        let (vectors, vocab) = tfidf::fit_transform(&documents);

        let mut rng: StdRng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let (k, scores_by_k) = if self.config.auto_optimize {
            info!(
                min_k = self.config.min_k,
                max_k = self.config.max_k,
                "Optimizing cluster count via silhouette sweep"
            );
            optimizer::find_optimal_k(
                &vectors,
                self.config.min_k,
                self.config.max_k,
                self.config.max_iterations,
                &mut rng,
            )
        } else {
            (self.config.num_topics, BTreeMap::new())
        };

        info!(k, "Clustering articles");
        let assignments = kmeans::cluster(&vectors, k, self.config.max_iterations, &mut rng);
        let (_, silhouette_score) = silhouette::score(&vectors, &assignments);

        let topic_keywords = labeler::top_keywords(
            &vectors,
            &assignments,
            &vocab,
            k,
            self.config.top_keywords,
        );

        let mut topic_names = BTreeMap::new();
        for (&topic_id, keywords) in &topic_keywords {
            topic_names.insert(topic_id, labeler::topic_name(keywords, topic_id));
        }

        let mut topic_sizes: BTreeMap<usize, usize> = BTreeMap::new();
        for &cluster in &assignments {
            *topic_sizes.entry(cluster).or_insert(0) += 1;
        }

        let valid_topics: BTreeMap<usize, String> = topic_names
            .iter()
            .filter(|(id, _)| {
                topic_sizes.get(*id).copied().unwrap_or(0) >= self.config.min_articles_per_topic
            })
            .map(|(id, name)| (*id, name.clone()))
            .collect();

        info!(
            discovered = valid_topics.len(),
            silhouette = silhouette_score,
            "Topic discovery complete"
        );
        for (topic_id, name) in &valid_topics {
            let size = topic_sizes.get(topic_id).copied().unwrap_or(0);
            let keywords = topic_keywords
                .get(topic_id)
                .map(|kw| kw.iter().take(3).cloned().collect::<Vec<_>>().join(", "))
                .unwrap_or_default();
            info!("  - {name}: {size} articles ({keywords})");
        }

        TopicResult {
            topic_assignments: assignments,
            topic_names,
            topic_keywords,
            topic_sizes,
            valid_topics,
            num_topics: k,
            silhouette_score,
            silhouette_scores_by_k: scores_by_k,
        }
    }
}
