// Per-topic sentiment rollups.
//
// Joins discovered topic assignments with the externally computed
// avg_sentiment carried on each article. Pure aggregation: no clustering
// logic and no model calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::articles::Article;

/// An article counts as positive above this sentiment and negative below
/// the negated value.
pub const SENTIMENT_THRESHOLD: f64 = 0.05;

/// Sentiment statistics for one discovered topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSentiment {
    pub topic: String,
    pub article_count: usize,
    pub avg_sentiment: f64,
    pub min_sentiment: f64,
    pub max_sentiment: f64,
    pub positive_articles: usize,
    pub negative_articles: usize,
}

/// Aggregate sentiment per topic, sorted by mean sentiment descending.
///
/// Topics with no assigned articles are omitted. Panics if `articles` and
/// `assignments` disagree in length, which means the caller mixed results
/// from different runs.
pub fn aggregate(
    articles: &[Article],
    assignments: &[usize],
    topic_names: &BTreeMap<usize, String>,
) -> Vec<TopicSentiment> {
    assert_eq!(
        articles.len(),
        assignments.len(),
        "sentiment aggregation requires one topic assignment per article"
    );

    let mut stats = Vec::new();

    for (topic_id, topic_name) in topic_names {
        let sentiments: Vec<f64> = assignments
            .iter()
            .zip(articles)
            .filter(|(assigned, _)| **assigned == *topic_id)
            .map(|(_, article)| article.avg_sentiment)
            .collect();

        if sentiments.is_empty() {
            continue;
        }

        let sum: f64 = sentiments.iter().sum();
        let min = sentiments.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = sentiments.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        stats.push(TopicSentiment {
            topic: topic_name.clone(),
            article_count: sentiments.len(),
            avg_sentiment: sum / sentiments.len() as f64,
            min_sentiment: min,
            max_sentiment: max,
            positive_articles: sentiments
                .iter()
                .filter(|s| **s > SENTIMENT_THRESHOLD)
                .count(),
            negative_articles: sentiments
                .iter()
                .filter(|s| **s < -SENTIMENT_THRESHOLD)
                .count(),
        });
    }

    stats.sort_by(|a, b| {
        b.avg_sentiment
            .partial_cmp(&a.avg_sentiment)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    stats
}
