// Topic keyword extraction and naming.
//
// A topic's keywords are the terms with the highest average TF-IDF weight
// across its member documents. Names take the top two keywords, title-cased
// and joined with " & "; a topic with no members falls back to a synthetic
// "Topic N" name.

use std::collections::BTreeMap;

use super::tfidf::Vocabulary;

/// Top-`top_n` keywords for every topic id in `[0, num_topics)`.
///
/// Topics with no member documents get an empty list, never an error. Equal
/// average weights are broken lexicographically so the ranking is
/// reproducible. Panics if `vectors` and `assignments` disagree in length.
pub fn top_keywords(
    vectors: &[Vec<f64>],
    assignments: &[usize],
    vocab: &Vocabulary,
    num_topics: usize,
    top_n: usize,
) -> BTreeMap<usize, Vec<String>> {
    assert_eq!(
        vectors.len(),
        assignments.len(),
        "keyword extraction requires one assignment per vector"
    );

    let mut keywords_by_topic = BTreeMap::new();

    for topic_id in 0..num_topics {
        let members: Vec<usize> = assignments
            .iter()
            .enumerate()
            .filter(|(_, assigned)| **assigned == topic_id)
            .map(|(i, _)| i)
            .collect();

        if members.is_empty() {
            keywords_by_topic.insert(topic_id, Vec::new());
            continue;
        }

        // Average each vocabulary term's weight over the member documents.
        let mut averages = vec![0.0; vocab.len()];
        for &doc in &members {
            for (slot, weight) in averages.iter_mut().zip(&vectors[doc]) {
                *slot += weight;
            }
        }
        for slot in &mut averages {
            *slot /= members.len() as f64;
        }

        let mut ranked: Vec<(usize, f64)> = averages.into_iter().enumerate().collect();
        ranked.sort_by(|(col_a, weight_a), (col_b, weight_b)| {
            weight_b
                .partial_cmp(weight_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| vocab.term(*col_a).cmp(vocab.term(*col_b)))
        });

        let top: Vec<String> = ranked
            .iter()
            .take(top_n)
            .map(|(column, _)| vocab.term(*column).to_string())
            .collect();
        keywords_by_topic.insert(topic_id, top);
    }

    keywords_by_topic
}

/// Human-readable topic name derived from its keyword list.
///
/// Joins the top two keywords with " & " and title-cases the result; an
/// empty keyword list yields "Topic N" (1-based, matching the report
/// numbering readers see).
pub fn topic_name(keywords: &[String], topic_id: usize) -> String {
    if keywords.is_empty() {
        return format!("Topic {}", topic_id + 1);
    }

    let joined = keywords
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(" & ");
    title_case(&joined)
}

/// Uppercase the first letter of every space-separated word.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::tfidf;

    #[test]
    fn test_topic_name_from_keywords() {
        let keywords = vec!["machine".to_string(), "learning".to_string(), "model".to_string()];
        assert_eq!(topic_name(&keywords, 0), "Machine & Learning");
    }

    #[test]
    fn test_topic_name_single_keyword() {
        let keywords = vec!["recycling".to_string()];
        assert_eq!(topic_name(&keywords, 4), "Recycling");
    }

    #[test]
    fn test_topic_name_fallback_is_one_based() {
        assert_eq!(topic_name(&[], 0), "Topic 1");
        assert_eq!(topic_name(&[], 6), "Topic 7");
    }

    #[test]
    fn test_empty_topic_gets_empty_keywords() {
        let documents = vec![
            vec!["alpha".to_string(), "beta".to_string()],
            vec!["alpha".to_string(), "gamma".to_string()],
        ];
        let (vectors, vocab) = tfidf::fit_transform(&documents);
        // Both documents in topic 0; topic 1 has no members
        let keywords = top_keywords(&vectors, &[0, 0], &vocab, 2, 5);
        assert!(!keywords[&0].is_empty());
        assert!(keywords[&1].is_empty());
    }

    #[test]
    fn test_distinctive_terms_rank_first() {
        let documents = vec![
            vec!["budget".to_string(), "shared".to_string()],
            vec!["budget".to_string(), "shared".to_string()],
            vec!["garden".to_string(), "shared".to_string()],
        ];
        let (vectors, vocab) = tfidf::fit_transform(&documents);
        let keywords = top_keywords(&vectors, &[0, 0, 1], &vocab, 2, 1);
        // "shared" is in every document (idf 0); the distinctive term wins
        assert_eq!(keywords[&0], vec!["budget".to_string()]);
        assert_eq!(keywords[&1], vec!["garden".to_string()]);
    }
}
