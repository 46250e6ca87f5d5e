// From-scratch TF-IDF vectorization.
//
// Every document becomes a dense weight vector over a shared vocabulary:
// tf = term count / document length, idf = ln(N / df). Terms absent from a
// document keep an explicit 0.0 so that term-wise operations between any two
// vectors line up by index.
//
// The vocabulary is sorted lexicographically, which makes the vector layout
// (and every downstream centroid and keyword ranking) reproducible across
// runs. There is no randomness anywhere in this stage.

use std::collections::{HashMap, HashSet};

/// The corpus vocabulary: sorted distinct terms plus a term → column map.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    fn from_documents(documents: &[Vec<String>]) -> Self {
        let mut distinct: HashSet<&str> = HashSet::new();
        for doc in documents {
            for token in doc {
                distinct.insert(token);
            }
        }

        let mut terms: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        terms.sort();

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        Self { terms, index }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The term stored at a vector column.
    pub fn term(&self, column: usize) -> &str {
        &self.terms[column]
    }

    /// The vector column for a term, if it exists in the corpus.
    pub fn column(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// All terms in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Compute TF-IDF vectors for a tokenized corpus.
///
/// Returns one dense vector per document, aligned to the returned
/// vocabulary. An empty document produces an all-zero vector rather than an
/// error; a term present in every document gets idf = 0 and therefore
/// weight 0 everywhere.
pub fn fit_transform(documents: &[Vec<String>]) -> (Vec<Vec<f64>>, Vocabulary) {
    let vocab = Vocabulary::from_documents(documents);
    let num_docs = documents.len();

    // Document frequency: how many documents contain each term at least once.
    let mut df = vec![0usize; vocab.len()];
    for doc in documents {
        let mut seen: HashSet<usize> = HashSet::new();
        for token in doc {
            if let Some(column) = vocab.column(token) {
                seen.insert(column);
            }
        }
        for column in seen {
            df[column] += 1;
        }
    }

    let mut vectors = Vec::with_capacity(num_docs);
    for doc in documents {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in doc {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let total_terms = doc.len();
        let mut vector = vec![0.0; vocab.len()];

        for (token, count) in counts {
            if let Some(column) = vocab.column(token) {
                // Guard against an empty document; every tf would be 0.
                let tf = if total_terms > 0 {
                    count as f64 / total_terms as f64
                } else {
                    0.0
                };
                let idf = if df[column] > 0 {
                    (num_docs as f64 / df[column] as f64).ln()
                } else {
                    0.0
                };
                vector[column] = tf * idf;
            }
        }

        vectors.push(vector);
    }

    (vectors, vocab)
}
