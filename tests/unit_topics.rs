// Unit tests for the text-to-vector stages of topic discovery.
//
// Tests isolated pure functions: Preprocessor::tokenize filtering rules,
// fit_transform weighting and determinism, and cosine_similarity numerical
// edge cases.

use mosaic::topics::preprocess::Preprocessor;
use mosaic::topics::similarity::cosine_similarity;
use mosaic::topics::tfidf::fit_transform;

// ============================================================
// Preprocessor::tokenize — filtering rules
// ============================================================

#[test]
fn tokenize_lowercases_and_strips_punctuation() {
    let pre = Preprocessor::new();
    let tokens = pre.tokenize("Recycling-Programm: Cafeteria & Nachhaltigkeit!");
    assert_eq!(
        tokens,
        vec!["recycling", "programm", "cafeteria", "nachhaltigkeit"]
    );
}

#[test]
fn tokenize_drops_tokens_of_three_chars_or_fewer() {
    let pre = Preprocessor::new();
    let tokens = pre.tokenize("our new app cafeteria");
    // "our", "new", "app" are all three characters or fewer
    assert_eq!(tokens, vec!["cafeteria"]);
}

#[test]
fn tokenize_drops_purely_numeric_tokens() {
    let pre = Preprocessor::new();
    let tokens = pre.tokenize("revenue grew 2024 12345 percent");
    assert!(!tokens.contains(&"2024".to_string()));
    assert!(!tokens.contains(&"12345".to_string()));
    assert!(tokens.contains(&"revenue".to_string()));
}

#[test]
fn tokenize_keeps_alphanumeric_mixes() {
    let pre = Preprocessor::new();
    let tokens = pre.tokenize("covid19 guidance remains");
    assert!(tokens.contains(&"covid19".to_string()));
}

#[test]
fn tokenize_drops_stopwords_in_all_four_languages() {
    let pre = Preprocessor::new();
    // "should" (EN), "haben" (DE), "avec" (FR), "sono" (IT)
    let tokens = pre.tokenize("should haben avec sono sustainability");
    assert_eq!(tokens, vec!["sustainability"]);
}

#[test]
fn tokenize_preserves_umlauts_and_accents() {
    let pre = Preprocessor::new();
    let tokens = pre.tokenize("Geschäftsbericht für die Führungskräfte");
    assert!(tokens.contains(&"geschäftsbericht".to_string()));
    assert!(tokens.contains(&"führungskräfte".to_string()));
}

#[test]
fn tokenize_empty_text_yields_empty_sequence() {
    let pre = Preprocessor::new();
    assert!(pre.tokenize("").is_empty());
    assert!(pre.tokenize("   \n\t  ").is_empty());
}

// ============================================================
// fit_transform — weighting, invariants, determinism
// ============================================================

fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|d| d.iter().map(|t| t.to_string()).collect())
        .collect()
}

#[test]
fn tfidf_all_weights_are_non_negative() {
    let corpus = docs(&[
        &["training", "model", "neural"],
        &["recycling", "waste", "office"],
        &["training", "recycling"],
    ]);
    let (vectors, _) = fit_transform(&corpus);
    for vector in &vectors {
        for weight in vector {
            assert!(*weight >= 0.0, "negative weight {weight}");
        }
    }
}

#[test]
fn tfidf_term_in_every_document_has_zero_weight_everywhere() {
    let corpus = docs(&[
        &["common", "alpha"],
        &["common", "beta"],
        &["common", "gamma"],
    ]);
    let (vectors, vocab) = fit_transform(&corpus);
    let common = vocab.column("common").unwrap();
    for vector in &vectors {
        assert_eq!(vector[common], 0.0);
    }
}

#[test]
fn tfidf_absent_terms_are_explicit_zeros() {
    let corpus = docs(&[&["alpha"], &["beta"]]);
    let (vectors, vocab) = fit_transform(&corpus);
    // Every vector spans the full vocabulary
    assert_eq!(vectors[0].len(), vocab.len());
    assert_eq!(vectors[1].len(), vocab.len());
    let beta = vocab.column("beta").unwrap();
    assert_eq!(vectors[0][beta], 0.0);
}

#[test]
fn tfidf_known_corpus_produces_expected_weights() {
    // doc0 = [apple, apple, banana], doc1 = [apple]
    // df(apple) = 2 of 2 -> idf 0; df(banana) = 1 of 2 -> idf ln 2
    let corpus = docs(&[&["apple", "apple", "banana"], &["apple"]]);
    let (vectors, vocab) = fit_transform(&corpus);

    let apple = vocab.column("apple").unwrap();
    let banana = vocab.column("banana").unwrap();

    assert_eq!(vectors[0][apple], 0.0);
    assert_eq!(vectors[1][apple], 0.0);

    let expected = (1.0 / 3.0) * (2.0f64).ln();
    assert!((vectors[0][banana] - expected).abs() < 1e-12);
    assert_eq!(vectors[1][banana], 0.0);
}

#[test]
fn tfidf_empty_document_yields_all_zero_vector() {
    let corpus = docs(&[&["alpha", "beta"], &[]]);
    let (vectors, vocab) = fit_transform(&corpus);
    assert_eq!(vectors[1], vec![0.0; vocab.len()]);
}

#[test]
fn tfidf_is_deterministic_across_runs() {
    let corpus = docs(&[
        &["zebra", "apple", "mango"],
        &["apple", "apple", "kiwi"],
        &["mango", "zebra"],
    ]);
    let (first, vocab_a) = fit_transform(&corpus);
    let (second, vocab_b) = fit_transform(&corpus);
    assert_eq!(first, second);
    assert_eq!(vocab_a.terms(), vocab_b.terms());
}

#[test]
fn tfidf_vocabulary_is_lexicographically_sorted() {
    let corpus = docs(&[&["zebra", "apple"], &["mango"]]);
    let (_, vocab) = fit_transform(&corpus);
    assert_eq!(vocab.terms(), ["apple", "mango", "zebra"]);
}

#[test]
fn tfidf_empty_corpus_is_fine() {
    let (vectors, vocab) = fit_transform(&[]);
    assert!(vectors.is_empty());
    assert!(vocab.is_empty());
}

// ============================================================
// cosine_similarity — numerical edge cases
// ============================================================

#[test]
fn cosine_stays_within_bounds_for_non_negative_vectors() {
    let corpus = docs(&[
        &["training", "model"],
        &["recycling", "office"],
        &["training", "office"],
    ]);
    let (vectors, _) = fit_transform(&corpus);
    for a in &vectors {
        for b in &vectors {
            let s = cosine_similarity(a, b);
            assert!((0.0..=1.0 + 1e-12).contains(&s), "out of bounds: {s}");
        }
    }
}

#[test]
fn cosine_self_similarity_is_one_for_non_zero_vectors() {
    let v = vec![0.4, 0.0, 0.3];
    assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
}

#[test]
fn cosine_zero_vector_is_maximally_dissimilar_even_to_itself() {
    let zero = vec![0.0, 0.0, 0.0];
    let other = vec![1.0, 0.5, 0.0];
    assert_eq!(cosine_similarity(&zero, &other), 0.0);
    assert_eq!(cosine_similarity(&zero, &zero), 0.0);
}

#[test]
fn cosine_disjoint_support_scores_zero() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
}
