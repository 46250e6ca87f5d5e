// Topic discovery — the from-scratch TF-IDF + K-Means engine.
//
// No pretrained models: articles are tokenized, weighted with TF-IDF,
// clustered by cosine similarity, and the cluster count is chosen by
// silhouette score. `discovery` wires the stages together.

pub mod discovery;
pub mod kmeans;
pub mod labeler;
pub mod optimizer;
pub mod preprocess;
pub mod silhouette;
pub mod similarity;
pub mod tfidf;
