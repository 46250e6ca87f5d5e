// Article input model and JSON loading.
//
// Articles arrive as a JSON array produced by the upstream scraping and
// sentiment stages. avg_sentiment is computed there and only ever read
// here; topic discovery treats it as opaque.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One scraped intranet article plus its externally computed sentiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    /// Mean reader-comment sentiment in [-1, 1], produced by the upstream
    /// sentiment stage. Missing in scrape-only exports, hence the default.
    #[serde(default)]
    pub avg_sentiment: f64,
}

/// Load articles from a JSON array file.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read articles from {}", path.display()))?;
    let articles: Vec<Article> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse articles JSON in {}", path.display()))?;
    info!(count = articles.len(), "Loaded articles");
    Ok(articles)
}
