// Markdown report generation.
//
// Writes a human-readable summary of a discovery run (topic table,
// keywords, silhouette sweep, sentiment rollups) alongside a JSON dump of
// the raw TopicResult for downstream tooling; the intranet report pipeline
// picks the JSON up to fill per-article category and keyword columns.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::articles::Article;
use crate::sentiment::TopicSentiment;
use crate::topics::discovery::TopicResult;

/// Write the markdown report and its JSON sidecar, returning the markdown path.
pub fn generate_report(
    result: &TopicResult,
    sentiment: &[TopicSentiment],
    articles: &[Article],
    report_dir: &Path,
) -> Result<String> {
    fs::create_dir_all(report_dir)
        .with_context(|| format!("Failed to create report dir {}", report_dir.display()))?;

    let mut md = String::new();
    md.push_str("# Topic Discovery Report\n\n");
    let _ = writeln!(md, "Generated: {}\n", Local::now().format("%Y-%m-%d %H:%M"));
    let _ = writeln!(md, "- Articles analyzed: {}", articles.len());
    let _ = writeln!(
        md,
        "- Topics: {} discovered, {} valid (at least the minimum article count)",
        result.num_topics,
        result.valid_topics.len()
    );
    let _ = writeln!(
        md,
        "- Final silhouette score: {:.3}\n",
        result.silhouette_score
    );

    if !result.silhouette_scores_by_k.is_empty() {
        md.push_str("## Cluster-count sweep\n\n");
        md.push_str("| k | Silhouette |\n|---|---|\n");
        for (k, score) in &result.silhouette_scores_by_k {
            let marker = if *k == result.num_topics {
                " (chosen)"
            } else {
                ""
            };
            let _ = writeln!(md, "| {k}{marker} | {score:.3} |");
        }
        md.push('\n');
    }

    md.push_str("## Topics\n\n");
    md.push_str("| # | Topic | Articles | Keywords |\n|---|---|---|---|\n");
    for (topic_id, name) in &result.topic_names {
        let size = result.topic_sizes.get(topic_id).copied().unwrap_or(0);
        let keywords = result
            .topic_keywords
            .get(topic_id)
            .map(|k| k.join(", "))
            .unwrap_or_default();
        let _ = writeln!(md, "| {} | {name} | {size} | {keywords} |", topic_id + 1);
    }

    if !sentiment.is_empty() {
        md.push_str("\n## Sentiment by topic\n\n");
        md.push_str("| Topic | Articles | Avg | Min | Max | Positive | Negative |\n");
        md.push_str("|---|---|---|---|---|---|---|\n");
        for s in sentiment {
            let _ = writeln!(
                md,
                "| {} | {} | {:+.3} | {:+.3} | {:+.3} | {} | {} |",
                s.topic,
                s.article_count,
                s.avg_sentiment,
                s.min_sentiment,
                s.max_sentiment,
                s.positive_articles,
                s.negative_articles,
            );
        }
    }

    let md_path = report_dir.join("mosaic-report.md");
    fs::write(&md_path, md)
        .with_context(|| format!("Failed to write report to {}", md_path.display()))?;

    let json_path = report_dir.join("mosaic-topics.json");
    let json = serde_json::to_string_pretty(result)?;
    fs::write(&json_path, json)
        .with_context(|| format!("Failed to write topic JSON to {}", json_path.display()))?;

    Ok(md_path.display().to_string())
}
