// Colored terminal output for discovered topics and sentiment rollups.
//
// This module handles all terminal-specific formatting: colors, bars,
// tables. The main.rs display calls delegate here.

use colored::Colorize;

use crate::output::truncate_chars;
use crate::sentiment::{TopicSentiment, SENTIMENT_THRESHOLD};
use crate::topics::discovery::TopicResult;

/// Display discovered topics as a sized bar list.
///
/// Every populated topic is shown; topics that fell below the minimum size
/// are dimmed and marked so the reader can tell noise from signal.
pub fn display_topics(result: &TopicResult) {
    println!(
        "\n{}",
        format!(
            "=== Discovered Topics (k = {}, silhouette {:.3}) ===",
            result.num_topics, result.silhouette_score
        )
        .bold()
    );
    println!();

    let total: usize = result.topic_sizes.values().sum();
    let bar_width: usize = 20;

    for (topic_id, name) in &result.topic_names {
        let size = result.topic_sizes.get(topic_id).copied().unwrap_or(0);
        if size == 0 {
            continue;
        }

        let share = size as f64 / total.max(1) as f64;
        let filled = (share * bar_width as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(bar_width.saturating_sub(filled))
        );

        let is_valid = result.valid_topics.contains_key(topic_id);
        let colored_bar = if is_valid {
            bar.bright_green()
        } else {
            bar.dimmed()
        };
        let marker = if is_valid { "" } else { "  (below minimum size)" };

        println!(
            "  {:>2}. {:<40} {} {:>3} articles{}",
            topic_id + 1,
            truncate_chars(name, 38).bold(),
            colored_bar,
            size,
            marker.dimmed()
        );

        let keywords = result
            .topic_keywords
            .get(topic_id)
            .map(|k| k.join(", "))
            .unwrap_or_default();
        println!("      Keywords: {}", keywords.dimmed());
        println!();
    }

    if !result.silhouette_scores_by_k.is_empty() {
        println!("  {}", "Silhouette sweep:".bold());
        for (k, score) in &result.silhouette_scores_by_k {
            let marker = if *k == result.num_topics {
                "  ← optimal".bright_green().to_string()
            } else {
                String::new()
            };
            println!("    k={k}: {score:.3}{marker}");
        }
        println!();
    }
}

/// Display per-topic sentiment statistics as a table.
pub fn display_sentiment(stats: &[TopicSentiment]) {
    if stats.is_empty() {
        println!("No topics to report sentiment for.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Topic Sentiment ({} topics) ===", stats.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:<36} {:>8} {:>8} {:>8} {:>8} {:>5} {:>5}",
        "Topic".dimmed(),
        "Articles".dimmed(),
        "Avg".dimmed(),
        "Min".dimmed(),
        "Max".dimmed(),
        "Pos".dimmed(),
        "Neg".dimmed(),
    );
    println!("  {}", "-".repeat(84).dimmed());

    for s in stats {
        let avg = format!("{:+.3}", s.avg_sentiment);
        let colored_avg = if s.avg_sentiment > SENTIMENT_THRESHOLD {
            avg.green().to_string()
        } else if s.avg_sentiment < -SENTIMENT_THRESHOLD {
            avg.red().to_string()
        } else {
            avg
        };

        println!(
            "  {:<36} {:>8} {:>8} {:>8.3} {:>8.3} {:>5} {:>5}",
            truncate_chars(&s.topic, 34),
            s.article_count,
            colored_avg,
            s.min_sentiment,
            s.max_sentiment,
            s.positive_articles,
            s.negative_articles,
        );
    }
    println!();
}
