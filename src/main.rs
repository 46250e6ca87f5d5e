use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use mosaic::articles::Article;
use mosaic::config::Config;
use mosaic::topics::discovery::{DiscoveryConfig, TopicDiscovery, TopicResult};

/// Mosaic: topic discovery for intranet articles.
///
/// Groups scraped articles by theme without predefined categories and rolls
/// reader sentiment up per discovered topic.
#[derive(Parser)]
#[command(name = "mosaic", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover topics in a set of articles
    Discover {
        /// Articles JSON file (overrides MOSAIC_INPUT)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Fixed number of topics (disables silhouette auto-optimization)
        #[arg(long)]
        num_topics: Option<usize>,

        /// Minimum articles for a topic to count as valid (default: 2)
        #[arg(long, default_value = "2")]
        min_articles: usize,

        /// Keywords to keep per topic (default: 5)
        #[arg(long, default_value = "5")]
        top_keywords: usize,

        /// Seed for reproducible clustering
        #[arg(long)]
        seed: Option<u64>,

        /// Also write markdown + JSON reports
        #[arg(long)]
        report: bool,
    },

    /// Discover topics and roll up sentiment per topic
    Sentiment {
        /// Articles JSON file (overrides MOSAIC_INPUT)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Fixed number of topics (disables silhouette auto-optimization)
        #[arg(long)]
        num_topics: Option<usize>,

        /// Minimum articles for a topic to count as valid (default: 2)
        #[arg(long, default_value = "2")]
        min_articles: usize,

        /// Keywords to keep per topic (default: 5)
        #[arg(long, default_value = "5")]
        top_keywords: usize,

        /// Seed for reproducible clustering
        #[arg(long)]
        seed: Option<u64>,

        /// Also write markdown + JSON reports
        #[arg(long)]
        report: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mosaic=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Discover {
            input,
            num_topics,
            min_articles,
            top_keywords,
            seed,
            report,
        } => {
            let config = Config::load()?;
            let (articles, result) =
                run_discovery(&config, input, num_topics, min_articles, top_keywords, seed)?;

            mosaic::output::terminal::display_topics(&result);

            if report {
                let path = mosaic::output::markdown::generate_report(
                    &result,
                    &[],
                    &articles,
                    &config.report_dir,
                )?;
                println!("{}", format!("Report saved to: {path}").bold());
            }
        }

        Commands::Sentiment {
            input,
            num_topics,
            min_articles,
            top_keywords,
            seed,
            report,
        } => {
            let config = Config::load()?;
            let (articles, result) =
                run_discovery(&config, input, num_topics, min_articles, top_keywords, seed)?;

            let stats = mosaic::sentiment::aggregate(
                &articles,
                &result.topic_assignments,
                &result.topic_names,
            );

            mosaic::output::terminal::display_topics(&result);
            mosaic::output::terminal::display_sentiment(&stats);

            if report {
                let path = mosaic::output::markdown::generate_report(
                    &result,
                    &stats,
                    &articles,
                    &config.report_dir,
                )?;
                println!("{}", format!("Report saved to: {path}").bold());
            }
        }
    }

    Ok(())
}

/// Load articles and run the discovery pipeline with CLI overrides applied.
fn run_discovery(
    config: &Config,
    input: Option<PathBuf>,
    num_topics: Option<usize>,
    min_articles: usize,
    top_keywords: usize,
    seed: Option<u64>,
) -> Result<(Vec<Article>, TopicResult)> {
    let input = input.unwrap_or_else(|| config.input_path.clone());
    let articles = mosaic::articles::load_articles(&input)?;
    if articles.is_empty() {
        anyhow::bail!(
            "No articles found in {}. Nothing to analyze.\n\
             Point --input (or MOSAIC_INPUT) at a JSON array of articles.",
            input.display()
        );
    }

    println!("Analyzing {} articles...", articles.len());
    match num_topics {
        Some(n) => println!("  Using a fixed count of {n} topics"),
        None => println!(
            "  Optimizing the topic count (k = {}..{})",
            config.min_k, config.max_k
        ),
    }

    let discovery = TopicDiscovery::new(DiscoveryConfig {
        num_topics: num_topics.unwrap_or(10),
        auto_optimize: num_topics.is_none(),
        min_articles_per_topic: min_articles,
        min_k: config.min_k,
        max_k: config.max_k,
        top_keywords,
        seed,
        ..DiscoveryConfig::default()
    });

    let result = discovery.discover(&articles);
    Ok((articles, result))
}
