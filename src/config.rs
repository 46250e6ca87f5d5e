use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Everything has a default, so `mosaic discover` works out of the box in a
/// directory holding an articles.json. CLI flags override these values. The
/// .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Articles JSON produced by the upstream scraping stage.
    pub input_path: PathBuf,
    /// Directory reports are written into.
    pub report_dir: PathBuf,
    /// Lower bound of the cluster-count sweep.
    pub min_k: usize,
    /// Upper bound of the cluster-count sweep.
    pub max_k: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let min_k = parse_env("MOSAIC_MIN_K", 2)?;
        let max_k = parse_env("MOSAIC_MAX_K", 10)?;
        if max_k < min_k {
            anyhow::bail!(
                "MOSAIC_MAX_K ({max_k}) must not be smaller than MOSAIC_MIN_K ({min_k})"
            );
        }

        Ok(Self {
            input_path: env::var("MOSAIC_INPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./articles.json")),
            report_dir: env::var("MOSAIC_REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./output")),
            min_k,
            max_k,
        })
    }
}

fn parse_env(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|_| anyhow::anyhow!("{key} must be a positive integer, got '{value}'")),
        Err(_) => Ok(default),
    }
}
