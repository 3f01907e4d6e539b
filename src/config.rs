// src/config.rs
use std::env;
use thiserror::Error;

pub const DEFAULT_CONTRIBUTOR_THRESHOLD: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    contributor_threshold: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "info,masthead_core=debug".into()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            contributor_threshold: DEFAULT_CONTRIBUTOR_THRESHOLD,
        }
    }
}

impl CatalogConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let contributor_threshold = match env::var("MASTHEAD_CONTRIBUTOR_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => DEFAULT_CONTRIBUTOR_THRESHOLD,
        };

        Ok(Self {
            contributor_threshold,
        })
    }

    #[must_use]
    pub fn with_contributor_threshold(mut self, threshold: usize) -> Self {
        self.contributor_threshold = threshold;
        self
    }

    /// Authors need strictly more articles than this in a magazine to count
    /// as contributing authors.
    pub fn contributor_threshold(&self) -> usize {
        self.contributor_threshold
    }

    /// Log filter directive for the tracing subscriber. Readable before the
    /// rest of the configuration so that configuration errors get logged.
    pub fn log_filter_from_env() -> String {
        dotenvy::dotenv().ok();
        env::var("RUST_LOG").unwrap_or_else(|_| default_log_filter())
    }
}

fn parse_threshold(raw: &str) -> Result<usize, ConfigError> {
    raw.trim().parse::<usize>().map_err(|_| {
        ConfigError::Invalid(format!(
            "MASTHEAD_CONTRIBUTOR_THRESHOLD must be a non-negative integer, got '{raw}'"
        ))
    })
}
