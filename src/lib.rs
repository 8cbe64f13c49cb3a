//! Barspoon: a cocktail recipe spider for the Monkey 47 blog
//!
//! This crate crawls the blog's gin-cocktail tag archive, following the
//! "previous page" pagination backwards, and extracts one structured recipe
//! record (title, source URL, ingredient lines) per recipe post.

pub mod config;
pub mod item;
pub mod output;
pub mod robots;
pub mod spider;
pub mod text;

use thiserror::Error;

/// Main error type for barspoon operations
#[derive(Debug, Error)]
pub enum BarspoonError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for barspoon operations
pub type Result<T> = std::result::Result<T, BarspoonError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use item::Recipe;
pub use spider::{run_spider, Coordinator, CrawlReport, Fetcher, HttpFetcher};
