//! Output sink trait and error types

use crate::item::Recipe;
use thiserror::Error;

/// Errors that can occur while recording recipes
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// The item pipeline: every extracted recipe is handed to each sink
///
/// Sinks are driven sequentially by the coordinator; implementations do not
/// need to be thread-safe but must tolerate the same URL appearing twice
/// across runs.
pub trait RecipeSink {
    /// Records one extracted recipe
    fn record_recipe(&mut self, recipe: &Recipe) -> OutputResult<()>;

    /// Flushes buffered state once the crawl is done
    fn finalize(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
