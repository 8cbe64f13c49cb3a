//! Output module: the item pipeline
//!
//! Extracted recipes flow through [`RecipeSink`] implementations. The
//! default run writes both a JSON-lines file and a SQLite database;
//! [`MemorySink`] exists for tests and embedding.

mod json_lines;
mod memory;
mod sqlite;
mod traits;

pub use json_lines::JsonLinesSink;
pub use memory::MemorySink;
pub use sqlite::SqliteSink;
pub use traits::{OutputError, OutputResult, RecipeSink};
