//! JSON-lines sink
//!
//! Writes one JSON object per line, append-style, to a file. This is the
//! hand-off format for downstream consumers (the recipe site imports it).

use crate::item::Recipe;
use crate::output::traits::{OutputResult, RecipeSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// File-backed sink producing newline-delimited JSON
pub struct JsonLinesSink {
    writer: BufWriter<File>,
}

impl JsonLinesSink {
    /// Creates (or truncates) the output file at `path`
    pub fn create(path: &Path) -> OutputResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl RecipeSink for JsonLinesSink {
    fn record_recipe(&mut self, recipe: &Recipe) -> OutputResult<()> {
        let line = serde_json::to_string(recipe)?;
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn finalize(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
