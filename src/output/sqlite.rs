//! SQLite sink
//!
//! Persists recipes in a single table keyed by URL. Re-crawling the same
//! page replaces the stored row, so the table always reflects the latest
//! extraction per URL.

use crate::item::Recipe;
use crate::output::traits::{OutputError, OutputResult, RecipeSink};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    picture TEXT,
    source TEXT NOT NULL,
    ingredients TEXT NOT NULL,
    scraped_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_recipes_title ON recipes(title);
"#;

/// SQLite-backed recipe sink
pub struct SqliteSink {
    conn: Connection,
}

impl SqliteSink {
    /// Opens (or creates) the database at `path` and ensures the schema
    pub fn new(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;
        conn.execute_batch(SCHEMA_SQL)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    pub fn new_in_memory() -> OutputResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// Returns the number of stored recipes
    pub fn count_recipes(&self) -> OutputResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Looks up a stored recipe by its URL
    pub fn get_recipe(&self, url: &str) -> OutputResult<Option<Recipe>> {
        let mut stmt = self.conn.prepare(
            "SELECT url, title, picture, source, ingredients, scraped_at
             FROM recipes WHERE url = ?1",
        )?;

        let row = stmt
            .query_row(params![url], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })
            .optional()?;

        let Some((url, title, picture, source, ingredients_json, scraped_at)) = row else {
            return Ok(None);
        };

        let ingredients: Vec<String> = serde_json::from_str(&ingredients_json)?;
        let scraped_at = DateTime::parse_from_rfc3339(&scraped_at)
            .map_err(|e| OutputError::Write(format!("Bad timestamp in database: {}", e)))?
            .with_timezone(&Utc);

        Ok(Some(Recipe {
            title,
            picture,
            url,
            source,
            ingredients,
            scraped_at,
        }))
    }
}

impl RecipeSink for SqliteSink {
    fn record_recipe(&mut self, recipe: &Recipe) -> OutputResult<()> {
        let ingredients = serde_json::to_string(&recipe.ingredients)?;

        // URL is the record identity; later extractions win
        self.conn.execute(
            "INSERT OR REPLACE INTO recipes (url, title, picture, source, ingredients, scraped_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                recipe.url,
                recipe.title,
                recipe.picture,
                recipe.source,
                ingredients,
                recipe.scraped_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }
}
