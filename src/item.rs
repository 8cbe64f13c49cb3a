//! Recipe record emitted by the spider
//!
//! One `Recipe` is produced per successfully parsed recipe page and handed to
//! the configured output sinks. Records are immutable after creation; the URL
//! is their only identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single extracted cocktail recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Normalized recipe title (never empty)
    pub title: String,

    /// Picture URL; this source never provides one
    pub picture: Option<String>,

    /// URL of the recipe page the record was extracted from
    pub url: String,

    /// Constant label identifying the source site
    pub source: String,

    /// Ingredient lines in source order; may be empty
    pub ingredients: Vec<String>,

    /// When the record was extracted
    pub scraped_at: DateTime<Utc>,
}

impl Recipe {
    /// Creates a new recipe record stamped with the current time
    pub fn new(title: String, url: String, source: String, ingredients: Vec<String>) -> Self {
        Self {
            title,
            picture: None,
            url,
            source,
            ingredients,
            scraped_at: Utc::now(),
        }
    }
}
