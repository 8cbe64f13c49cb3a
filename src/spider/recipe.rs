//! Recipe page extraction
//!
//! Turns one recipe post into zero or one [`Recipe`] record. The page
//! structure is WordPress boilerplate: an `.entry-title` heading and an
//! `.entry-content` body whose first paragraph is the ingredient list,
//! one ingredient per `<br>`-separated line.

use crate::item::Recipe;
use crate::text::{element_text, final_title_segment, split_at_breaks};
use scraper::{Html, Selector};
use url::Url;

const TITLE: &str = ".entry-title";
const INGREDIENTS_PARAGRAPH: &str = ".entry-content p";

/// Extracts a recipe record from a recipe page
///
/// Returns `None` when the page has no `.entry-title`, or when the title
/// normalizes to an empty string; every emitted record has a non-empty
/// title. A titled page with no ingredients paragraph still produces a
/// record, with an empty ingredients list.
pub fn parse_recipe(html: &str, url: &Url, source_label: &str) -> Option<Recipe> {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse(TITLE).ok()?;
    let title_element = document.select(&title_selector).next()?;
    let title = final_title_segment(&element_text(title_element));
    if title.is_empty() {
        return None;
    }

    let ingredients = Selector::parse(INGREDIENTS_PARAGRAPH)
        .ok()
        .and_then(|selector| document.select(&selector).next())
        .map(|paragraph| {
            split_at_breaks(paragraph)
                .into_iter()
                // Lines ending in a colon are sub-headings ("For the garnish:"),
                // not ingredients
                .filter(|line| !line.trim_end().ends_with(':'))
                .collect()
        })
        .unwrap_or_default();

    Some(Recipe::new(
        title,
        url.to_string(),
        source_label.to_string(),
        ingredients,
    ))
}
