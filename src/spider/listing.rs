//! Listing page discovery
//!
//! A listing page is one screen of the blog's tag archive: a stack of post
//! teasers whose titles link to the individual recipe pages, plus a
//! "previous posts" link to the next-older archive screen.

use scraper::{Html, Selector};
use url::Url;

/// Post titles link to the recipe pages
const RECIPE_LINKS: &str = ".entry-title a[href]";

/// WordPress pagination: link to the chronologically previous archive page
const PREVIOUS_PAGE: &str = ".nav-previous a[href]";

/// Links discovered on one listing page
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    /// Recipe page URLs in the order they appear
    pub recipe_urls: Vec<Url>,

    /// The previous archive page, if the listing links one
    pub previous_page: Option<Url>,
}

/// Extracts recipe links and the pagination link from a listing page
///
/// Relative hrefs are resolved against `base_url`. Missing elements are
/// normal: a page with no title links and no pagination link simply yields
/// an empty result. Unparsable hrefs are skipped.
pub fn parse_listing(html: &str, base_url: &Url) -> ListingPage {
    let document = Html::parse_document(html);
    let mut listing = ListingPage::default();

    if let Ok(selector) = Selector::parse(RECIPE_LINKS) {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Ok(resolved) = base_url.join(href) {
                    listing.recipe_urls.push(resolved);
                }
            }
        }
    }

    if let Ok(selector) = Selector::parse(PREVIOUS_PAGE) {
        listing.previous_page = document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("href"))
            .and_then(|href| base_url.join(href).ok());
    }

    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("http://www.monkey47.com/wordpress/tag/gin_cocktail_rezepte/").unwrap()
    }

    #[test]
    fn test_extracts_recipe_links_and_pagination() {
        let html = r#"
            <html><body>
            <h2 class="entry-title"><a href="/wordpress/gin-fizz/">Gin Fizz</a></h2>
            <h2 class="entry-title"><a href="/wordpress/negroni/">Negroni</a></h2>
            <h2 class="entry-title"><a href="http://www.monkey47.com/wordpress/sling/">Sling</a></h2>
            <div class="nav-previous"><a href="page/2/">Older posts</a></div>
            </body></html>
        "#;

        let listing = parse_listing(html, &base_url());

        assert_eq!(listing.recipe_urls.len(), 3);
        assert_eq!(
            listing.recipe_urls[0].as_str(),
            "http://www.monkey47.com/wordpress/gin-fizz/"
        );
        assert_eq!(
            listing.recipe_urls[2].as_str(),
            "http://www.monkey47.com/wordpress/sling/"
        );
        assert_eq!(
            listing.previous_page.unwrap().as_str(),
            "http://www.monkey47.com/wordpress/tag/gin_cocktail_rezepte/page/2/"
        );
    }

    #[test]
    fn test_no_pagination_link() {
        let html = r#"
            <html><body>
            <h2 class="entry-title"><a href="/wordpress/gin-fizz/">Gin Fizz</a></h2>
            </body></html>
        "#;

        let listing = parse_listing(html, &base_url());

        assert_eq!(listing.recipe_urls.len(), 1);
        assert!(listing.previous_page.is_none());
    }

    #[test]
    fn test_empty_page() {
        let listing = parse_listing("<html><body></body></html>", &base_url());

        assert!(listing.recipe_urls.is_empty());
        assert!(listing.previous_page.is_none());
    }

    #[test]
    fn test_title_without_link_is_ignored() {
        let html = r#"<html><body><h2 class="entry-title">No link here</h2></body></html>"#;
        let listing = parse_listing(html, &base_url());
        assert!(listing.recipe_urls.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let html = r#"
            <html><body>
            <h2 class="entry-title"><a href="/a">A</a></h2>
            <h2 class="entry-title"><a href="/b">B</a></h2>
            <h2 class="entry-title"><a href="/c">C</a></h2>
            </body></html>
        "#;

        let listing = parse_listing(html, &base_url());
        let paths: Vec<_> = listing.recipe_urls.iter().map(|u| u.path()).collect();
        assert_eq!(paths, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_only_first_previous_link_is_used() {
        let html = r#"
            <html><body>
            <div class="nav-previous"><a href="page/2/">Older</a></div>
            <div class="nav-previous"><a href="page/3/">Even older</a></div>
            </body></html>
        "#;

        let listing = parse_listing(html, &base_url());
        assert_eq!(
            listing.previous_page.unwrap().as_str(),
            "http://www.monkey47.com/wordpress/tag/gin_cocktail_rezepte/page/2/"
        );
    }
}
