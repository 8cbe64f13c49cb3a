//! Spider module: fetching, page parsing, and crawl orchestration
//!
//! The crawl has exactly two kinds of page. Listing pages (the tag archive)
//! yield recipe links plus at most one "previous page" link; recipe pages
//! yield at most one recipe record. The coordinator walks the archive
//! backwards from the seed with an explicit work queue.

mod coordinator;
mod fetcher;
mod listing;
mod recipe;

pub use coordinator::{run_spider, Coordinator, CrawlReport, CrawlTask};
pub use fetcher::{build_http_client, FetchedPage, Fetcher, HttpFetcher};
pub use listing::{parse_listing, ListingPage};
pub use recipe::parse_recipe;
