//! Crawl coordinator - main crawl loop
//!
//! The blog's archive is a linked list of pages, so the traversal is an
//! iterative work queue rather than recursion: listing tasks enqueue recipe
//! tasks and (at most) one further listing task. A visited set guards
//! against the site ever linking its pagination in a cycle, and `max-pages`
//! caps the run regardless.

use crate::config::Config;
use crate::output::RecipeSink;
use crate::robots::{robots_url, ParsedRobots};
use crate::spider::fetcher::{build_http_client, Fetcher, HttpFetcher};
use crate::spider::listing::parse_listing;
use crate::spider::recipe::parse_recipe;
use crate::Result;
use std::collections::{HashSet, VecDeque};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// One unit of crawl work: a page and the handler it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlTask {
    /// A paginated archive page to discover links on
    Listing(Url),
    /// A recipe post to extract a record from
    Recipe(Url),
}

impl CrawlTask {
    fn url(&self) -> &Url {
        match self {
            CrawlTask::Listing(url) | CrawlTask::Recipe(url) => url,
        }
    }
}

/// Counters describing one crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Pages actually fetched (listing + recipe)
    pub pages_fetched: u32,

    /// Listing pages processed
    pub listing_pages: u32,

    /// Recipe pages processed
    pub recipe_pages: u32,

    /// Recipe records handed to the sinks
    pub recipes_emitted: u32,

    /// Recipe pages that produced no record (no extractable title)
    pub recipes_skipped: u32,

    /// Tasks dropped before fetching (already visited or robots-denied)
    pub tasks_skipped: u32,

    /// Fetches that failed and were logged
    pub fetch_errors: u32,
}

/// Main crawler coordinator
pub struct Coordinator {
    config: Config,
    fetcher: Box<dyn Fetcher>,
    sinks: Vec<Box<dyn RecipeSink>>,
}

impl Coordinator {
    pub fn new(config: Config, fetcher: Box<dyn Fetcher>, sinks: Vec<Box<dyn RecipeSink>>) -> Self {
        Self {
            config,
            fetcher,
            sinks,
        }
    }

    /// Runs the crawl to completion
    ///
    /// Processes the work queue until it drains or `max-pages` fetches have
    /// been made. Fetch failures are logged and skipped; an unreachable page
    /// just yields no further work.
    pub async fn run(&mut self) -> Result<CrawlReport> {
        let seed = Url::parse(&self.config.spider.seed_url)?;
        let user_agent = self.config.user_agent.header_value();
        let delay = Duration::from_millis(self.config.spider.request_delay_ms);

        let robots = self.load_robots(&seed).await;

        let mut report = CrawlReport::default();
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<CrawlTask> = VecDeque::new();
        queue.push_back(CrawlTask::Listing(seed));

        tracing::info!("Starting crawl from {}", self.config.spider.seed_url);

        while let Some(task) = queue.pop_front() {
            if report.pages_fetched >= self.config.spider.max_pages {
                tracing::warn!(
                    "Reached max-pages cap of {} with {} tasks still queued",
                    self.config.spider.max_pages,
                    queue.len() + 1
                );
                break;
            }

            let url = task.url().clone();

            if !visited.insert(url.as_str().to_string()) {
                report.tasks_skipped += 1;
                continue;
            }

            if !robots.is_allowed(url.as_str(), &user_agent) {
                tracing::info!("URL {} disallowed by robots.txt", url);
                report.tasks_skipped += 1;
                continue;
            }

            if report.pages_fetched > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let page = match self.fetcher.fetch(&url).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Failed to fetch {}: {}", url, e);
                    report.fetch_errors += 1;
                    continue;
                }
            };
            report.pages_fetched += 1;

            match task {
                CrawlTask::Listing(_) => {
                    report.listing_pages += 1;

                    // Parse against the final URL so relative links survive redirects
                    let listing = parse_listing(&page.body, &page.url);
                    tracing::debug!(
                        "Listing {}: {} recipe links, previous page: {}",
                        url,
                        listing.recipe_urls.len(),
                        listing.previous_page.is_some()
                    );

                    for recipe_url in listing.recipe_urls {
                        queue.push_back(CrawlTask::Recipe(recipe_url));
                    }
                    if let Some(previous) = listing.previous_page {
                        queue.push_back(CrawlTask::Listing(previous));
                    }
                }

                CrawlTask::Recipe(_) => {
                    report.recipe_pages += 1;

                    match parse_recipe(&page.body, &page.url, &self.config.spider.source_label) {
                        Some(recipe) => {
                            tracing::info!("Extracted recipe: {}", recipe.title);
                            for sink in &mut self.sinks {
                                sink.record_recipe(&recipe)?;
                            }
                            report.recipes_emitted += 1;
                        }
                        None => {
                            tracing::debug!("No extractable title on {}, skipping", url);
                            report.recipes_skipped += 1;
                        }
                    }
                }
            }
        }

        for sink in &mut self.sinks {
            sink.finalize()?;
        }

        tracing::info!(
            "Crawl complete: {} pages fetched, {} recipes emitted",
            report.pages_fetched,
            report.recipes_emitted
        );

        Ok(report)
    }

    /// Fetches and parses the seed origin's robots.txt
    ///
    /// Falls back to allow-all when robots handling is disabled or the file
    /// cannot be retrieved.
    async fn load_robots(&self, seed: &Url) -> ParsedRobots {
        if !self.config.spider.respect_robots_txt {
            return ParsedRobots::allow_all();
        }

        let Some(robots) = robots_url(seed) else {
            return ParsedRobots::allow_all();
        };

        match self.fetcher.fetch(&robots).await {
            Ok(page) => ParsedRobots::from_content(&page.body),
            Err(e) => {
                tracing::debug!("Could not fetch {}: {}. Allowing all.", robots, e);
                ParsedRobots::allow_all()
            }
        }
    }
}

/// Builds the real fetcher and configured sinks, then runs the crawl
pub async fn run_spider(config: Config) -> Result<CrawlReport> {
    use crate::output::{JsonLinesSink, SqliteSink};

    let client = build_http_client(&config.user_agent)?;
    let fetcher: Box<dyn Fetcher> = Box::new(HttpFetcher::new(client));

    let sinks: Vec<Box<dyn RecipeSink>> = vec![
        Box::new(JsonLinesSink::create(Path::new(&config.output.recipes_path))?),
        Box::new(SqliteSink::new(Path::new(&config.output.database_path))?),
    ];

    Coordinator::new(config, fetcher, sinks).run().await
}
