use serde::Deserialize;

/// Main configuration structure for barspoon
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub spider: SpiderConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Spider behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SpiderConfig {
    /// Tag-archive listing page the crawl starts from
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Constant label stamped on every emitted recipe
    #[serde(rename = "source-label")]
    pub source_label: String,

    /// Safety cap on the total number of pages fetched in one run
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Politeness delay between requests (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Whether to fetch and honor the site's robots.txt
    #[serde(rename = "respect-robots-txt", default = "default_true")]
    pub respect_robots_txt: bool,
}

fn default_true() -> bool {
    true
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the spider
    #[serde(rename = "spider-name")]
    pub spider_name: String,

    /// Version of the spider
    #[serde(rename = "spider-version")]
    pub spider_version: String,

    /// URL with information about the spider
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value: `Name/Version (+url; email)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.spider_name, self.spider_version, self.contact_url, self.contact_email
        )
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON-lines recipe file
    #[serde(rename = "recipes-path")]
    pub recipes_path: String,

    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}
