//! Robots.txt handling
//!
//! The spider targets a single site, so robots handling is one fetch at
//! startup: the seed origin's robots.txt is downloaded once and every queued
//! URL is checked against it before fetching.

use robotstxt::DefaultMatcher;
use url::Url;

/// Parsed robots.txt data
///
/// A wrapper around the robotstxt crate, providing a simplified interface
/// for checking if URLs are allowed.
#[derive(Debug, Clone)]
pub struct ParsedRobots {
    /// Raw robots.txt content (ignored when allow_all is set)
    content: String,
    allow_all: bool,
}

impl ParsedRobots {
    /// Creates a new ParsedRobots from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            allow_all: false,
        }
    }

    /// Creates a permissive ParsedRobots that allows everything
    ///
    /// Used as the default when robots.txt cannot be fetched, and when
    /// robots handling is disabled in the configuration.
    pub fn allow_all() -> Self {
        Self {
            content: String::new(),
            allow_all: true,
        }
    }

    /// Checks if a URL is allowed for the given user agent
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.allow_all {
            return true;
        }
        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }
}

/// Returns the robots.txt URL for the origin of the given URL
pub fn robots_url(url: &Url) -> Option<Url> {
    url.join("/robots.txt").ok()
}
