use crate::config::types::{Config, OutputConfig, SpiderConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_spider_config(&config.spider)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates spider configuration
fn validate_spider_config(config: &SpiderConfig) -> Result<(), ConfigError> {
    let seed = Url::parse(&config.seed_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed-url '{}': {}", config.seed_url, e)))?;

    // The source site serves plain http, so both schemes are accepted
    if seed.scheme() != "http" && seed.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "seed-url must use http or https, got '{}'",
            seed.scheme()
        )));
    }

    if config.source_label.trim().is_empty() {
        return Err(ConfigError::Validation(
            "source-label cannot be empty".to_string(),
        ));
    }

    if config.max_pages < 1 || config.max_pages > 100_000 {
        return Err(ConfigError::Validation(format!(
            "max-pages must be between 1 and 100000, got {}",
            config.max_pages
        )));
    }

    if config.request_delay_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "request-delay-ms must be <= 60000, got {}",
            config.request_delay_ms
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.spider_name.is_empty() {
        return Err(ConfigError::Validation(
            "spider-name cannot be empty".to_string(),
        ));
    }

    if !config
        .spider_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "spider-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.spider_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.recipes_path.is_empty() {
        return Err(ConfigError::Validation(
            "recipes-path cannot be empty".to_string(),
        ));
    }

    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    if email.is_empty() {
        return Err(ConfigError::Validation(
            "contact-email cannot be empty".to_string(),
        ));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    // Domain part should contain at least one dot
    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_spider() -> SpiderConfig {
        SpiderConfig {
            seed_url: "http://www.monkey47.com/wordpress/tag/gin_cocktail_rezepte/".to_string(),
            source_label: "Monkey 47 Blog".to_string(),
            max_pages: 500,
            request_delay_ms: 1000,
            respect_robots_txt: true,
        }
    }

    #[test]
    fn test_valid_spider_config() {
        assert!(validate_spider_config(&valid_spider()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_seed() {
        let mut config = valid_spider();
        config.seed_url = "ftp://example.com/".to_string();
        assert!(validate_spider_config(&config).is_err());
    }

    #[test]
    fn test_rejects_unparsable_seed() {
        let mut config = valid_spider();
        config.seed_url = "not a url".to_string();
        assert!(matches!(
            validate_spider_config(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_empty_source_label() {
        let mut config = valid_spider();
        config.source_label = "  ".to_string();
        assert!(validate_spider_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_max_pages() {
        let mut config = valid_spider();
        config.max_pages = 0;
        assert!(validate_spider_config(&config).is_err());
    }

    #[test]
    fn test_rejects_excessive_delay() {
        let mut config = valid_spider();
        config.request_delay_ms = 120_000;
        assert!(validate_spider_config(&config).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("admin@sub.example.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@domain").is_err());
    }

    #[test]
    fn test_spider_name_characters() {
        let ua = UserAgentConfig {
            spider_name: "bar spoon!".to_string(),
            spider_version: "0.1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        };
        assert!(validate_user_agent_config(&ua).is_err());
    }
}
