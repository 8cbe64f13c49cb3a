//! Barspoon main entry point

use anyhow::Context;
use barspoon::config::load_config_with_hash;
use barspoon::run_spider;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Barspoon: a cocktail recipe spider
///
/// Crawls the Monkey 47 blog's gin-cocktail tag archive backwards through
/// its pagination and extracts one recipe record per post into a JSON-lines
/// file and a SQLite database.
#[derive(Parser, Debug)]
#[command(name = "barspoon")]
#[command(version)]
#[command(about = "A cocktail recipe spider", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the crawl plan without fetching anything
    #[arg(long)]
    dry_run: bool,

    /// Override the configured max-pages cap
    #[arg(long, value_name = "N")]
    limit: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded (hash: {})", config_hash);

    if let Some(limit) = cli.limit {
        tracing::info!("Overriding max-pages: {} -> {}", config.spider.max_pages, limit);
        config.spider.max_pages = limit;
    }

    if cli.dry_run {
        print_crawl_plan(&config);
        return Ok(());
    }

    let report = run_spider(config).await.context("crawl failed")?;

    println!(
        "Done: {} pages fetched ({} listing, {} recipe), {} recipes emitted, {} skipped, {} fetch errors",
        report.pages_fetched,
        report.listing_pages,
        report.recipe_pages,
        report.recipes_emitted,
        report.recipes_skipped,
        report.fetch_errors
    );

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("barspoon=info,warn"),
            1 => EnvFilter::new("barspoon=debug,info"),
            2 => EnvFilter::new("barspoon=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints what a crawl with this configuration would do
fn print_crawl_plan(config: &barspoon::Config) {
    println!("=== Barspoon Dry Run ===\n");

    println!("Spider:");
    println!("  Seed URL: {}", config.spider.seed_url);
    println!("  Source label: {}", config.spider.source_label);
    println!("  Max pages: {}", config.spider.max_pages);
    println!("  Request delay: {}ms", config.spider.request_delay_ms);
    println!("  Respect robots.txt: {}", config.spider.respect_robots_txt);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Recipes: {}", config.output.recipes_path);
    println!("  Database: {}", config.output.database_path);

    println!("\n✓ Configuration is valid");
}
