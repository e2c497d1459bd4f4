use anyhow::Context;
use chrono::Local;
use clap::Parser;
use flparser::cli::Cli;
use flparser::export::Exporter;
use flparser::scrapers::{build_search_url, FreelancerScraper, ScraperTrait};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = cli.filter_config();
    let request = cli.export_request();

    let search = build_search_url(&config);
    debug!("Search URL: {}", search.url);

    let scraper = FreelancerScraper::new()?;
    let projects = scraper
        .scrape(&search.url)
        .await
        .with_context(|| format!("Error scraping {}", scraper.source_name()))?;

    info!("Found {} projects.", projects.len());

    let exporter = Exporter::new(".");
    let report = exporter.dispatch(&projects, &search.parameters, &request, &Local::now());

    if !report.is_complete() {
        warn!(
            "{} of {} exports failed",
            report.failed.len(),
            report.failed.len() + report.written.len()
        );
    }

    Ok(())
}
