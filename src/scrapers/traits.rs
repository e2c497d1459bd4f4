use crate::error::ScrapeError;
use crate::models::Project;
use async_trait::async_trait;

/// Common trait for listing scrapers
#[async_trait]
pub trait ScraperTrait: Send + Sync {
    /// Fetch `url` and extract the projects listed on it
    async fn scrape(&self, url: &str) -> Result<Vec<Project>, ScrapeError>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}
