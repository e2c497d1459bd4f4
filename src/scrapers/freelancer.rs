use crate::error::ScrapeError;
use crate::models::Project;
use crate::scrapers::extract::{extract_projects, ListingSelectors};
use crate::scrapers::traits::ScraperTrait;
use crate::scrapers::types::FetchSettings;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

/// Freelancer.com search page scraper
pub struct FreelancerScraper {
    client: Client,
    selectors: ListingSelectors,
}

impl FreelancerScraper {
    /// Create a scraper with the default timeout and User-Agent
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_settings(FetchSettings::default())
    }

    /// Create a scraper with custom HTTP settings
    pub fn with_settings(settings: FetchSettings) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent)
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Self {
            client,
            selectors: ListingSelectors::freelancer()?,
        })
    }

    /// Download the page body. Anything but 200 OK fails.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("Fetching URL: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Freelancer returned status: {}", status);
            return Err(ScrapeError::Status { status });
        }

        let html = response.text().await?;
        debug!("Downloaded {} bytes of HTML", html.len());
        Ok(html)
    }

    /// Parse listing cards out of an already downloaded page
    pub fn parse_projects(&self, html: &str) -> Vec<Project> {
        extract_projects(html, &self.selectors)
    }
}

#[async_trait]
impl ScraperTrait for FreelancerScraper {
    async fn scrape(&self, url: &str) -> Result<Vec<Project>, ScrapeError> {
        info!("Fetching Freelancer.com...");

        let html = self.fetch_page(url).await?;
        let projects = self.parse_projects(&html);

        if projects.is_empty() {
            warn!("No listing cards found on the page");
        }
        Ok(projects)
    }

    fn source_name(&self) -> &'static str {
        "Freelancer.com"
    }
}
