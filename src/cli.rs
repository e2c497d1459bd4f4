//! Command line interface.

use clap::Parser;

use crate::export::ExportRequest;
use crate::scrapers::types::{
    FilterConfig, SkillFilter, DEFAULT_CLIENT_COUNTRIES, DEFAULT_SKILLS, DEFAULT_SORT,
    DEFAULT_TYPES,
};

/// Scrape projects from Freelancer.com
#[derive(Parser, Debug)]
#[command(
    name = "flparser",
    version,
    about = "Scrape projects from Freelancer.com",
    long_about = "A CLI tool to parse projects from Freelancer.com based on specific criteria \
                  and export them to Markdown, CSV, or JSON."
)]
pub struct Cli {
    /// Project types: 'hourly,fixed', 'hourly', or 'fixed'
    #[arg(long, default_value = DEFAULT_TYPES)]
    pub types: String,

    /// Comma separated client country codes
    #[arg(
        long = "clientCountries",
        value_delimiter = ',',
        default_value = DEFAULT_CLIENT_COUNTRIES
    )]
    pub client_countries: Vec<String>,

    /// Minimum fixed price
    #[arg(long = "fixedMin", default_value_t = 0, allow_negative_numbers = true)]
    pub fixed_min: i64,

    /// Maximum fixed price
    #[arg(long = "fixedMax", default_value_t = 0, allow_negative_numbers = true)]
    pub fixed_max: i64,

    /// Minimum hourly rate
    #[arg(long = "hourlyMin", default_value_t = 0, allow_negative_numbers = true)]
    pub hourly_min: i64,

    /// Maximum hourly rate
    #[arg(long = "hourlyMax", default_value_t = 0, allow_negative_numbers = true)]
    pub hourly_max: i64,

    /// Skill IDs comma separated, or 'all'
    #[arg(long, default_value = DEFAULT_SKILLS)]
    pub skills: String,

    /// Sort: oldest, lowestPrice, highestPrice, fewestBids, mostBids
    #[arg(long, default_value = DEFAULT_SORT)]
    pub sort: String,

    /// Search query text
    #[arg(long = "q", default_value = "")]
    pub query: String,

    /// Page number
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Output filename (e.g. results.json)
    #[arg(short = 'O', long)]
    pub output: Option<String>,

    /// Output extension if -O is not set (md, csv, json)
    #[arg(short = 'X', long)]
    pub extension: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Snapshot of the search filters
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            project_types: self.types.clone(),
            client_countries: self
                .client_countries
                .iter()
                .flat_map(|c| c.split(','))
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
            fixed_price_min: self.fixed_min,
            fixed_price_max: self.fixed_max,
            hourly_rate_min: self.hourly_min,
            hourly_rate_max: self.hourly_max,
            skills: SkillFilter::parse(&self.skills),
            sort: self.sort.clone(),
            query: self.query.clone(),
            page: self.page,
        }
    }

    pub fn export_request(&self) -> ExportRequest {
        ExportRequest::new(self.output.clone(), self.extension.clone())
    }
}
