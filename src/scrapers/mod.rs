pub mod extract;
pub mod freelancer;
pub mod query;
pub mod text;
pub mod traits;
pub mod types;

pub use extract::{extract_projects, ListingSelectors};
pub use freelancer::FreelancerScraper;
pub use query::{build_search_url, SearchQuery};
pub use text::normalize_text;
pub use traits::ScraperTrait;
pub use types::{FetchSettings, FilterConfig, SkillFilter};
