use std::fmt;
use std::time::Duration;

/// Search page every query is built on
pub const SEARCH_URL: &str = "https://www.freelancer.com/search/projects";

/// Origin prepended to site-relative project links
pub const SITE_ORIGIN: &str = "https://www.freelancer.com";

pub const DEFAULT_TYPES: &str = "hourly,fixed";
pub const DEFAULT_SKILLS: &str =
    "7,9,13,31,68,137,305,323,335,500,598,613,673,759,913,1031,1087,1088,1936,2376";
pub const DEFAULT_CLIENT_COUNTRIES: &str =
    "ca,au,no,de,se,ch,gb,us,at,fr,jp,ae,es,lu,ie,nl,be,fi,it,sg,kr,hk,is,nz";
pub const DEFAULT_SORT: &str = "latest";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Skill selection for a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillFilter {
    /// No skill filtering
    All,
    /// Comma separated skill ids, kept exactly as given
    Ids(String),
}

impl SkillFilter {
    /// Exactly `"all"`, or an empty string, means no skill filter.
    /// Anything else is kept verbatim as the id list.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == "all" {
            Self::All
        } else {
            Self::Ids(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Ids(ids) => ids,
        }
    }
}

impl Default for SkillFilter {
    fn default() -> Self {
        Self::Ids(DEFAULT_SKILLS.to_string())
    }
}

impl fmt::Display for SkillFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter options for a project search.
///
/// Zero price and rate bounds mean "unbounded" and never reach the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Project types, e.g. `hourly,fixed`
    pub project_types: String,
    /// Client country codes, in the order given
    pub client_countries: Vec<String>,
    pub fixed_price_min: i64,
    pub fixed_price_max: i64,
    pub hourly_rate_min: i64,
    pub hourly_rate_max: i64,
    pub skills: SkillFilter,
    /// Sort key; `latest` is the site default
    pub sort: String,
    /// Free-text search query
    pub query: String,
    /// 1-based result page
    pub page: i64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            project_types: DEFAULT_TYPES.to_string(),
            client_countries: DEFAULT_CLIENT_COUNTRIES
                .split(',')
                .map(str::to_string)
                .collect(),
            fixed_price_min: 0,
            fixed_price_max: 0,
            hourly_rate_min: 0,
            hourly_rate_max: 0,
            skills: SkillFilter::default(),
            sort: DEFAULT_SORT.to_string(),
            query: String::new(),
            page: 1,
        }
    }
}

/// HTTP settings for fetching the search page
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
