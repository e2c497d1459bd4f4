//! Turns a [`FilterConfig`] into the search URL and its provenance record.

use url::form_urlencoded;

use crate::models::QueryParameters;
use crate::scrapers::types::{FilterConfig, SkillFilter, DEFAULT_SORT, SEARCH_URL};

const SKILLS_KEY: &str = "projectSkills";

/// A built search: the URL to fetch and the parameters that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub url: String,
    /// Every filter that was set, including `projectSkills=all`, which the
    /// URL leaves out.
    pub parameters: QueryParameters,
}

/// Build the search URL for `config`.
///
/// No request is made here.
pub fn build_search_url(config: &FilterConfig) -> SearchQuery {
    let mut parameters = QueryParameters::new();

    if !config.project_types.is_empty() {
        parameters.insert("types", config.project_types.as_str());
    }

    if !config.client_countries.is_empty() {
        parameters.insert("clientCountries", config.client_countries.join(","));
    }

    for (key, bound) in [
        ("projectFixedPriceMin", config.fixed_price_min),
        ("projectFixedPriceMax", config.fixed_price_max),
        ("projectHourlyRateMin", config.hourly_rate_min),
        ("projectHourlyRateMax", config.hourly_rate_max),
    ] {
        if bound > 0 {
            parameters.insert(key, bound.to_string());
        }
    }

    parameters.insert(SKILLS_KEY, config.skills.as_str());

    if !config.sort.is_empty() && config.sort != DEFAULT_SORT {
        parameters.insert("projectSort", config.sort.as_str());
    }

    if !config.query.is_empty() {
        parameters.insert("q", config.query.as_str());
    }

    if config.page > 1 {
        parameters.insert("page", config.page.to_string());
    }

    let skip_skills = config.skills == SkillFilter::All;
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(
            parameters
                .iter()
                .filter(|(key, _)| !(skip_skills && *key == SKILLS_KEY)),
        )
        .finish();

    let url = if encoded.is_empty() {
        SEARCH_URL.to_string()
    } else {
        format!("{SEARCH_URL}?{encoded}")
    };

    SearchQuery { url, parameters }
}
