//! Listing card extraction.
//!
//! Card markup varies between listings, so every field resolves to an empty
//! string when its element is missing instead of failing the page.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ScrapeError;
use crate::models::Project;
use crate::scrapers::text::normalize_text;
use crate::scrapers::types::SITE_ORIGIN;

const CARD: &str = ".JobSearchCard-item";
const TITLE_LINK: &str = ".JobSearchCard-primary-heading a";
const CTA_LINK: &str = "a.JobSearchCard-ctas-btn";
const DESCRIPTION: &str = ".JobSearchCard-primary-description";
const DAYS_LEFT: &str = ".JobSearchCard-primary-heading-days";
const PRICE: &str = ".JobSearchCard-secondary-price";
const BIDS: &str = ".JobSearchCard-secondary-entry";

/// Label the site appends to the price, e.g. `$25 USD Avg Bid`
const AVG_BID_LABEL: &str = "Avg Bid";

/// Parsed CSS selectors for one listing page layout
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    card: Selector,
    title_link: Selector,
    cta_link: Selector,
    description: Selector,
    days_left: Selector,
    price: Selector,
    bids: Selector,
}

impl ListingSelectors {
    /// Selectors for the freelancer.com search results page
    pub fn freelancer() -> Result<Self, ScrapeError> {
        Ok(Self {
            card: parse_selector(CARD)?,
            title_link: parse_selector(TITLE_LINK)?,
            cta_link: parse_selector(CTA_LINK)?,
            description: parse_selector(DESCRIPTION)?,
            days_left: parse_selector(DAYS_LEFT)?,
            price: parse_selector(PRICE)?,
            bids: parse_selector(BIDS)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::selector(selector, e))
}

/// Extract every listing card from `html`, in document order.
///
/// Cards with missing pieces are still returned, with those fields empty.
pub fn extract_projects(html: &str, selectors: &ListingSelectors) -> Vec<Project> {
    let document = Html::parse_document(html);

    let projects: Vec<Project> = document
        .select(&selectors.card)
        .map(|card| project_from_card(card, selectors))
        .collect();

    debug!("Extracted {} listing cards", projects.len());
    projects
}

fn project_from_card(card: ElementRef<'_>, selectors: &ListingSelectors) -> Project {
    let price = resolve_price(card, selectors);

    Project {
        title: resolve_text(card, &selectors.title_link),
        link: resolve_link(card, selectors),
        budget: price.clone(),
        average_bid: price,
        bids_count: resolve_text(card, &selectors.bids),
        time_left: resolve_text(card, &selectors.days_left),
        description: resolve_text(card, &selectors.description),
    }
}

/// Normalized text of all elements matching `selector`, or `""` if none.
pub fn resolve_text(card: ElementRef<'_>, selector: &Selector) -> String {
    let raw: String = card.select(selector).flat_map(|el| el.text()).collect();
    normalize_text(&raw)
}

/// `href` of the first element matching `selector`, if it has one.
pub fn resolve_href(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string)
}

/// Project link: the call-to-action button first, then the heading link.
pub fn resolve_link(card: ElementRef<'_>, selectors: &ListingSelectors) -> String {
    let href = resolve_href(card, &selectors.cta_link)
        .or_else(|| resolve_href(card, &selectors.title_link))
        .unwrap_or_default();
    absolutize(&href)
}

/// Price text with the "Avg Bid" label removed.
///
/// This single value fills both `budget` and `average_bid`.
pub fn resolve_price(card: ElementRef<'_>, selectors: &ListingSelectors) -> String {
    let price = resolve_text(card, &selectors.price);
    normalize_text(&price.replace(AVG_BID_LABEL, ""))
}

/// Prefix site-relative links with the site origin; anything else passes through.
pub fn absolutize(href: &str) -> String {
    if href.starts_with('/') {
        format!("{SITE_ORIGIN}{href}")
    } else {
        href.to_string()
    }
}
