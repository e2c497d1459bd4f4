//! Freelancer.com project search scraper and exporter.

pub mod cli;
pub mod error;
pub mod export;
pub mod models;
pub mod scrapers;
