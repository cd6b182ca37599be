mod client;
mod config;
mod error;
mod extract;
mod fetch;
pub mod report;
mod types;

pub use client::PollenClient;
pub use config::*;
pub use error::PollenError;

pub use extract::extractor::{extract_records, is_relevant, RELEVANCE_KEYWORDS};
pub use fetch::encoding::ContentEncoding;
pub use fetch::error::FetchError;
pub use fetch::page_fetcher::PageFetcher;

pub use types::pollen_kind::PollenKind;
pub use types::record::PollenRecord;
pub use types::severity::Severity;
