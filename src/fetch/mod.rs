pub mod encoding;
pub mod error;
pub mod page_fetcher;
