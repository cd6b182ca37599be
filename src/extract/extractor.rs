//! Pulls pollen categories out of the raw health & activities markup.
//!
//! The page is treated as text: each category is an `<a class="... index-list-card ...">`
//! card holding an `index-name` div and an `index-status-text` div. Markup that
//! doesn't look like that is skipped, so a redesigned page yields an empty list
//! rather than an error.

use crate::types::record::PollenRecord;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// A category is kept only if its lowercased name contains one of these.
pub const RELEVANCE_KEYWORDS: [&str; 3] = ["pollen", "mold", "dust"];

lazy_static! {
    static ref CARD_REGEX: Regex =
        Regex::new(r#"(?s)<a[^>]*class="[^"]*index-list-card[^"]*"[^>]*>(.*?)</a>"#)
            .expect("card regex is valid");
    static ref NAME_REGEX: Regex =
        Regex::new(r#"<div class="index-name"[^>]*>([^<]+)</div>"#).expect("name regex is valid");
    static ref STATUS_REGEX: Regex =
        Regex::new(r#"<div class="index-status-text">([^<]+)</div>"#)
            .expect("status regex is valid");
}

/// Extracts the relevant pollen records from `html`, in page order.
///
/// # Examples
///
/// ```
/// use pollen::extract_records;
///
/// let html = r#"
/// <a class="index-list-card" href="/tree">
///   <div class="index-name">Tree Pollen</div>
///   <div class="index-status-text">Low</div>
/// </a>
/// <a class="index-list-card" href="/uv">
///   <div class="index-name">UV Index</div>
///   <div class="index-status-text">High</div>
/// </a>"#;
///
/// let records = extract_records(html);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "Tree Pollen");
/// assert_eq!(records[0].status, "Low");
/// ```
pub fn extract_records(html: &str) -> Vec<PollenRecord> {
    let mut records = Vec::new();
    let mut cards = 0;

    for card in CARD_REGEX.captures_iter(html) {
        cards += 1;
        let Some(content) = card.get(1) else {
            continue;
        };
        match parse_card(content.as_str()) {
            Some(record) if is_relevant(&record.name) => records.push(record),
            Some(record) => debug!("Skipping irrelevant category '{}'", record.name),
            None => debug!("Card without name or status, skipping"),
        }
    }

    debug!("Found {} cards, kept {} records", cards, records.len());
    records
}

/// Name and status of a single card, `None` unless both are present.
fn parse_card(content: &str) -> Option<PollenRecord> {
    let name = NAME_REGEX.captures(content)?.get(1)?.as_str();
    let status = STATUS_REGEX.captures(content)?.get(1)?.as_str();
    Some(PollenRecord::new(
        name.trim().replace("&amp;", "&"),
        status.trim(),
    ))
}

pub fn is_relevant(name: &str) -> bool {
    let lower = name.to_lowercase();
    RELEVANCE_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}
