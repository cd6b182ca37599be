//! Fixed request configuration for the AccuWeather health & activities page.
//!
//! Everything here is constant at runtime. [`FetchConfig`] exists so the values are
//! passed explicitly into [`PageFetcher`](crate::PageFetcher), and so tests can point
//! the fetcher at a local server.

use bon::Builder;
use std::time::Duration;

/// The page listing pollen and air quality categories for Leiden, NL.
pub const POLLEN_PAGE_URL: &str =
    "https://www.accuweather.com/en/nl/leiden/251527/health-activities/251527";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Headers sent with every request, mimicking a desktop browser.
///
/// `Accept-Encoding` advertises brotli and deflate, but only gzip is decoded; see
/// [`ContentEncoding`](crate::ContentEncoding).
pub const BROWSER_HEADERS: [(&str, &str); 6] = [
    ("User-Agent", USER_AGENT),
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.5"),
    ("Accept-Encoding", "gzip, deflate, br"),
    ("Connection", "keep-alive"),
    ("Upgrade-Insecure-Requests", "1"),
];

/// Where to fetch the page from and how long to wait for it.
///
/// # Examples
///
/// ```
/// use pollen::{FetchConfig, POLLEN_PAGE_URL};
/// use std::time::Duration;
///
/// let config = FetchConfig::default();
/// assert_eq!(config.url, POLLEN_PAGE_URL);
/// assert_eq!(config.timeout, Duration::from_secs(15));
///
/// let local = FetchConfig::builder()
///     .url("http://127.0.0.1:8080/health-activities")
///     .timeout(Duration::from_millis(500))
///     .build();
/// assert_eq!(local.headers.len(), 6);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct FetchConfig {
    #[builder(into, default = POLLEN_PAGE_URL.to_string())]
    pub url: String,
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
    #[builder(default = BROWSER_HEADERS.to_vec())]
    pub headers: Vec<(&'static str, &'static str)>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig::builder().build()
    }
}
