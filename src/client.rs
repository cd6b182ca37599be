//! Entry point tying the page fetcher and the extractor together.

use crate::config::FetchConfig;
use crate::error::PollenError;
use crate::extract::extractor::extract_records;
use crate::fetch::page_fetcher::PageFetcher;
use crate::types::record::PollenRecord;
use log::{info, warn};

/// Fetches and parses the pollen page.
///
/// Nothing is cached: every call to [`PollenClient::levels`] downloads the page again.
///
/// # Examples
///
/// ```no_run
/// # use pollen::{PollenClient, PollenError};
/// # async fn run() -> Result<(), PollenError> {
/// let client = PollenClient::new()?;
/// for record in client.levels().await? {
///     println!("{}: {}", record.name, record.status);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PollenClient {
    fetcher: PageFetcher,
}

impl PollenClient {
    /// Client for the default Leiden page.
    pub fn new() -> Result<Self, PollenError> {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Result<Self, PollenError> {
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
        })
    }

    /// Downloads the page and returns the pollen categories on it.
    ///
    /// # Errors
    ///
    /// Returns [`PollenError::Fetch`] if the page could not be downloaded, and
    /// [`PollenError::NoData`] if it was downloaded but no relevant category was found.
    pub async fn levels(&self) -> Result<Vec<PollenRecord>, PollenError> {
        let html = self.fetcher.fetch().await?;
        let records = extract_records(&html);
        if records.is_empty() {
            warn!("No pollen categories in {} bytes of markup", html.len());
            return Err(PollenError::NoData(self.fetcher.config().url.clone()));
        }
        info!("Extracted {} pollen categories", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::PollenClient;
    use crate::config::FetchConfig;
    use crate::error::PollenError;
    use crate::fetch::error::FetchError;
    use crate::types::record::PollenRecord;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_serving(template: ResponseTemplate) -> (MockServer, PollenClient) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(template)
            .mount(&server)
            .await;
        let config = FetchConfig::builder().url(server.uri()).build();
        let client = PollenClient::with_config(config).unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn test_levels() -> Result<(), PollenError> {
        let page = r#"
            <a class="index-list-card" href="/1"><div class="index-name">Tree Pollen</div><div class="index-status-text">Low</div></a>
            <a class="index-list-card" href="/2"><div class="index-name">UV Index</div><div class="index-status-text">High</div></a>
            <a class="index-list-card" href="/3"><div class="index-name">Dust &amp; Dander</div><div class="index-status-text">Moderate</div></a>
        "#;
        let (_server, client) =
            client_serving(ResponseTemplate::new(200).set_body_string(page)).await;

        let records = client.levels().await?;
        assert_eq!(
            records,
            vec![
                PollenRecord::new("Tree Pollen", "Low"),
                PollenRecord::new("Dust & Dander", "Moderate"),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_levels_without_cards_is_no_data() {
        let (_server, client) = client_serving(
            ResponseTemplate::new(200).set_body_string("<html>redesigned</html>"),
        )
        .await;

        let err = client.levels().await.unwrap_err();
        assert!(matches!(err, PollenError::NoData(_)));
    }

    #[tokio::test]
    async fn test_levels_propagates_fetch_errors() {
        let (_server, client) = client_serving(ResponseTemplate::new(503)).await;

        let err = client.levels().await.unwrap_err();
        assert!(matches!(err, PollenError::Fetch(FetchError::HttpStatus { .. })));
        assert!(err.to_string().contains("503"));
    }
}
