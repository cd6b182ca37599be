use crate::config::FetchConfig;
use crate::fetch::encoding::{read_body, ContentEncoding};
use crate::fetch::error::FetchError;
use futures_util::TryStreamExt;
use log::{debug, info, warn};
use reqwest::Client;
use tokio_util::io::StreamReader;

/// Downloads the pollen page once per call.
///
/// The underlying client never decodes bodies on its own: the `Content-Encoding`
/// branch in [`PageFetcher::fetch`] is the only decoding step.
pub struct PageFetcher {
    config: FetchConfig,
    client: Client,
}

impl PageFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .no_gzip()
            .no_brotli()
            .no_deflate()
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches the page and returns its markup as text.
    ///
    /// Invalid UTF-8 in the body is replaced rather than treated as an error.
    ///
    /// # Errors
    ///
    /// * [`FetchError::Timeout`] if no complete response arrived within the configured timeout.
    /// * [`FetchError::NetworkRequest`] for connection and other transport failures.
    /// * [`FetchError::HttpStatus`] for any non-2xx status.
    /// * [`FetchError::Decompression`] if a gzip-declared body fails to decompress.
    /// * [`FetchError::BodyRead`] if a plain body fails to download.
    pub async fn fetch(&self) -> Result<String, FetchError> {
        let url = &self.config.url;
        info!("Fetching pollen page from {}", url);

        let request = self
            .config
            .headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| {
                request.header(*name, *value)
            });

        let response = request
            .send()
            .await
            .map_err(|e| self.classify_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error for {}: {}", url, status);
            return Err(FetchError::HttpStatus {
                url: url.clone(),
                status,
            });
        }

        let encoding = ContentEncoding::from_headers(response.headers());
        if let ContentEncoding::Passthrough(Some(other)) = &encoding {
            // Only gzip is decoded; brotli/deflate bodies come back compressed.
            warn!("Content-Encoding '{}' is not decoded, reading body as-is", other);
        }
        debug!("Response {} with encoding {:?}", status, encoding);

        let stream = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
        let body = read_body(&encoding, StreamReader::new(stream))
            .await
            .map_err(|e| match &encoding {
                ContentEncoding::Gzip => FetchError::Decompression(url.clone(), e),
                ContentEncoding::Passthrough(_) => FetchError::BodyRead(url.clone(), e),
            })?;

        info!("Read {} bytes from {}", body.len(), url);
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn classify_request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                url: self.config.url.clone(),
                timeout: self.config.timeout,
                source: e,
            }
        } else {
            FetchError::NetworkRequest(self.config.url.clone(), e)
        }
    }
}
