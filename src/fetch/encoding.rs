use async_compression::tokio::bufread::GzipDecoder;
use reqwest::header::{HeaderMap, CONTENT_ENCODING};
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};

/// Content encoding declared by the response, as far as decoding is concerned.
///
/// Only gzip is decoded. Every other value (including `br` and `deflate`, which are
/// advertised in `Accept-Encoding`) is read as-is, so a brotli body comes back
/// still compressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
    /// Absent header, or an encoding that is passed through undecoded.
    Passthrough(Option<String>),
}

impl ContentEncoding {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let declared = headers
            .get(CONTENT_ENCODING)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        match declared.as_deref() {
            Some("gzip") => ContentEncoding::Gzip,
            _ => ContentEncoding::Passthrough(declared),
        }
    }
}

/// Reads `body` to the end, gunzipping it first if `encoding` says so.
pub(crate) async fn read_body<R>(encoding: &ContentEncoding, body: R) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    match encoding {
        ContentEncoding::Gzip => {
            let mut decoder = GzipDecoder::new(BufReader::new(body));
            // Concatenated gzip members form one body.
            decoder.multiple_members(true);
            decoder.read_to_end(&mut bytes).await?;
        }
        ContentEncoding::Passthrough(_) => {
            let mut reader = body;
            reader.read_to_end(&mut bytes).await?;
        }
    }
    Ok(bytes)
}
