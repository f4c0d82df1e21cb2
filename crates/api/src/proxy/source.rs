use std::time::Duration;

use async_trait::async_trait;
use axum::http::header::{CONTENT_TYPE, USER_AGENT};

use super::cache::CachedImage;
use super::ProxyError;

/// Media type assumed when the upstream omits `Content-Type`.
pub const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

/// Desktop browser user agent; Google Drive serves an interstitial to
/// obvious bots.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Somewhere remote images can be fetched from.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch the image at `url` (already rewritten to a direct link).
    async fn fetch(&self, url: &str) -> Result<CachedImage, ProxyError>;
}

/// Fetches images over HTTP with `reqwest`.
pub struct HttpImageSource {
    client: reqwest::Client,
}

impl HttpImageSource {
    /// Build a source whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<CachedImage, ProxyError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ProxyError::UpstreamStatus(status.as_u16()));
        }

        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_MEDIA_TYPE)
            .to_string();
        let content = response.bytes().await?;

        Ok(CachedImage {
            content,
            media_type,
        })
    }
}
