//! Remote image proxy with an in-memory cache.
//!
//! The admin page shows photos customers linked from Google Drive. Browsers
//! cannot embed Drive share links directly, so the server fetches the bytes
//! (rewriting share links to direct links) and caches them by URL.

pub mod cache;
pub mod source;

use std::sync::Arc;

use sill_core::drive::direct_image_url;

pub use cache::{CachedImage, ImageCache};
pub use source::{HttpImageSource, ImageSource};

/// Error type for proxy fetch failures.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("Image request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server answered with something other than 200.
    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),
}

/// Cache-first image fetcher shared through application state.
pub struct ImageProxy {
    cache: ImageCache,
    source: Arc<dyn ImageSource>,
}

impl ImageProxy {
    pub fn new(source: Arc<dyn ImageSource>, cache_capacity: usize) -> Self {
        Self {
            cache: ImageCache::new(cache_capacity),
            source,
        }
    }

    /// Return the image for `url`, fetching it on a cache miss.
    ///
    /// The cache key is the URL as given; Drive share links are rewritten
    /// only for the upstream request.
    pub async fn get(&self, url: &str) -> Result<CachedImage, ProxyError> {
        if let Some(hit) = self.cache.get(url).await {
            tracing::debug!(url, "Image proxy cache hit");
            return Ok(hit);
        }

        let fetch_url = direct_image_url(url);
        tracing::debug!(url, fetch_url = %fetch_url, "Image proxy cache miss, fetching");
        let image = self.source.fetch(&fetch_url).await?;

        self.cache.insert(url.to_string(), image.clone()).await;
        Ok(image)
    }

    /// Number of cached images.
    pub async fn cached_count(&self) -> usize {
        self.cache.len().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use axum::body::Bytes;

    use super::*;

    /// Source that records every URL it is asked for.
    #[derive(Default)]
    struct RecordingSource {
        calls: AtomicUsize,
        urls: Mutex<Vec<String>>,
        fail_with: Option<u16>,
    }

    #[async_trait]
    impl ImageSource for RecordingSource {
        async fn fetch(&self, url: &str) -> Result<CachedImage, ProxyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.urls.lock().unwrap().push(url.to_string());
            if let Some(status) = self.fail_with {
                return Err(ProxyError::UpstreamStatus(status));
            }
            Ok(CachedImage {
                content: Bytes::from(format!("bytes-of:{url}")),
                media_type: "image/png".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn second_request_served_from_cache() {
        let source = Arc::new(RecordingSource::default());
        let proxy = ImageProxy::new(source.clone(), 50);

        let first = proxy.get("https://example.com/a.png").await.unwrap();
        let second = proxy.get("https://example.com/a.png").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn drive_link_rewritten_but_cached_under_original() {
        let source = Arc::new(RecordingSource::default());
        let proxy = ImageProxy::new(source.clone(), 50);
        let share = "https://drive.google.com/file/d/ABC123/view?usp=sharing";

        proxy.get(share).await.unwrap();
        proxy.get(share).await.unwrap();

        let urls = source.urls.lock().unwrap().clone();
        assert_eq!(urls, ["https://drive.google.com/uc?export=view&id=ABC123"]);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let source = Arc::new(RecordingSource {
            fail_with: Some(404),
            ..Default::default()
        });
        let proxy = ImageProxy::new(source.clone(), 50);

        assert_matches!(
            proxy.get("https://example.com/missing.png").await,
            Err(ProxyError::UpstreamStatus(404))
        );
        assert!(proxy.get("https://example.com/missing.png").await.is_err());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(proxy.cached_count().await, 0);
    }

    #[tokio::test]
    async fn cache_cleared_after_capacity_exceeded() {
        let source = Arc::new(RecordingSource::default());
        let proxy = ImageProxy::new(source.clone(), 2);

        for i in 0..4 {
            proxy.get(&format!("https://example.com/{i}.png")).await.unwrap();
        }
        assert_eq!(proxy.cached_count().await, 1);

        // The first URL was dropped by the clear and must be fetched again.
        proxy.get("https://example.com/0.png").await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 5);
    }
}
