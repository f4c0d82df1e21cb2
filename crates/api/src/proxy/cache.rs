use std::collections::HashMap;

use axum::body::Bytes;
use tokio::sync::Mutex;

/// Default number of entries the cache may hold before it is cleared.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Image bytes and the media type the upstream reported for them.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedImage {
    pub content: Bytes,
    pub media_type: String,
}

/// In-memory image cache keyed by the URL the client asked for.
///
/// There is no eviction policy: once the cache holds more than `capacity`
/// entries, the next insert clears everything first. Entries never expire.
pub struct ImageCache {
    entries: Mutex<HashMap<String, CachedImage>>,
    capacity: usize,
}

impl ImageCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity,
        }
    }

    /// Look up a cached image. `Bytes` clones are reference-counted.
    pub async fn get(&self, url: &str) -> Option<CachedImage> {
        self.entries.lock().await.get(url).cloned()
    }

    /// Store an image, clearing the whole cache first if it is over capacity.
    pub async fn insert(&self, url: String, image: CachedImage) {
        let mut entries = self.entries.lock().await;
        if entries.len() > self.capacity {
            tracing::debug!(entries = entries.len(), "Image cache over capacity, clearing");
            entries.clear();
        }
        entries.insert(url, image);
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(tag: &'static str) -> CachedImage {
        CachedImage {
            content: Bytes::from_static(tag.as_bytes()),
            media_type: "image/png".to_string(),
        }
    }

    #[tokio::test]
    async fn get_returns_inserted_image() {
        let cache = ImageCache::new(4);
        assert!(cache.get("a").await.is_none());

        cache.insert("a".to_string(), image("A")).await;
        assert_eq!(cache.get("a").await, Some(image("A")));
    }

    #[tokio::test]
    async fn cleared_only_after_exceeding_capacity() {
        let cache = ImageCache::new(2);
        for key in ["a", "b", "c"] {
            cache.insert(key.to_string(), image("x")).await;
        }
        // Holding 2 entries is not over capacity, so the third insert kept them.
        assert_eq!(cache.len().await, 3);

        cache.insert("d".to_string(), image("x")).await;
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("a").await.is_none());
        assert!(cache.get("d").await.is_some());
    }

    #[tokio::test]
    async fn reinsert_overwrites() {
        let cache = ImageCache::default();
        cache.insert("a".to_string(), image("old")).await;
        cache.insert("a".to_string(), image("new")).await;
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get("a").await, Some(image("new")));
    }
}
