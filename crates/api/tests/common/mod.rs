#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use sill_api::config::ServerConfig;
use sill_api::proxy::{CachedImage, ImageProxy, ImageSource, ProxyError};
use sill_api::router::build_app_router;
use sill_api::state::AppState;

/// Build a test `ServerConfig` that writes uploads under `upload_dir`.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8000".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.to_path_buf(),
        max_upload_bytes: 10 * 1024 * 1024,
        proxy_cache_capacity: 50,
        proxy_timeout_secs: 5,
    }
}

/// Shared scratch directory for tests that never inspect uploads.
fn default_upload_dir() -> PathBuf {
    std::env::temp_dir().join("sill-api-tests")
}

/// Build the full application router with an image source that always fails.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_in(pool, &default_upload_dir())
}

/// Build the full application router writing uploads to `upload_dir`.
pub fn build_test_app_in(pool: PgPool, upload_dir: &Path) -> Router {
    build_test_app_with_source(pool, upload_dir, Arc::new(UnreachableSource))
}

/// Build the full application router with the given image source behind the
/// proxy. Goes through `build_app_router` so tests run the production
/// middleware stack.
pub fn build_test_app_with_source(
    pool: PgPool,
    upload_dir: &Path,
    source: Arc<dyn ImageSource>,
) -> Router {
    let config = test_config(upload_dir);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        image_proxy: Arc::new(ImageProxy::new(source, config.proxy_cache_capacity)),
    };
    build_app_router(state, &config)
}

/// Image source for tests that must not reach the network.
struct UnreachableSource;

#[async_trait]
impl ImageSource for UnreachableSource {
    async fn fetch(&self, _url: &str) -> Result<CachedImage, ProxyError> {
        Err(ProxyError::UpstreamStatus(502))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a multipart body built with [`MultipartBody`].
pub async fn post_multipart(app: Router, uri: &str, body: MultipartBody) -> Response<Body> {
    let (content_type, bytes) = body.finish();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(bytes))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

fn percent_encode(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Multipart builder
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "sill-test-boundary-7d9f";

/// Minimal `multipart/form-data` encoder for request tests.
#[derive(Default)]
pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.bytes
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        (
            format!("multipart/form-data; boundary={BOUNDARY}"),
            self.bytes,
        )
    }
}

/// Encode a solid-colour PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_image(width, height, image::ImageFormat::Png)
}

/// Encode a solid-colour JPEG of the given size.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_image(width, height, image::ImageFormat::Jpeg)
}

fn encode_image(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 200, 200]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}
