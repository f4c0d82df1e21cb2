use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory uploaded photos are written to and served from.
    pub upload_dir: PathBuf,
    /// Request body limit for submissions, in bytes (default: 50 MiB).
    pub max_upload_bytes: usize,
    /// Proxy cache is cleared once it holds more than this many entries.
    pub proxy_cache_capacity: usize,
    /// Upstream fetch timeout for the image proxy, in seconds.
    pub proxy_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:8000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPLOAD_DIR`           | `uploads`                  |
    /// | `MAX_UPLOAD_BYTES`     | `52428800`                 |
    /// | `PROXY_CACHE_CAPACITY` | `50`                       |
    /// | `PROXY_TIMEOUT_SECS`   | `15`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = parse_env("PORT", "8000");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", "30"),
            upload_dir,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", "52428800"),
            proxy_cache_capacity: parse_env("PROXY_CACHE_CAPACITY", "50"),
            proxy_timeout_secs: parse_env("PROXY_TIMEOUT_SECS", "15"),
        }
    }
}

/// Read and parse an env var, panicking on malformed values so
/// misconfiguration fails at startup.
fn parse_env<T>(key: &str, default: &str) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .unwrap_or_else(|e| panic!("{key} must be a valid {}: {e}", std::any::type_name::<T>()))
}
