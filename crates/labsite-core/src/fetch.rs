//! Fetch a backing JSON document over HTTP or from the local filesystem.
//!
//! Uses async reqwest internally with tokio::time::timeout for stall detection,
//! but presents a sync interface so callers stay single-threaded.

use std::path::PathBuf;
use std::sync::{LazyLock, OnceLock};
use std::time::Duration;

use crate::error::LoadError;

/// Connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for the whole body to arrive
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime-tunable fetch settings (set once at startup from config/CLI)
#[derive(Debug, Clone, Copy)]
pub struct FetchConfig {
    pub read_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

static FETCH_CONFIG: OnceLock<FetchConfig> = OnceLock::new();

/// Install global fetch settings. Only the first call takes effect.
pub fn set_fetch_config(config: FetchConfig) {
    if FETCH_CONFIG.set(config).is_err() {
        log::debug!("fetch config already set, ignoring {config:?}");
    }
}

/// Current fetch settings (defaults if never set)
pub fn fetch_config() -> FetchConfig {
    FETCH_CONFIG.get().copied().unwrap_or_default()
}

/// Shared async HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
});

/// Get shared HTTP client.
pub fn http_client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

/// Shared tokio runtime for HTTP operations.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// Where a data document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Url(String),
    File(PathBuf),
}

impl DocumentSource {
    /// `http(s)://` locations are fetched, `file://` and bare paths are read from disk.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else if let Some(path) = location.strip_prefix("file://") {
            Self::File(PathBuf::from(path))
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<&str> for DocumentSource {
    fn from(location: &str) -> Self {
        Self::parse(location)
    }
}

/// Fetch a document and parse it as JSON.
///
/// No retry: a failed fetch is reported once and the caller decides what to show.
pub fn fetch_document(source: &DocumentSource) -> Result<serde_json::Value, LoadError> {
    let body = match source {
        DocumentSource::Url(url) => fetch_url(url)?,
        DocumentSource::File(path) => std::fs::read(path)?,
    };
    log::debug!("{source}: {} bytes", body.len());
    Ok(serde_json::from_slice(&body)?)
}

fn fetch_url(url: &str) -> Result<Vec<u8>, LoadError> {
    let read_timeout = fetch_config().read_timeout;
    SHARED_RUNTIME.block_on(async {
        let request = async {
            let response = SHARED_CLIENT
                .get(url)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(LoadError::from_reqwest)?;
            let bytes = response.bytes().await.map_err(LoadError::from_reqwest)?;
            Ok::<_, LoadError>(bytes.to_vec())
        };

        match tokio::time::timeout(read_timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(LoadError::Http {
                status: None,
                message: format!("timed out after {}s", read_timeout.as_secs()),
            }),
        }
    })
}
