//! Data sources — where the job sheet bytes come from.
//!
//! A location string starting with `http://` is fetched with a plain
//! `hyper` client; anything else is read from the local filesystem. There
//! is no TLS stack, so `https://` locations fail with a fetch error.

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use jobboard_core::LoadError;
use std::fmt;
use std::path::PathBuf;

const FETCH_FAILED: &str = "Failed to fetch jobs file";

/// A job sheet location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Http(String),
}

impl DataSource {
    /// Classify a location string. Never fails; scheme problems surface at
    /// [`fetch`](Self::fetch) time.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Http(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }

    /// Read the whole sheet into memory.
    pub async fn fetch(&self) -> Result<Bytes, LoadError> {
        match self {
            DataSource::File(path) => tokio::fs::read(path).await.map(Bytes::from).map_err(|e| {
                LoadError::Fetch(format!("{FETCH_FAILED} ({}: {e})", path.display()))
            }),
            DataSource::Http(url) => fetch_http(url).await,
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Http(url) => f.write_str(url),
        }
    }
}

async fn fetch_http(url: &str) -> Result<Bytes, LoadError> {
    let uri: hyper::Uri = url
        .parse()
        .map_err(|e| LoadError::Fetch(format!("{FETCH_FAILED} (invalid url {url}: {e})")))?;
    if uri.scheme_str() != Some("http") {
        return Err(LoadError::Fetch(format!(
            "{FETCH_FAILED} (unsupported scheme {})",
            uri.scheme_str().unwrap_or("none")
        )));
    }

    let client = Client::builder(TokioExecutor::new()).build_http::<Empty<Bytes>>();
    let response = client
        .get(uri)
        .await
        .map_err(|e| LoadError::Fetch(format!("{FETCH_FAILED} ({e})")))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, %status, "job sheet request failed");
        return Err(LoadError::Fetch(format!("{FETCH_FAILED} ({status})")));
    }

    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| LoadError::Fetch(format!("{FETCH_FAILED} ({e})")))?
        .to_bytes();
    tracing::debug!(%url, bytes = body.len(), "job sheet fetched");
    Ok(body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
