//! Record source adapters
//!
//! The lookup engine never assumes how certificate records are stored or
//! served; it only requires one read that yields the full current snapshot.
//! Two transports are provided behind the same interface: a remote JSON
//! endpoint and a local JSON file.

use crate::error::AppError;
use crate::registry::record::Record;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Errors from a record source read
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("record source fetch failed: {0}")]
    Fetch(String),
    #[error("record source returned malformed data: {0}")]
    Parse(String),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Fetch(msg) => AppError::SourceFetchFailed(msg),
            SourceError::Parse(msg) => AppError::SourceParseFailed(msg),
        }
    }
}

/// A collaborator that supplies the full current set of certificate records.
///
/// One call per lookup, no pagination, no partial reads. Order of the
/// returned records is meaningful and must be preserved by callers.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, SourceError>;
}

/// Record source backed by an HTTP endpoint serving a JSON array of records
pub struct HttpRecordSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRecordSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = crate::http::client_with_timeout(Duration::from_secs(30));
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, SourceError> {
        debug!("Fetching records from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SourceError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(SourceError::Fetch(format!(
                "Record source error {}: {}",
                status, text
            )));
        }

        let records: Vec<Record> = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        debug!("Fetched {} records", records.len());
        Ok(records)
    }
}

/// Record source backed by a local JSON file
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, SourceError> {
        debug!("Reading records from {}", self.path.display());

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::Fetch(format!("{}: {}", self.path.display(), e)))?;

        let records: Vec<Record> =
            serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse(e.to_string()))?;

        debug!("Read {} records", records.len());
        Ok(records)
    }
}

/// Record source selected from a location string.
///
/// `http://` and `https://` locations get the HTTP adapter; everything else
/// is treated as a local file path.
pub enum ConfiguredSource {
    Http(HttpRecordSource),
    File(FileRecordSource),
}

impl ConfiguredSource {
    pub fn from_location(location: &str) -> Result<Self, AppError> {
        if location.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Record source location cannot be empty".to_string(),
            ));
        }

        match Url::parse(location) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                Ok(ConfiguredSource::Http(HttpRecordSource::new(location)))
            }
            Ok(url) if url.scheme() == "file" => Ok(ConfiguredSource::File(FileRecordSource::new(
                url.path().to_string(),
            ))),
            // Not a URL: a plain file path like ./records.json
            _ => Ok(ConfiguredSource::File(FileRecordSource::new(location))),
        }
    }
}

impl RecordSource for ConfiguredSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, SourceError> {
        match self {
            ConfiguredSource::Http(source) => source.fetch_records().await,
            ConfiguredSource::File(source) => source.fetch_records().await,
        }
    }
}
