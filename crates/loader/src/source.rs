//! Where resource bytes come from.
//!
//! [`HttpSource`] reads `{base_url}/{data_path}/{name}` with [`reqwest`];
//! [`DirSource`] reads `{root}/{data_path}/{name}` from disk. Neither one
//! parses the body; that is the loader's job.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::LoadError;

/// Default data directory, relative to the site root or base URL.
pub const DEFAULT_DATA_PATH: &str = "data";

/// Default timeout for a single HTTP resource read.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A read-only store of named JSON resources.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Read the raw body of the named resource.
    async fn read(&self, name: &str) -> Result<Vec<u8>, LoadError>;
}

// ---------------------------------------------------------------------------
// HttpSource
// ---------------------------------------------------------------------------

/// Plain unauthenticated GETs against a fixed base location.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
    data_path: String,
}

impl HttpSource {
    /// Create a source reading from `{base_url}/{data_path}/`.
    ///
    /// * `base_url` - Site origin, e.g. `https://example.org`. A trailing
    ///   slash is ignored.
    /// * `data_path` - Data directory below the origin, e.g. `data`.
    pub fn new(
        base_url: &str,
        data_path: &str,
        timeout: Duration,
    ) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, data_path))
    }

    /// Create a source reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str, data_path: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            data_path: data_path.trim_matches('/').to_string(),
        }
    }

    /// Full URL of a resource.
    pub fn url_for(&self, name: &str) -> String {
        if self.data_path.is_empty() {
            format!("{}/{}", self.base_url, name)
        } else {
            format!("{}/{}/{}", self.base_url, self.data_path, name)
        }
    }
}

#[async_trait]
impl ResourceSource for HttpSource {
    async fn read(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        let response = self.client.get(self.url_for(name)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                resource: name.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

// ---------------------------------------------------------------------------
// DirSource
// ---------------------------------------------------------------------------

/// Resources stored as files under a local directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// Read resources from `{root}/{data_path}/`.
    pub fn new(root: impl Into<PathBuf>, data_path: &str) -> Self {
        Self {
            dir: root.into().join(data_path.trim_matches('/')),
        }
    }
}

#[async_trait]
impl ResourceSource for DirSource {
    async fn read(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(self.dir.join(name))
            .await
            .map_err(|source| LoadError::Io {
                resource: name.to_string(),
                source,
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
