use std::sync::Arc;
use std::time::Duration;

use cisl_loader::{ContentLoader, DirSource, HttpSource, LoadError};

use crate::config::SiteConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the loader and config sit behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<SiteConfig>,
    /// Loader used to fill in page sections.
    pub loader: ContentLoader,
}

impl AppState {
    /// Build state from config, choosing the data source it names.
    ///
    /// With `data_base_url` set, data is read over HTTP; otherwise from
    /// `{site_root}/{data_path}` on disk.
    pub fn from_config(config: SiteConfig) -> Result<Self, LoadError> {
        let loader = match &config.data_base_url {
            Some(base_url) => ContentLoader::new(HttpSource::new(
                base_url,
                &config.data_path,
                Duration::from_secs(config.fetch_timeout_secs),
            )?),
            None => ContentLoader::new(DirSource::new(&config.site_root, &config.data_path)),
        };

        Ok(Self {
            config: Arc::new(config),
            loader,
        })
    }
}
