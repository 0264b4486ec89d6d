//! Builder for configuring ModelShareApi initialization.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::PathsConfig;
use crate::error::{ModelShareError, Result};
use crate::rpc::RpcDataService;
use crate::store::SqliteStore;
use crate::{ApiInner, ModelShareApi};

/// Builder for configuring ModelShareApi initialization.
///
/// # Example
///
/// ```rust,ignore
/// use modelshare_core::ModelShareApi;
///
/// let api = ModelShareApi::builder()
///     .database("./data/modelshare.sqlite")
///     .auto_create_dirs(true)
///     .build()
///     .await?;
/// ```
#[derive(Debug, Default)]
pub struct ModelShareApiBuilder {
    database: Option<PathBuf>,
    remote_url: Option<String>,
    auto_create_dirs: bool,
}

impl ModelShareApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the SQLite database at `path`.
    ///
    /// Default: `<data dir>/modelshare/modelshare.sqlite`
    pub fn database(mut self, path: impl Into<PathBuf>) -> Self {
        self.database = Some(path.into());
        self
    }

    /// Talk to a running `modelshare-rpc` server instead of a local
    /// database. Takes precedence over [`Self::database`].
    pub fn remote(mut self, base_url: impl Into<String>) -> Self {
        self.remote_url = Some(base_url.into());
        self
    }

    /// Create the database's parent directory if it doesn't exist.
    ///
    /// Default: `false` (the directory must exist)
    pub fn auto_create_dirs(mut self, enable: bool) -> Self {
        self.auto_create_dirs = enable;
        self
    }

    /// Default database location under the platform data directory.
    pub fn default_database_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| ModelShareError::Config {
            message: "Could not determine the platform data directory".to_string(),
        })?;
        Ok(data_dir
            .join(PathsConfig::DATA_DIR_NAME)
            .join(PathsConfig::DATABASE_FILENAME))
    }

    fn ensure_parent(path: &Path, create: bool) -> Result<()> {
        let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };
        if parent.exists() {
            return Ok(());
        }
        if !create {
            return Err(ModelShareError::Config {
                message: format!("Database directory does not exist: {}", parent.display()),
            });
        }
        std::fs::create_dir_all(parent).map_err(|e| ModelShareError::Io {
            message: format!("Failed to create directory: {}", parent.display()),
            path: Some(parent.to_path_buf()),
            source: Some(e),
        })
    }

    /// Build the ModelShareApi instance.
    pub async fn build(self) -> Result<ModelShareApi> {
        if let Some(url) = self.remote_url {
            let client = RpcDataService::new(&url)?;
            tracing::info!("Using remote data service at {}", client.endpoint());
            return Ok(ModelShareApi {
                inner: ApiInner::Remote(Arc::new(client)),
            });
        }

        let db_path = match self.database {
            Some(path) => path,
            None => Self::default_database_path()?,
        };
        Self::ensure_parent(&db_path, self.auto_create_dirs)?;

        let store = tokio::task::spawn_blocking(move || SqliteStore::open(&db_path))
            .await
            .map_err(|e| ModelShareError::Other(format!("Database open task failed: {}", e)))??;

        Ok(ModelShareApi {
            inner: ApiInner::Local(Arc::new(store)),
        })
    }
}
