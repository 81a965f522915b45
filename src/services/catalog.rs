use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::ListKey,
};

/// Read-only source of the supported task types, data types, KPIs,
/// performance metrics and strategies.
///
/// The backing document is edited out-of-band; implementations must re-read it
/// on every lookup rather than holding it in memory.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the value stored under `key`, unmodified
    async fn lookup(&self, key: ListKey) -> AppResult<Value>;
}

/// Catalog backed by a JSON file on local disk
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens and parses the whole document. The file handle is released
    /// before this returns.
    async fn read_document(&self) -> AppResult<Map<String, Value>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| AppError::CatalogUnavailable {
                path: self.path.clone(),
                source,
            })?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Reads the document once and reports which entries are missing.
    ///
    /// Used at startup for diagnostics only; request handling never depends on it.
    pub async fn probe(&self) -> AppResult<Vec<ListKey>> {
        let document = self.read_document().await?;
        Ok(ListKey::ALL
            .into_iter()
            .filter(|key| !document.contains_key(key.as_str()))
            .collect())
    }
}

#[async_trait::async_trait]
impl CatalogSource for JsonFileCatalog {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn lookup(&self, key: ListKey) -> AppResult<Value> {
        let mut document = self.read_document().await?;

        let value = document
            .remove(key.as_str())
            .ok_or(AppError::MissingKey(key.as_str()))?;

        tracing::debug!(key = %key, "Catalog entry loaded");
        Ok(value)
    }
}
