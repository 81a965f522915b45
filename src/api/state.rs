use std::sync::Arc;

use crate::services::{CatalogSource, JsonFileCatalog};

/// Shared application state
///
/// Holds nothing mutable: the catalog is re-read on every list request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }

    /// State backed by the JSON document at `path`
    pub fn from_file(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(Arc::new(JsonFileCatalog::new(path)))
    }
}
