use super::domain::DeliveryTable;
use super::loader::{self, DataUnavailable};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Process-wide holder for the delivery table.
///
/// The table is read on the first successful [`DatasetCache::load`] and frozen
/// afterwards; later calls hand out the same `Arc` without touching the file.
/// Failed loads are not remembered, so the error surfaces on every request
/// until the file becomes readable.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    table: OnceLock<Arc<DeliveryTable>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: OnceLock::new(),
        }
    }

    /// A cache that already holds `table` and never reads from disk.
    pub fn preloaded(table: DeliveryTable) -> Self {
        let cache = Self::new(PathBuf::new());
        let _ = cache.table.set(Arc::new(table));
        cache
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    pub fn load(&self) -> Result<Arc<DeliveryTable>, DataUnavailable> {
        if let Some(table) = self.table.get() {
            return Ok(Arc::clone(table));
        }

        let loaded = Arc::new(loader::load_path(&self.path)?);
        // A concurrent first load may have won; keep whichever landed first.
        Ok(Arc::clone(self.table.get_or_init(|| loaded)))
    }
}
