// src/utils/cache.rs
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;

use crate::io::reader::read_series;
use crate::series::SampleSeries;

/// Thread-safe cache of loaded sample series, keyed by path.
///
/// Batch runs often point several jobs at the same input file; the file is
/// parsed once and shared. Invalidation is explicit via [`SeriesCache::clear`].
pub struct SeriesCache {
    series: Mutex<HashMap<PathBuf, Arc<SampleSeries>>>,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self {
            series: Mutex::new(HashMap::new()),
        }
    }

    pub fn get_series<P: AsRef<Path>>(&self, path: P) -> Result<Arc<SampleSeries>> {
        let path_buf = path.as_ref().to_path_buf();

        let mut cache = self.series.lock();

        if let Some(series) = cache.get(&path_buf) {
            return Ok(Arc::clone(series));
        }

        // Not in cache, load and add it
        let series = Arc::new(read_series(path.as_ref())?);
        cache.insert(path_buf, Arc::clone(&series));

        Ok(series)
    }

    pub fn clear(&self) {
        self.series.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.series.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.lock().is_empty()
    }
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::new()
    }
}
