//! Offline asset cache
//!
//! A named cache precharged with a fixed manifest at install time, then
//! consulted cache-first on every fetch. Misses fall through to the
//! backing loader and are never back-filled. No invalidation or
//! versioning exists beyond the cache name constant.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::errors::AssetError;

/// Cache name.
pub const CACHE_NAME: &str = "daniel-portfolio-v1";

/// URLs precached on install.
pub const PRECACHE_MANIFEST: &[&str] = &[
    "/",
    "/manifest.json",
    "/icons/icon-192x192.png",
    "/icons/icon-512x512.png",
    "/cv-daniel-gonzalez-pascual.pdf",
];

/// The CV asset URL and the filename it downloads as.
pub const CV_ASSET: &str = "/cv-daniel-gonzalez-pascual.pdf";
pub const CV_DOWNLOAD_NAME: &str = "CV-Daniel-Gonzalez-Pascual.pdf";

/// Backing loader invoked on cache misses and during install.
pub type Loader = Box<dyn Fn(&str) -> Result<Vec<u8>, AssetError> + Send + Sync>;

/// Cache-first asset store.
pub struct AssetStore {
    name: &'static str,
    entries: RwLock<HashMap<String, Arc<Vec<u8>>>>,
    loader: Loader,
    hits: AtomicU64,
    loads: AtomicU64,
}

impl AssetStore {
    /// Create a store over an arbitrary loader.
    pub fn new(loader: Loader) -> Self {
        Self {
            name: CACHE_NAME,
            entries: RwLock::new(HashMap::new()),
            loader,
            hits: AtomicU64::new(0),
            loads: AtomicU64::new(0),
        }
    }

    /// Create a store whose loader reads files under `root`.
    ///
    /// The root document `/` maps to `index.html`; every other URL maps to
    /// its path relative to the root.
    pub fn with_root(root: &Path) -> Self {
        let root = root.to_path_buf();
        Self::new(Box::new(move |url| {
            let rel = if url == "/" {
                "index.html"
            } else {
                url.trim_start_matches('/')
            };
            let path = root.join(rel);
            std::fs::read(&path).map_err(|e| AssetError::Load {
                url: url.to_string(),
                message: e.to_string(),
            })
        }))
    }

    /// Cache name constant.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Precharge the cache with the fixed manifest.
    ///
    /// Mirrors `cache.addAll`: the first failing URL aborts the install and
    /// nothing further is cached.
    pub fn install(&self) -> Result<(), AssetError> {
        for url in PRECACHE_MANIFEST {
            let bytes = (self.loader)(url)?;
            self.loads.fetch_add(1, Ordering::Relaxed);
            self.entries
                .write()
                .insert((*url).to_string(), Arc::new(bytes));
        }
        debug!(cache = self.name, urls = PRECACHE_MANIFEST.len(), "cache installed");
        Ok(())
    }

    /// Fetch a URL, serving from cache when present.
    ///
    /// A miss passes through to the loader without populating the cache.
    pub fn fetch(&self, url: &str) -> Result<Arc<Vec<u8>>, AssetError> {
        if let Some(bytes) = self.entries.read().get(url) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(bytes));
        }
        self.loads.fetch_add(1, Ordering::Relaxed);
        let bytes = (self.loader)(url)?;
        Ok(Arc::new(bytes))
    }

    /// True if the URL is currently cached.
    pub fn contains(&self, url: &str) -> bool {
        self.entries.read().contains_key(url)
    }

    /// Cached URLs, sorted for stable assertions.
    pub fn cached_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.entries.read().keys().cloned().collect();
        urls.sort();
        urls
    }

    /// Number of times the backing loader ran (the "network" counter).
    pub fn loader_calls(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }

    /// Number of cache hits served.
    pub fn cache_hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Fetch the CV and write it into `dest_dir` under its download name.
    /// This is the action behind the CV icon on both shells.
    pub fn download_cv(&self, dest_dir: &Path) -> Result<PathBuf, AssetError> {
        let bytes = self.fetch(CV_ASSET)?;
        let dest = dest_dir.join(CV_DOWNLOAD_NAME);
        std::fs::write(&dest, bytes.as_slice()).map_err(|e| AssetError::Download {
            path: dest.clone(),
            message: e.to_string(),
        })?;
        Ok(dest)
    }
}
