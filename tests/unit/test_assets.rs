//! Unit tests for the offline asset cache
//!
//! Tests cover:
//! - Install populating exactly the fixed manifest
//! - Cache-first fetch observable through the loader counter
//! - Miss pass-through without back-fill
//! - Filesystem-backed loader and the CV download

use portfolio_os::assets::{AssetStore, CACHE_NAME, CV_ASSET, CV_DOWNLOAD_NAME, PRECACHE_MANIFEST};
use portfolio_os::errors::AssetError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

fn counting_store() -> (Arc<AtomicU64>, AssetStore) {
    let calls = Arc::new(AtomicU64::new(0));
    let loader_calls = Arc::clone(&calls);
    let store = AssetStore::new(Box::new(move |url| {
        loader_calls.fetch_add(1, Ordering::Relaxed);
        Ok(url.as_bytes().to_vec())
    }));
    (calls, store)
}

mod install_tests {
    use super::*;

    #[test]
    fn test_manifest_is_the_fixed_asset_list() {
        assert_eq!(
            PRECACHE_MANIFEST,
            &[
                "/",
                "/manifest.json",
                "/icons/icon-192x192.png",
                "/icons/icon-512x512.png",
                "/cv-daniel-gonzalez-pascual.pdf",
            ]
        );
        assert_eq!(CACHE_NAME, "daniel-portfolio-v1");
    }

    #[test]
    fn test_install_caches_exactly_the_manifest() {
        let (calls, store) = counting_store();
        store.install().unwrap();

        let mut expected: Vec<String> =
            PRECACHE_MANIFEST.iter().map(|u| (*u).to_string()).collect();
        expected.sort();
        assert_eq!(store.cached_urls(), expected);
        assert_eq!(calls.load(Ordering::Relaxed), PRECACHE_MANIFEST.len() as u64);
    }
}

mod fetch_tests {
    use super::*;

    #[test]
    fn test_cached_url_served_without_network() {
        let (calls, store) = counting_store();
        store.install().unwrap();
        let baseline = calls.load(Ordering::Relaxed);

        for url in PRECACHE_MANIFEST {
            let bytes = store.fetch(url).unwrap();
            assert_eq!(bytes.as_slice(), url.as_bytes());
        }
        assert_eq!(calls.load(Ordering::Relaxed), baseline);
        assert_eq!(store.cache_hits(), PRECACHE_MANIFEST.len() as u64);
    }

    #[test]
    fn test_uncached_url_passes_through_every_time() {
        let (calls, store) = counting_store();
        store.install().unwrap();
        let baseline = calls.load(Ordering::Relaxed);

        store.fetch("/styles.css").unwrap();
        store.fetch("/styles.css").unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), baseline + 2);
        assert!(!store.contains("/styles.css"));
    }

    #[test]
    fn test_loader_failure_surfaces() {
        let store = AssetStore::new(Box::new(|url| {
            Err(AssetError::NotFound {
                url: url.to_string(),
            })
        }));
        assert!(store.fetch("/anything").is_err());
    }
}

mod filesystem_tests {
    use super::*;

    fn seed_asset_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("icons")).unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        std::fs::write(dir.path().join("manifest.json"), "{}").unwrap();
        std::fs::write(dir.path().join("icons/icon-192x192.png"), "png192").unwrap();
        std::fs::write(dir.path().join("icons/icon-512x512.png"), "png512").unwrap();
        std::fs::write(
            dir.path().join(CV_ASSET.trim_start_matches('/')),
            "%PDF-1.4",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_root_loader_installs_and_serves() {
        let root = seed_asset_root();
        let store = AssetStore::with_root(root.path());
        store.install().unwrap();

        assert_eq!(store.fetch("/").unwrap().as_slice(), b"<html></html>");
        assert_eq!(store.fetch("/manifest.json").unwrap().as_slice(), b"{}");
    }

    #[test]
    fn test_missing_root_fails_install() {
        let store = AssetStore::with_root(std::path::Path::new("/nonexistent/assets"));
        assert!(store.install().is_err());
    }

    #[test]
    fn test_cv_download_writes_the_pdf() {
        let root = seed_asset_root();
        let store = AssetStore::with_root(root.path());
        store.install().unwrap();

        let dest = tempfile::tempdir().unwrap();
        let path = store.download_cv(dest.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), CV_DOWNLOAD_NAME);
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.4");
    }
}
