//! Package download abstraction layer
//!
//! This module provides a trait-based abstraction over retrieving release
//! packages, allowing for multiple implementations including a real HTTP
//! client and a mock implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Fetcher] trait, which defines the single
//! transport operation release-check needs. The concrete implementations
//! include:
//!
//! - [http::HttpFetcher]: A real implementation using the `reqwest` crate
//! - [mock::MockFetcher]: A mock implementation for testing
//!
//! Most code should depend on the [Fetcher] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod http;
pub mod mock;

pub use http::HttpFetcher;
pub use mock::MockFetcher;

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Release;
use crate::error::Result;

/// Transport seam for retrieving release packages.
///
/// ## Error Handling
///
/// Implementations return [crate::error::Result<T>]; transport failures and
/// non-success responses are mapped to the appropriate
/// [crate::error::ReleaseCheckError] variants.
pub trait Fetcher {
    /// Fetch the resource at `url` and return its body.
    ///
    /// # Arguments
    /// * `url` - URL of the release package
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The response body
    /// * `Err` - If the request fails or the server responds with a
    ///   non-success status
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// File name for a downloaded package.
///
/// Uses the final path segment of the release URL with any query or fragment
/// stripped, falling back to a version-derived name when the URL has none.
pub fn package_file_name(release: &Release) -> String {
    let tail = release.url.rsplit('/').next().unwrap_or("");
    let tail = tail.split(['?', '#']).next().unwrap_or("");
    if tail.is_empty() {
        format!("release-{}.pkg", release.version)
    } else {
        tail.to_string()
    }
}

/// Download a release package into `dir`, creating the directory when
/// missing.
///
/// The fetch happens before anything touches the filesystem, so a failed
/// request leaves no partial file behind.
///
/// # Arguments
/// * `fetcher` - Transport used to retrieve the package
/// * `release` - The release whose package to download
/// * `dir` - Directory the package file is written into
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written package file
/// * `Err` - If the fetch or any filesystem operation fails
pub fn download_package(fetcher: &dyn Fetcher, release: &Release, dir: &Path) -> Result<PathBuf> {
    let bytes = fetcher.fetch(&release.url)?;

    fs::create_dir_all(dir)?;
    let dest = dir.join(package_file_name(release));
    fs::write(&dest, &bytes)?;

    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_file_name_from_url() {
        let release = Release::new("1.2.0", "https://example.com/downloads/pkg-1.2.0.zip");
        assert_eq!(package_file_name(&release), "pkg-1.2.0.zip");
    }

    #[test]
    fn test_package_file_name_strips_query() {
        let release = Release::new("1.2.0", "https://example.com/pkg.zip?token=abc");
        assert_eq!(package_file_name(&release), "pkg.zip");
    }

    #[test]
    fn test_package_file_name_fallback() {
        let release = Release::new("1.2.0", "https://example.com/download/");
        assert_eq!(package_file_name(&release), "release-1.2.0.pkg");
    }

    #[test]
    fn test_download_package_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("packages");
        let release = Release::new("1.2.0", "https://example.com/pkg-1.2.0.zip");

        let mut fetcher = MockFetcher::new();
        fetcher.add_response("https://example.com/pkg-1.2.0.zip", b"package bytes".to_vec());

        let path = download_package(&fetcher, &release, &target).unwrap();
        assert_eq!(path, target.join("pkg-1.2.0.zip"));
        assert_eq!(fs::read(&path).unwrap(), b"package bytes");
    }

    #[test]
    fn test_download_package_failed_fetch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("packages");
        let release = Release::new("1.2.0", "https://example.com/missing.zip");

        let fetcher = MockFetcher::new();
        assert!(download_package(&fetcher, &release, &target).is_err());
        assert!(!target.exists());
    }
}
