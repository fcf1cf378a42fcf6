use std::collections::HashMap;

use crate::error::{ReleaseCheckError, Result};
use crate::fetch::Fetcher;

/// Mock fetcher for testing without network access
pub struct MockFetcher {
    responses: HashMap<String, Vec<u8>>,
}

impl MockFetcher {
    /// Create a new mock fetcher with no canned responses
    pub fn new() -> Self {
        MockFetcher {
            responses: HashMap::new(),
        }
    }

    /// Register the body returned for a URL
    pub fn add_response(&mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.responses.insert(url.into(), body.into());
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| ReleaseCheckError::download(format!("No response for '{}'", url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fetcher_returns_registered_body() {
        let mut fetcher = MockFetcher::new();
        fetcher.add_response("https://example.com/pkg.zip", b"bytes".to_vec());

        assert_eq!(
            fetcher.fetch("https://example.com/pkg.zip").unwrap(),
            b"bytes"
        );
    }

    #[test]
    fn test_mock_fetcher_unknown_url_is_error() {
        let fetcher = MockFetcher::default();
        let err = fetcher.fetch("https://example.com/missing.zip").unwrap_err();
        assert!(matches!(err, ReleaseCheckError::Download(_)));
    }
}
