use std::time::Duration;

use crate::error::{ReleaseCheckError, Result};
use crate::fetch::Fetcher;

const USER_AGENT: &str = concat!("release-check/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Real fetcher backed by a blocking HTTP client
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the release-check user agent and a request
    /// timeout.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReleaseCheckError::download(format!(
                "Request for '{}' failed with HTTP {}",
                url, status
            )));
        }

        let bytes = response.bytes()?;
        Ok(bytes.to_vec())
    }
}
