//! Repository stats API client
//!
//! Minimal client for the stats backend that records daily traffic per repository.

use crate::Result;
use crate::traffic::{DateBounds, RawRecord};
use core::time::Duration;
use ohno::{IntoAppError, app_err, bail};
use serde::de::DeserializeOwned;
use url::Url;

const LOG_TARGET: &str = "     stats";

/// Client for the repository stats API.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl StatsClient {
    /// Create a client rooted at `base_url`, e.g. `https://stats.example.com/api`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot have path segments appended or if the
    /// HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            bail!("'{base_url}' cannot be used as an API base URL");
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("repo-traffic/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List the accounts known to the backend.
    ///
    /// A response that is not a JSON array is logged and treated as no accounts.
    pub async fn accounts(&self) -> Result<Vec<String>> {
        let url = self.endpoint(&["accounts"], &[])?;
        let body: serde_json::Value = self.get_json(&url).await?;

        if !body.is_array() {
            log::warn!(target: LOG_TARGET, "Expected an array of accounts from {url}, got: {body}");
            return Ok(Vec::new());
        }

        serde_json::from_value(body).into_app_err_with(|| format!("parsing accounts from {url}"))
    }

    /// List the repositories tracked for `account`.
    pub async fn repos(&self, account: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&["repos"], &[("account", account.to_string())])?;
        self.get_json(&url).await
    }

    /// Fetch the daily records of one repository.
    ///
    /// The bounds are forwarded to the backend as `startDate`/`endDate`; callers still
    /// filter locally because the backend is free to ignore them.
    pub async fn views(&self, account: &str, repo: &str, bounds: DateBounds) -> Result<Vec<RawRecord>> {
        let mut query = vec![("account", account.to_string()), ("repo", repo.to_string())];
        if let Some(start) = bounds.start {
            query.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = bounds.end {
            query.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }

        let url = self.endpoint(&["views"], &query)?;
        self.get_json(&url).await
    }

    /// Fetch the daily records of every repository of every account.
    pub async fn all_views(&self) -> Result<Vec<RawRecord>> {
        let url = self.endpoint(&["views", "all"], &[])?;
        self.get_json(&url).await
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| app_err!("'{}' cannot be used as an API base URL", self.base_url))?;
            let _ = path.pop_if_empty().extend(segments);
        }

        if !query.is_empty() {
            let _ = url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        log::info!(target: LOG_TARGET, "Querying {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .into_app_err_with(|| format!("could not reach {url}"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("request to {url} failed: HTTP {status}");
        }

        response.json().await.into_app_err_with(|| format!("could not decode the response from {url}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> StatsClient {
        StatsClient::new(Url::parse(base).unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = client("https://stats.example.com/api").endpoint(&["accounts"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://stats.example.com/api/accounts");
    }

    #[test]
    fn test_endpoint_with_trailing_slash() {
        let url = client("https://stats.example.com/api/").endpoint(&["views", "all"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://stats.example.com/api/views/all");
    }

    #[test]
    fn test_endpoint_encodes_query() {
        let url = client("http://localhost:3000/api")
            .endpoint(&["repos"], &[("account", "my org & co".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/repos?account=my+org+%26+co");
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(StatsClient::new(Url::parse("mailto:someone@example.com").unwrap(), Duration::from_secs(5)).is_err());
    }

    #[test]
    fn test_base_url() {
        assert_eq!(client("https://stats.example.com/api").base_url().as_str(), "https://stats.example.com/api");
    }
}
