//! Page retrieval

use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::{PreviewError, Result};

/// Source of raw page markup
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, url: &str) -> Result<String> {
        self(url)
    }
}

/// Blocking HTTP fetcher backed by a `ureq` agent
///
/// No retries; a non-success status is reported as [`PreviewError::HttpStatus`].
#[derive(Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher").finish_non_exhaustive()
    }
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
                .user_agent(config.user_agent.as_str())
                .http_status_as_error(false)
                .build(),
        );

        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let parsed = url::Url::parse(url).map_err(|e| PreviewError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PreviewError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        debug!(url, "fetching page");

        let resp = self
            .agent
            .get(parsed.as_str())
            .call()
            .map_err(|e| PreviewError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(PreviewError::HttpStatus {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let body = resp
            .into_body()
            .read_to_string()
            .map_err(|e| PreviewError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
