//! Client configuration

use serde::Deserialize;

/// Settings for fetching and parsing pages
///
/// Every field has a default, so a partial JSON object is a valid config:
///
/// ```
/// let config = nextpage::Config::from_json(r#"{"timeout_secs": 5}"#).unwrap();
/// assert_eq!(config.timeout_secs, 5);
/// assert!(!config.strict_parsing);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// User-Agent header sent with page requests
    pub user_agent: String,
    /// Global timeout for a page request, in seconds
    pub timeout_secs: u64,
    /// Fail the parse stage on any HTML parse error instead of recovering
    pub strict_parsing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: concat!("nextpage/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            strict_parsing: false,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_strict_parsing(mut self, strict: bool) -> Self {
        self.strict_parsing = strict;
        self
    }
}
