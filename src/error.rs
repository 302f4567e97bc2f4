//! Error types for the extraction pipeline
//!
//! Every variant belongs to exactly one pipeline stage, so callers can match
//! on the kind or ask which stage failed.

use thiserror::Error;

/// Pipeline stage a failure originated from, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Fetch,
    Parse,
    Locate,
    Resolve,
    Merge,
    Fallback,
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport level failure (DNS, connect, timeout, body read)
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("failed to parse document: {0}")]
    Parse(String),

    #[error("no element marked with np-for=\"{key}\"")]
    RegionNotFound { key: String },

    #[error("marked region has no np-view directive")]
    MissingDirective,

    #[error("unknown view type `{0}`")]
    InvalidViewType(String),

    /// A node id captured earlier no longer resolves to an element
    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("document has no <head> element")]
    NoHead,
}

pub type Result<T> = std::result::Result<T, PreviewError>;

impl PreviewError {
    pub fn stage(&self) -> Stage {
        match self {
            PreviewError::InvalidUrl { .. }
            | PreviewError::Fetch { .. }
            | PreviewError::HttpStatus { .. } => Stage::Fetch,
            PreviewError::Parse(_) => Stage::Parse,
            PreviewError::RegionNotFound { .. } => Stage::Locate,
            PreviewError::MissingDirective | PreviewError::InvalidViewType(_) => Stage::Resolve,
            PreviewError::Malformed(_) => Stage::Merge,
            PreviewError::NoHead => Stage::Fallback,
        }
    }

    /// Negative status code of the failing stage (-1 fetch through -6 fallback)
    pub fn code(&self) -> i32 {
        match self.stage() {
            Stage::Fetch => -1,
            Stage::Parse => -2,
            Stage::Locate => -3,
            Stage::Resolve => -4,
            Stage::Merge => -5,
            Stage::Fallback => -6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_stage_order() {
        let errors = [
            PreviewError::Fetch {
                url: "https://example.com".to_string(),
                reason: "connection refused".to_string(),
            },
            PreviewError::Parse("empty document".to_string()),
            PreviewError::RegionNotFound {
                key: "hero".to_string(),
            },
            PreviewError::InvalidViewType("carousel".to_string()),
            PreviewError::Malformed("region root".to_string()),
            PreviewError::NoHead,
        ];

        let codes: Vec<i32> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes, vec![-1, -2, -3, -4, -5, -6]);

        let stages: Vec<Stage> = errors.iter().map(|e| e.stage()).collect();
        let mut sorted = stages.clone();
        sorted.sort();
        assert_eq!(stages, sorted);
    }

    #[test]
    fn test_resolve_stage_variants() {
        assert_eq!(PreviewError::MissingDirective.stage(), Stage::Resolve);
        assert_eq!(PreviewError::MissingDirective.code(), -4);

        let status = PreviewError::HttpStatus {
            url: "https://example.com".to_string(),
            status: 404,
        };
        assert_eq!(status.stage(), Stage::Fetch);
        assert_eq!(status.to_string(), "HTTP 404 for https://example.com");
    }
}
