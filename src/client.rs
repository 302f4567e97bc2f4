//! The extraction pipeline
//!
//! `Fetch → Parse → Locate+Prune → Resolve → Execute+Merge+Fallback`.
//! Each stage either feeds the next one or ends the call with its error;
//! there are no partial results and no retries.

use tracing::debug;

use crate::basics::extract_basics;
use crate::config::Config;
use crate::directive::{resolve, Query};
use crate::document::parse_document;
use crate::error::Result;
use crate::fallback::{fill_missing, head_properties};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::preview::ExtractionResult;
use crate::query::execute;
use crate::region::Region;
use crate::views::ViewRegistry;

/// Preview extractor for pages annotated with `np-*` attributes
///
/// The view registry is fixed at construction, so one client can serve any
/// number of calls.
#[derive(Debug)]
pub struct NextPage<F = HttpFetcher> {
    fetcher: F,
    registry: ViewRegistry,
    config: Config,
}

impl NextPage<HttpFetcher> {
    /// HTTP fetching, default config and the built-in view types
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            fetcher: HttpFetcher::new(&config),
            registry: ViewRegistry::builtin(),
            config,
        }
    }
}

impl Default for NextPage<HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetcher> NextPage<F> {
    pub fn with_parts(fetcher: F, registry: ViewRegistry, config: Config) -> Self {
        Self {
            fetcher,
            registry,
            config,
        }
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch `url` and extract the region marked with `np-for="<key>"`
    pub fn get(&self, url: &str, key: &str) -> Result<ExtractionResult> {
        let html = self.fetcher.fetch(url)?;
        self.extract(&html, key)
    }

    /// Run the pipeline from the parse stage on markup the caller already has
    pub fn extract(&self, html: &str, key: &str) -> Result<ExtractionResult> {
        let document = parse_document(html, self.config.strict_parsing)?;
        let region = Region::locate(&document, key)?;
        let node = region.node()?;

        let (directive, view) = resolve(&node, &self.registry)?;

        let mut result = match directive.query {
            Query::Tagged(content) => content,
            Query::Global(selector) => execute(view, &selector, &region.document_node()),
            Query::Local(selector) => execute(view, &selector, &node),
            Query::Unset => head_properties(&document)?.into(),
        };

        if result.view_type.is_none() {
            result.view_type = Some(directive.view_type);
        }

        result.fill_unset(extract_basics(&node));
        fill_missing(&mut result, &document)?;

        debug!(
            key,
            view_type = result.view_type.as_deref(),
            complete = result.is_complete(),
            "extracted preview"
        );

        Ok(result)
    }
}
