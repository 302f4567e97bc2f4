//! Title and description only

use super::{truncate, value_or_text, ViewType};
use crate::document::Node;
use crate::preview::{ExtractionResult, ViewContent};
use crate::vocabulary;

const TITLE_LIMIT: usize = 60;
const DESCRIPTION_LIMIT: usize = 100;

/// Region described by `np-title` and `np-description` children
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicView;

impl ViewType for BasicView {
    fn name(&self) -> &str {
        "basic"
    }

    fn default_query(&self) -> Option<&str> {
        None
    }

    fn tagged(&self, node: &Node<'_>) -> Option<ExtractionResult> {
        let title = node.with_attr(vocabulary::TITLE)?;
        let description = node.with_attr(vocabulary::DESCRIPTION)?;

        // a blank marker leaves the field to the head fallback
        let title = value_or_text(&title, vocabulary::TITLE).map(|t| truncate(&t, TITLE_LIMIT));
        let description = value_or_text(&description, vocabulary::DESCRIPTION)
            .map(|d| truncate(&d, DESCRIPTION_LIMIT));

        Some(ExtractionResult {
            title,
            description,
            view_type: Some(self.name().to_string()),
            result: Some(ViewContent::Basic),
            ..Default::default()
        })
    }

    fn filter(&self, _matches: &[Node<'_>]) -> Option<ViewContent> {
        None
    }
}
