//! Several images shown together

use super::{value_or_src, ViewType};
use crate::document::Node;
use crate::preview::{ExtractionResult, ViewContent};
use crate::vocabulary;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageGridView;

impl ImageGridView {
    fn collect(nodes: &[Node<'_>]) -> Option<ViewContent> {
        let images: Vec<String> = nodes
            .iter()
            .filter_map(|n| value_or_src(n, vocabulary::IMAGE))
            .collect();

        if images.is_empty() {
            None
        } else {
            Some(ViewContent::ImageGrid { images })
        }
    }
}

impl ViewType for ImageGridView {
    fn name(&self) -> &str {
        "image-grid"
    }

    fn default_query(&self) -> Option<&str> {
        Some("img")
    }

    fn tagged(&self, node: &Node<'_>) -> Option<ExtractionResult> {
        let tagged = node.query(&format!("[{}]", vocabulary::IMAGE));
        let content = Self::collect(&tagged)?;

        Some(ExtractionResult {
            view_type: Some(self.name().to_string()),
            result: Some(content),
            ..Default::default()
        })
    }

    fn filter(&self, matches: &[Node<'_>]) -> Option<ViewContent> {
        Self::collect(matches)
    }
}
