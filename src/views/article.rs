//! Article excerpt built from paragraph text

use super::{truncate, value_or_text, ViewType};
use crate::document::Node;
use crate::preview::{ExtractionResult, ViewContent};
use crate::vocabulary;

const EXCERPT_LIMIT: usize = 300;

#[derive(Debug, Clone, Copy)]
pub struct ArticleView {
    excerpt_limit: usize,
}

impl Default for ArticleView {
    fn default() -> Self {
        Self {
            excerpt_limit: EXCERPT_LIMIT,
        }
    }
}

impl ArticleView {
    /// Article view with a custom excerpt length, in characters
    pub fn with_excerpt_limit(excerpt_limit: usize) -> Self {
        Self { excerpt_limit }
    }
}

impl ViewType for ArticleView {
    fn name(&self) -> &str {
        "article"
    }

    fn default_query(&self) -> Option<&str> {
        Some("p")
    }

    fn tagged(&self, node: &Node<'_>) -> Option<ExtractionResult> {
        let element = node.with_attr(vocabulary::ARTICLE)?;
        let excerpt = value_or_text(&element, vocabulary::ARTICLE)?;

        Some(ExtractionResult {
            view_type: Some(self.name().to_string()),
            result: Some(ViewContent::Article {
                excerpt: truncate(&excerpt, self.excerpt_limit),
            }),
            ..Default::default()
        })
    }

    fn filter(&self, matches: &[Node<'_>]) -> Option<ViewContent> {
        let paragraphs: Vec<String> = matches
            .iter()
            .map(|m| m.text())
            .filter(|t| !t.is_empty())
            .collect();

        if paragraphs.is_empty() {
            return None;
        }

        Some(ViewContent::Article {
            excerpt: truncate(&paragraphs.join("\n\n"), self.excerpt_limit),
        })
    }
}
