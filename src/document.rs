//! Parsed documents and pruned element views
//!
//! Nested marked regions are never detached from the tree. Instead every
//! [`Node`] carries the ids of pruned elements and skips them (and everything
//! below them) in selector queries and text content.

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::{PreviewError, Result};

/// Parse a page into a document tree
///
/// html5ever recovers from malformed markup; recovered errors are only fatal
/// with `strict` set.
pub fn parse_document(html: &str, strict: bool) -> Result<Html> {
    if html.trim().is_empty() {
        return Err(PreviewError::Parse("empty document".to_string()));
    }

    let document = Html::parse_document(html);

    if let Some(first) = document.errors.first() {
        if strict {
            return Err(PreviewError::Parse(first.to_string()));
        }
        debug!(errors = document.errors.len(), "recovered from HTML parse errors");
    }

    Ok(document)
}

/// Parse an author-supplied selector, logging instead of failing
pub(crate) fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(selector, error = %e, "ignoring invalid selector");
            None
        }
    }
}

/// Attribute value that was actually provided by the author
///
/// A value equal to the attribute's own name, or a blank value, counts as
/// "not provided" (`<span np-title>` or `np-title="np-title"`).
pub fn provided_value<'v>(value: &'v str, attr: &str) -> Option<&'v str> {
    if value == attr || value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// An element seen through a pruned scope
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
    pruned: &'a [NodeId],
    /// Selector queries may match `element` itself
    inclusive: bool,
}

impl<'a> Node<'a> {
    pub(crate) fn new(element: ElementRef<'a>, pruned: &'a [NodeId]) -> Self {
        Self {
            element,
            pruned,
            inclusive: false,
        }
    }

    /// Whole-document scope: queries see the root element as well
    pub(crate) fn document(document: &'a Html, pruned: &'a [NodeId]) -> Self {
        Self {
            element: document.root_element(),
            pruned,
            inclusive: true,
        }
    }

    pub fn element(&self) -> ElementRef<'a> {
        self.element
    }

    pub fn id(&self) -> NodeId {
        self.element.id()
    }

    /// Lowercase tag name
    pub fn name(&self) -> &'a str {
        self.element.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Attribute value, unless it is blank or a bare marker (see [`provided_value`])
    pub fn provided(&self, name: &str) -> Option<&'a str> {
        provided_value(self.attr(name)?, name)
    }

    /// Non-blank attribute value
    pub fn non_blank(&self, name: &str) -> Option<&'a str> {
        self.attr(name).filter(|v| !v.trim().is_empty())
    }

    /// Trimmed text content, excluding pruned subtrees
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in self.element.descendants() {
            if let Some(t) = node.value().as_text() {
                if !self.is_pruned(node) {
                    text.push_str(t);
                }
            }
        }
        text.trim().to_string()
    }

    /// Descendants matching `selector`, in document order
    ///
    /// A document-scope node also matches the root element.
    pub fn select(&self, selector: &Selector) -> Vec<Node<'a>> {
        self.element
            .select(selector)
            .filter(|el| self.in_scope(*el))
            .map(|el| Node::new(el, self.pruned))
            .collect()
    }

    pub fn select_first(&self, selector: &Selector) -> Option<Node<'a>> {
        self.element
            .select(selector)
            .find(|el| self.in_scope(*el))
            .map(|el| Node::new(el, self.pruned))
    }

    /// Run a selector given as text; an invalid selector matches nothing
    pub fn query(&self, selector: &str) -> Vec<Node<'a>> {
        match parse_selector(selector) {
            Some(s) => self.select(&s),
            None => vec![],
        }
    }

    pub fn query_first(&self, selector: &str) -> Option<Node<'a>> {
        self.select_first(&parse_selector(selector)?)
    }

    /// First descendant carrying attribute `attr`
    pub fn with_attr(&self, attr: &str) -> Option<Node<'a>> {
        self.query_first(&format!("[{}]", attr))
    }

    fn in_scope(&self, el: ElementRef<'a>) -> bool {
        (self.inclusive || el.id() != self.element.id()) && !self.is_pruned(*el)
    }

    fn is_pruned(&self, node: NodeRef<'a, scraper::Node>) -> bool {
        if self.pruned.is_empty() {
            return false;
        }
        std::iter::once(node)
            .chain(node.ancestors())
            .any(|n| self.pruned.contains(&n.id()))
    }
}
