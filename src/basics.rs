//! Generic title, description and icon of a marked region

use crate::document::Node;
use crate::preview::BasicProperties;
use crate::vocabulary;

/// Read `np-title`, `np-description` and `np-icon` from the region's descendants
///
/// Title and description fall back to the element's text when the attribute
/// carries no real value; the icon has no text fallback.
pub fn extract_basics(node: &Node<'_>) -> BasicProperties {
    BasicProperties {
        title: text_property(node, vocabulary::TITLE),
        description: text_property(node, vocabulary::DESCRIPTION),
        icon: node
            .with_attr(vocabulary::ICON)
            .and_then(|el| el.provided(vocabulary::ICON).map(String::from)),
    }
}

fn text_property(node: &Node<'_>, attr: &str) -> Option<String> {
    let element = node.with_attr(attr)?;

    if let Some(value) = element.provided(attr) {
        return Some(value.to_string());
    }

    let text = element.text();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
