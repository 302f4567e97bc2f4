//! Locating the marked region for a lookup key

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::document::Node;
use crate::error::{PreviewError, Result};
use crate::vocabulary;

/// The element marked with `np-for="<key>"`, with nested marked regions pruned
#[derive(Debug)]
pub struct Region<'a> {
    document: &'a Html,
    root: NodeId,
    pruned: Vec<NodeId>,
}

impl<'a> Region<'a> {
    /// Find the first element whose `np-for` equals `key`
    ///
    /// Further matches are ignored with a warning.
    pub fn locate(document: &'a Html, key: &str) -> Result<Self> {
        let selector = match Selector::parse(&format!("[{}]", vocabulary::FOR)) {
            Ok(s) => s,
            Err(e) => return Err(PreviewError::Malformed(e.to_string())),
        };

        let mut matches = document
            .select(&selector)
            .filter(|el| el.value().attr(vocabulary::FOR) == Some(key));

        let root = matches.next().ok_or_else(|| PreviewError::RegionNotFound {
            key: key.to_string(),
        })?;

        let extra = matches.count();
        if extra > 0 {
            warn!(
                key,
                found = extra + 1,
                "more than one node marked with {}, using the first",
                vocabulary::FOR
            );
        }

        let pruned = marked_descendants(root);
        debug!(key, pruned = pruned.len(), "located marked region");

        Ok(Self {
            document,
            root: root.id(),
            pruned,
        })
    }

    /// The marked element itself
    pub fn node(&self) -> Result<Node<'_>> {
        self.document
            .tree
            .get(self.root)
            .and_then(ElementRef::wrap)
            .map(|el| Node::new(el, &self.pruned))
            .ok_or_else(|| {
                PreviewError::Malformed("marked region no longer resolves to an element".to_string())
            })
    }

    /// The whole document, with the same nested regions pruned
    pub fn document_node(&self) -> Node<'_> {
        Node::document(self.document, &self.pruned)
    }

    /// Ids of nested marked elements hidden from queries
    pub fn pruned(&self) -> &[NodeId] {
        &self.pruned
    }
}

fn marked_descendants(root: ElementRef<'_>) -> Vec<NodeId> {
    root.descendants()
        .skip(1)
        .filter(|n| {
            n.value()
                .as_element()
                .is_some_and(|el| el.attr(vocabulary::FOR).is_some())
        })
        .map(|n| n.id())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    const NESTED: &str = r#"
    <html>
    <head><title>Nested</title></head>
    <body>
        <div np-for="outer" np-view="basic">
            <h1 np-title>Outer title</h1>
            <div np-for="inner" np-view="basic">
                <h2 np-title>Inner title</h2>
                <div np-for="deeper"><span np-title>Deep</span></div>
            </div>
        </div>
        <div np-for="outer" np-view="image"></div>
    </body>
    </html>
    "#;

    #[test]
    fn test_locate_missing_key() {
        let document = parse_document(NESTED, false).unwrap();
        let err = Region::locate(&document, "sidebar").unwrap_err();
        assert!(matches!(err, PreviewError::RegionNotFound { ref key } if key == "sidebar"));
        assert_eq!(err.code(), -3);
    }

    #[test]
    fn test_locate_uses_first_match() {
        let document = parse_document(NESTED, false).unwrap();
        let region = Region::locate(&document, "outer").unwrap();
        let node = region.node().unwrap();
        assert_eq!(node.attr("np-view"), Some("basic"));
    }

    #[test]
    fn test_nested_regions_pruned() {
        let document = parse_document(NESTED, false).unwrap();
        let region = Region::locate(&document, "outer").unwrap();
        let node = region.node().unwrap();

        assert_eq!(region.pruned().len(), 2);
        assert!(node.query("[np-for]").is_empty());
        // querying twice gives the same answer
        assert!(node.query("[np-for]").is_empty());

        let titles = node.query("[np-title]");
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].text(), "Outer title");
    }

    #[test]
    fn test_document_node_honors_pruning() {
        let document = parse_document(NESTED, false).unwrap();
        let region = Region::locate(&document, "outer").unwrap();

        let titles = region.document_node().query("[np-title]");
        assert_eq!(titles.len(), 1);
        assert_eq!(region.document_node().query("title").len(), 1);
    }

    #[test]
    fn test_inner_region_keeps_own_content() {
        let document = parse_document(NESTED, false).unwrap();
        let region = Region::locate(&document, "inner").unwrap();
        let node = region.node().unwrap();

        assert_eq!(node.text(), "Inner title");
        assert_eq!(region.pruned().len(), 1);
    }

    #[test]
    fn test_stale_root_is_malformed() {
        let document = parse_document(NESTED, false).unwrap();
        let mut region = Region::locate(&document, "outer").unwrap();

        // point the region at a text node
        let text_id = document
            .root_element()
            .descendants()
            .find(|n| n.value().is_text())
            .unwrap()
            .id();
        region.root = text_id;

        let err = region.node().unwrap_err();
        assert!(matches!(err, PreviewError::Malformed(_)));
        assert_eq!(err.code(), -5);
    }
}
