//! Single lead image

use super::{value_or_src, ViewType};
use crate::document::Node;
use crate::preview::{ExtractionResult, ViewContent};
use crate::vocabulary;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageView;

impl ViewType for ImageView {
    fn name(&self) -> &str {
        "image"
    }

    fn default_query(&self) -> Option<&str> {
        Some("img:first-of-type")
    }

    fn tagged(&self, node: &Node<'_>) -> Option<ExtractionResult> {
        let element = node.with_attr(vocabulary::IMAGE)?;
        let src = value_or_src(&element, vocabulary::IMAGE)?;

        Some(ExtractionResult {
            view_type: Some(self.name().to_string()),
            result: Some(ViewContent::Image { src }),
            ..Default::default()
        })
    }

    fn filter(&self, matches: &[Node<'_>]) -> Option<ViewContent> {
        // an explicit np-image value anywhere wins over plain src
        let src = matches
            .iter()
            .find_map(|m| m.provided(vocabulary::IMAGE))
            .or_else(|| matches.iter().find_map(|m| m.non_blank("src")))?;

        Some(ViewContent::Image {
            src: src.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    #[test]
    fn test_tagged_attribute_then_src() {
        let html = r#"<div><img np-image="/hero@2x.png" src="/hero.png"></div>"#;
        let document = parse_document(html, false).unwrap();
        let root = Node::new(document.root_element(), &[]);
        let result = ImageView.tagged(&root).unwrap();
        assert_eq!(
            result.result,
            Some(ViewContent::Image {
                src: "/hero@2x.png".to_string()
            })
        );

        let html = r#"<div><img np-image src="/hero.png"></div>"#;
        let document = parse_document(html, false).unwrap();
        let root = Node::new(document.root_element(), &[]);
        let result = ImageView.tagged(&root).unwrap();
        assert_eq!(
            result.result,
            Some(ViewContent::Image {
                src: "/hero.png".to_string()
            })
        );
    }

    #[test]
    fn test_tagged_without_source() {
        let html = r#"<div><img np-image></div>"#;
        let document = parse_document(html, false).unwrap();
        let root = Node::new(document.root_element(), &[]);
        assert!(ImageView.tagged(&root).is_none());
    }

    #[test]
    fn test_filter() {
        let html = r#"
        <div>
            <img src="">
            <img src="/second.png">
            <img np-image="/tagged.png">
        </div>
        "#;
        let document = parse_document(html, false).unwrap();
        let root = Node::new(document.root_element(), &[]);
        let matches = root.query("img");

        assert_eq!(
            ImageView.filter(&matches),
            Some(ViewContent::Image {
                src: "/tagged.png".to_string()
            })
        );
        assert_eq!(
            ImageView.filter(&matches[..2]),
            Some(ViewContent::Image {
                src: "/second.png".to_string()
            })
        );
        assert!(ImageView.filter(&matches[..1]).is_none());
        assert!(ImageView.filter(&[]).is_none());
    }
}
