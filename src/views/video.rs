//! Embedded video

use scraper::Selector;

use super::ViewType;
use crate::document::Node;
use crate::preview::{ExtractionResult, ViewContent};
use crate::vocabulary;

#[derive(Debug, Clone, Copy, Default)]
pub struct VideoView;

/// `np-video` value, else `src`, else the first nested `<source src>`
fn video_source(node: &Node<'_>) -> Option<String> {
    if let Some(src) = node
        .provided(vocabulary::VIDEO)
        .or_else(|| node.non_blank("src"))
    {
        return Some(src.to_string());
    }

    let selector = Selector::parse("source[src]").ok()?;
    node.select(&selector)
        .iter()
        .find_map(|s| s.non_blank("src"))
        .map(String::from)
}

impl ViewType for VideoView {
    fn name(&self) -> &str {
        "video"
    }

    fn default_query(&self) -> Option<&str> {
        Some("video")
    }

    fn tagged(&self, node: &Node<'_>) -> Option<ExtractionResult> {
        let element = node.with_attr(vocabulary::VIDEO)?;
        let src = video_source(&element)?;

        Some(ExtractionResult {
            view_type: Some(self.name().to_string()),
            result: Some(ViewContent::Video { src }),
            ..Default::default()
        })
    }

    fn filter(&self, matches: &[Node<'_>]) -> Option<ViewContent> {
        let src = matches
            .iter()
            .find_map(|m| m.provided(vocabulary::VIDEO).map(String::from))
            .or_else(|| matches.iter().find_map(video_source))?;

        Some(ViewContent::Video { src })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    fn video(src: &str) -> Option<ViewContent> {
        Some(ViewContent::Video {
            src: src.to_string(),
        })
    }

    #[test]
    fn test_tagged() {
        let html = r#"<div><video np-video="https://cdn.example.com/clip.m3u8" src="/clip.mp4"></video></div>"#;
        let document = parse_document(html, false).unwrap();
        let root = Node::new(document.root_element(), &[]);
        let result = VideoView.tagged(&root).unwrap();
        assert_eq!(result.result, video("https://cdn.example.com/clip.m3u8"));
        assert_eq!(result.view_type.as_deref(), Some("video"));
    }

    #[test]
    fn test_tagged_nested_source() {
        let html = r#"<div><video np-video><source src="/clip.webm" type="video/webm"></video></div>"#;
        let document = parse_document(html, false).unwrap();
        let root = Node::new(document.root_element(), &[]);
        assert_eq!(VideoView.tagged(&root).unwrap().result, video("/clip.webm"));
    }

    #[test]
    fn test_filter() {
        let html = r#"
        <div>
            <video src="/first.mp4"></video>
            <video np-video="/preferred.mp4"></video>
        </div>
        "#;
        let document = parse_document(html, false).unwrap();
        let root = Node::new(document.root_element(), &[]);
        let matches = root.query("video");

        assert_eq!(VideoView.filter(&matches), video("/preferred.mp4"));
        assert_eq!(VideoView.filter(&matches[..1]), video("/first.mp4"));
        assert!(VideoView.filter(&[]).is_none());
    }
}
