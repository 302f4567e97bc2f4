//! Conventional head metadata used when a region leaves fields unset

use scraper::{Html, Selector};

use crate::document::Node;
use crate::error::{PreviewError, Result};
use crate::preview::{BasicProperties, ExtractionResult};
use crate::vocabulary;

/// Title, description and icon read from `<head>`
///
/// - title: `<meta name="title">`, else `<title>`
/// - description: `<meta name="description">`
/// - icon: `<meta name="icon">`, else `<link rel="icon">`
pub fn head_properties(document: &Html) -> Result<BasicProperties> {
    let head = find_head(document)?;

    Ok(BasicProperties {
        title: meta_content(&head, vocabulary::META_TITLE).or_else(|| {
            head.query_first("title")
                .map(|t| t.text())
                .filter(|t| !t.is_empty())
        }),
        description: meta_content(&head, vocabulary::META_DESCRIPTION),
        icon: meta_content(&head, vocabulary::META_ICON).or_else(|| {
            head.query_first(r#"link[rel~="icon"]"#)
                .and_then(|l| l.non_blank("href").map(String::from))
        }),
    })
}

/// Fill title, description and icon that are still unset from the head
///
/// Fails when the document has no `<head>`, even if nothing is missing.
pub fn fill_missing(result: &mut ExtractionResult, document: &Html) -> Result<()> {
    let head = head_properties(document)?;
    result.fill_unset(head);
    Ok(())
}

fn find_head(document: &Html) -> Result<Node<'_>> {
    let selector = Selector::parse("head").map_err(|e| PreviewError::Malformed(e.to_string()))?;
    document
        .select(&selector)
        .next()
        .map(|head| Node::new(head, &[]))
        .ok_or(PreviewError::NoHead)
}

fn meta_content(head: &Node<'_>, name: &str) -> Option<String> {
    head.query(&format!(r#"meta[name="{}"]"#, name))
        .first()
        .and_then(|m| m.non_blank("content"))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    #[test]
    fn test_meta_preferred() {
        let html = r#"
        <html>
        <head>
            <title>Document title</title>
            <meta name="title" content="Meta title">
            <meta name="description" content="Meta description">
            <meta name="icon" content="/meta-icon.png">
            <link rel="icon" href="/favicon.ico">
        </head>
        <body></body>
        </html>
        "#;
        let document = parse_document(html, false).unwrap();
        let props = head_properties(&document).unwrap();

        assert_eq!(props.title.as_deref(), Some("Meta title"));
        assert_eq!(props.description.as_deref(), Some("Meta description"));
        assert_eq!(props.icon.as_deref(), Some("/meta-icon.png"));
    }

    #[test]
    fn test_secondary_sources() {
        let html = r#"
        <html>
        <head>
            <title> Document title </title>
            <meta name="description" content="">
            <link rel="shortcut icon" href="/favicon.ico">
        </head>
        </html>
        "#;
        let document = parse_document(html, false).unwrap();
        let props = head_properties(&document).unwrap();

        assert_eq!(props.title.as_deref(), Some("Document title"));
        assert_eq!(props.description, None);
        assert_eq!(props.icon.as_deref(), Some("/favicon.ico"));
    }

    #[test]
    fn test_fill_missing_never_overwrites() {
        let html = r#"<html><head><title>Head</title><meta name="description" content="Head description"></head></html>"#;
        let document = parse_document(html, false).unwrap();

        let mut result = ExtractionResult {
            title: Some("Custom".to_string()),
            ..Default::default()
        };
        fill_missing(&mut result, &document).unwrap();

        assert_eq!(result.title.as_deref(), Some("Custom"));
        assert_eq!(result.description.as_deref(), Some("Head description"));
        assert_eq!(result.icon, None);
    }

    #[test]
    fn test_no_head() {
        let document = Html::parse_fragment(r#"<div np-for="k">Fragment</div>"#);
        let mut result = ExtractionResult::default();

        let err = fill_missing(&mut result, &document).unwrap_err();
        assert!(matches!(err, PreviewError::NoHead));
        assert_eq!(err.code(), -6);
    }
}
