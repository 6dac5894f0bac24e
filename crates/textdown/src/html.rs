//! HTML parsing support.
//!
//! This module parses HTML strings with scraper (html5ever) and copies the
//! result into the arena [`Tree`] used by the renderer. Every problem the
//! tree builder reports is kept as a [`Diagnostic`].

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node as ScraperNode};
use tracing::debug;

use crate::node::{NodeId, Tree};
use crate::normalize::strip_xml_declaration;
use crate::{Diagnostic, Result, TextdownError};

static DOCTYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*<!doctype\b").expect("valid regex"));

static DOCUMENT_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<!doctype\b|<(?:html|head|body)\b").expect("valid regex"));

/// How the markup is handed to the tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Parsed as the content of a `<body>`.
    Fragment,
    /// Parsed as a complete document.
    Document,
}

impl ParseMode {
    /// Full documents are recognised by a doctype or an html/head/body tag.
    pub fn detect(html: &str) -> Self {
        if DOCUMENT_MARKUP.is_match(html) {
            ParseMode::Document
        } else {
            ParseMode::Fragment
        }
    }
}

/// A parsed tree together with everything the parser complained about.
#[derive(Debug, Clone)]
pub struct ParsedHtml {
    pub tree: Tree,
    pub mode: ParseMode,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedHtml {
    /// The tree, or [`TextdownError::MalformedHtml`] if any diagnostic was raised.
    pub fn into_result(self) -> Result<Tree> {
        if self.diagnostics.is_empty() {
            Ok(self.tree)
        } else {
            Err(TextdownError::MalformedHtml {
                diagnostics: self.diagnostics,
            })
        }
    }
}

/// Parse an HTML string into a [`Tree`] rooted at the `html` element.
///
/// The parser always recovers, so a tree is returned even for broken
/// markup; check [`ParsedHtml::diagnostics`] or use
/// [`ParsedHtml::into_result`] to reject it.
///
/// # Example
///
/// ```rust
/// use textdown::parse_html;
///
/// let parsed = parse_html("<p>Hello <em>World</em></p>");
/// assert!(parsed.diagnostics.is_empty());
/// assert_eq!(parsed.tree.tag_name(parsed.tree.root()), Some("html"));
/// ```
pub fn parse_html(html: &str) -> ParsedHtml {
    let html = strip_xml_declaration(html);
    let mode = ParseMode::detect(html);

    let document = match mode {
        ParseMode::Fragment => Html::parse_fragment(html),
        ParseMode::Document if DOCTYPE.is_match(html) => Html::parse_document(html),
        ParseMode::Document => Html::parse_document(&format!("<!DOCTYPE html>{}", html)),
    };

    let root_element = document.root_element();
    let mut tree = Tree::new(root_element.value().name());
    let root = tree.root();
    copy_children(&mut tree, root, root_element);

    let diagnostics: Vec<Diagnostic> = document
        .errors
        .iter()
        .map(|message| Diagnostic::error(message.to_string()))
        .collect();

    debug!(
        ?mode,
        nodes = tree.len(),
        diagnostics = diagnostics.len(),
        "parsed html"
    );

    ParsedHtml {
        tree,
        mode,
        diagnostics,
    }
}

/// Copy element and text children of a scraper element under `parent`.
///
/// Comments, doctypes and processing instructions are dropped.
fn copy_children(tree: &mut Tree, parent: NodeId, element: ElementRef) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                tree.append_text(parent, &text.text);
            }
            ScraperNode::Element(value) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    let id = tree.append_element(parent, value.name(), value.attrs());
                    copy_children(tree, id, child_element);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    #[test]
    fn test_parse_simple_html() {
        let parsed = parse_html("<p>Hello World</p>");
        let tree = &parsed.tree;
        assert_eq!(parsed.mode, ParseMode::Fragment);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(tree.tag_name(tree.root()), Some("html"));

        let p = tree.element_children(tree.root()).next().unwrap();
        assert_eq!(tree.tag_name(p), Some("p"));
        assert_eq!(tree.text_content(p), "Hello World");
    }

    #[test]
    fn test_attributes_are_copied() {
        let parsed = parse_html(r#"<a HREF="http://www.foo.com/bar" target="_blank">x</a>"#);
        let tree = &parsed.tree;
        let a = tree.element_children(tree.root()).next().unwrap();
        assert_eq!(tree.attr(a, "href"), Some("http://www.foo.com/bar"));
        assert_eq!(tree.attr(a, "target"), Some("_blank"));
    }

    #[test]
    fn test_entities_are_decoded() {
        let parsed = parse_html("<p>A &amp; B</p>");
        assert_eq!(parsed.tree.text_content(parsed.tree.root()), "A & B");
    }

    #[test]
    fn test_comments_are_dropped() {
        let parsed = parse_html("<p>a<!-- note -->b</p>");
        let tree = &parsed.tree;
        let p = tree.element_children(tree.root()).next().unwrap();
        assert_eq!(tree.children(p).len(), 2);
        assert!(tree
            .children(p)
            .iter()
            .all(|child| matches!(tree.node(*child).kind, NodeKind::Text(_))));
    }

    #[test]
    fn test_unclosed_tag_is_reported() {
        let parsed = parse_html("<root><unclosed></root>");
        assert!(!parsed.diagnostics.is_empty());
        assert!(matches!(
            parsed.into_result(),
            Err(TextdownError::MalformedHtml { .. })
        ));
    }

    #[test]
    fn test_full_document() {
        let parsed = parse_html(
            "<html><head><title>T</title></head><body><p>Body</p></body></html>",
        );
        let tree = &parsed.tree;
        assert_eq!(parsed.mode, ParseMode::Document);
        assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);

        let tags: Vec<_> = tree
            .element_children(tree.root())
            .filter_map(|child| tree.tag_name(child))
            .collect();
        assert_eq!(tags, vec!["head", "body"]);
    }

    #[test]
    fn test_xml_declaration_is_stripped() {
        let parsed = parse_html(r#"<?xml version="1.0" encoding="UTF-8"?><p>x</p>"#);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.tree.text_content(parsed.tree.root()), "x");
    }

    #[test]
    fn test_detect_mode() {
        assert_eq!(ParseMode::detect("<p>x</p>"), ParseMode::Fragment);
        assert_eq!(ParseMode::detect("<header>x</header>"), ParseMode::Fragment);
        assert_eq!(ParseMode::detect("<!doctype html><p>x"), ParseMode::Document);
        assert_eq!(ParseMode::detect("<BODY>x</BODY>"), ParseMode::Document);
    }
}
