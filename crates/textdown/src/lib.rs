//! # textdown
//!
//! Render HTML as readable plain text.
//!
//! Headings, paragraphs, lists, block quotes, preformatted blocks, links
//! and horizontal rules keep a visible shape in the output, while markup is
//! dropped and whitespace is normalized.
//!
//! ## Design
//!
//! Conversion runs in one direction:
//!
//! - the input is normalized (line endings, encoding declaration),
//! - parsed by html5ever (through scraper) into an arena [`Tree`],
//! - rendered recursively, one [`Rule`] per tag,
//! - and cleaned up by a final whitespace pass.
//!
//! The renderer only needs a [`Tree`], so any parser can feed it.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! let text = textdown::convert("<h2>Intro</h2><p>Hello <b>World</b></p>").unwrap();
//! assert!(text.starts_with("INTRO\n==="));
//! assert!(text.ends_with("Hello World"));
//! ```
//!
//! ## Example (Tree-based)
//!
//! ```rust
//! use textdown::{TextdownService, Tree};
//!
//! let mut tree = Tree::new("html");
//! let p = tree.append_element(tree.root(), "p", [("class", "lead")]);
//! tree.append_text(p, "Hello World");
//!
//! let service = TextdownService::new();
//! assert_eq!(service.render_tree(&tree), "Hello World");
//! ```

use std::fmt;

#[cfg(feature = "html")]
pub mod html;
pub mod node;
pub mod normalize;
mod render;
mod rules;
mod service;
mod utilities;
mod whitespace;

#[cfg(feature = "html")]
pub use html::{parse_html, ParseMode, ParsedHtml};
pub use node::{Element, Node, NodeId, NodeKind, Tree};
pub use render::{render_link, Renderer};
pub use rules::{plaintext_rules, Rule, Rules};
pub use service::{TextdownOptions, TextdownService};
pub use utilities::*;
pub use whitespace::post_process;

/// How serious a parser diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One problem reported by the HTML parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    /// 1-based, when the parser tracks positions.
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            line: None,
            column: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, " at {}:{}", line, column)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Error type for textdown operations
#[derive(Debug, thiserror::Error)]
pub enum TextdownError {
    /// The parser could not build a clean tree from the input.
    #[error("malformed HTML: {}", summarize(.diagnostics))]
    MalformedHtml { diagnostics: Vec<Diagnostic> },
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    match diagnostics.first() {
        Some(first) => format!(
            "{} parser diagnostic(s), first: {}",
            diagnostics.len(),
            first.message
        ),
        None => "no parser diagnostics".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, TextdownError>;

/// Convert HTML to plain text with default options.
#[cfg(feature = "html")]
pub fn convert(html: &str) -> Result<String> {
    TextdownService::new().convert(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        assert_eq!(Diagnostic::error("Unexpected token").to_string(), "error: Unexpected token");
        let positioned = Diagnostic {
            message: "Tag root invalid".to_string(),
            severity: Severity::Warning,
            line: Some(1),
            column: Some(7),
        };
        assert_eq!(positioned.to_string(), "warning at 1:7: Tag root invalid");
    }

    #[test]
    fn test_error_display() {
        let err = TextdownError::MalformedHtml {
            diagnostics: vec![Diagnostic::error("Unexpected token"), Diagnostic::error("x")],
        };
        assert_eq!(
            err.to_string(),
            "malformed HTML: 2 parser diagnostic(s), first: Unexpected token"
        );
    }
}
