//! TextdownService - the main entry point for HTML to plain text conversion.

#[cfg(feature = "html")]
use tracing::{debug, warn};

use crate::node::Tree;
use crate::render::Renderer;
use crate::rules::{Rule, Rules};
use crate::whitespace::post_process;
#[cfg(feature = "html")]
use crate::{html::parse_html, normalize::normalize_input, Result};

/// Options for TextdownService
#[derive(Debug, Clone)]
pub struct TextdownOptions {
    /// Length of the `*`, `=` and `-` rules drawn for headings and `<hr>`
    pub rule_width: usize,

    /// Prefix of every list item
    pub bullet: String,

    /// Spaces each indent tab expands to
    pub tab_width: usize,

    /// Reject input the parser had to repair
    pub strict: bool,
}

impl Default for TextdownOptions {
    fn default() -> Self {
        Self {
            rule_width: 79,
            bullet: " * ".to_string(),
            tab_width: 4,
            strict: true,
        }
    }
}

/// The main service for converting HTML to plain text
#[derive(Debug, Clone)]
pub struct TextdownService {
    options: TextdownOptions,
    rules: Rules,
}

impl TextdownService {
    /// Create a new TextdownService with default options
    pub fn new() -> Self {
        Self {
            options: TextdownOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a TextdownService with custom options
    pub fn with_options(options: TextdownOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Convert HTML to plain text.
    ///
    /// Blank input short-circuits to an empty string without parsing. In
    /// strict mode any parser diagnostic fails the conversion with
    /// [`crate::TextdownError::MalformedHtml`]; otherwise diagnostics are
    /// logged and the repaired tree is rendered.
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str) -> Result<String> {
        if html.trim().is_empty() {
            return Ok(String::new());
        }

        let parsed = parse_html(&normalize_input(html));
        let tree = if self.options.strict {
            parsed.into_result()?
        } else {
            for diagnostic in &parsed.diagnostics {
                warn!(%diagnostic, "parser repaired input");
            }
            parsed.tree
        };

        let text = self.render_tree(&tree);
        debug!(
            input_len = html.len(),
            output_len = text.len(),
            "converted html to text"
        );
        Ok(text)
    }

    /// Render a tree built elsewhere and apply the whitespace pass.
    pub fn render_tree(&self, tree: &Tree) -> String {
        let raw = Renderer::new(tree, &self.rules, &self.options).render(tree.root());
        post_process(&raw, self.options.tab_width)
    }

    /// Render `tag` elements with one of the built-in rules
    pub fn add_rule(&mut self, tag: &str, rule: Rule) -> &mut Self {
        self.rules.add(tag, rule);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &TextdownOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut TextdownOptions {
        &mut self.options
    }
}

impl Default for TextdownService {
    fn default() -> Self {
        Self::new()
    }
}
