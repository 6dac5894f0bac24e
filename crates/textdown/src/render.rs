//! Recursive tree-to-text rendering.
//!
//! [`Renderer::render`] walks a [`Tree`] depth first and maps every node to
//! a fragment of text according to its [`Rule`]. The output still carries
//! indent tabs and stray spaces; the whitespace pass cleans those up.

use crate::node::{NodeId, NodeKind, Tree};
use crate::rules::{Rule, Rules};
use crate::service::TextdownOptions;
use crate::utilities::{collapse_whitespace, indent, repeat};

/// Renders nodes of one tree.
pub struct Renderer<'a> {
    tree: &'a Tree,
    rules: &'a Rules,
    options: &'a TextdownOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(tree: &'a Tree, rules: &'a Rules, options: &'a TextdownOptions) -> Self {
        Self {
            tree,
            rules,
            options,
        }
    }

    /// Render the subtree rooted at `id`.
    pub fn render(&self, id: NodeId) -> String {
        match &self.tree.node(id).kind {
            NodeKind::Text(text) => collapse_whitespace(text),
            NodeKind::Element(element) => {
                let rule = self.rules.for_tag(&element.tag_name);
                self.render_element(id, rule)
            }
        }
    }

    fn render_children(&self, id: NodeId) -> String {
        self.tree
            .children(id)
            .iter()
            .map(|child| self.render(*child))
            .collect()
    }

    fn render_element(&self, id: NodeId, rule: Rule) -> String {
        let content = if rule.visits_children() {
            self.render_children(id)
        } else {
            String::new()
        };
        let width = self.options.rule_width;

        let mut output = match rule {
            Rule::Banner(c) => {
                let line = repeat(c, width);
                format!("\n{}\n{}\n{}", line, content.to_uppercase(), line)
            }
            Rule::Underlined(c) => {
                format!("\n{}\n{}", content.to_uppercase(), repeat(c, width))
            }
            Rule::Uppercase => content.to_uppercase(),
            Rule::Block | Rule::Line | Rule::Transparent => content,
            Rule::Indented => indent(&content),
            Rule::ListItem => format!("{}{}", self.options.bullet, content),
            Rule::Link => render_link(&content, self.tree.attr(id, "href").unwrap_or("")),
            Rule::LineBreak => "\n".to_string(),
            Rule::HorizontalRule => format!("\n{}", repeat('-', width)),
            Rule::Skip => String::new(),
        };

        if let Some(trailer) = rule.trailer() {
            if !self.tree.is_last_child_of_block_level_element(id) {
                output.push_str(trailer);
            }
        }

        output
    }
}

/// Combine an anchor's rendered label with its `href`.
///
/// An empty label yields the raw href and an empty href yields the label.
/// Otherwise a `mailto:` prefix is dropped, and when the label already
/// appears inside the URL only the URL is kept (followed by a space);
/// else the URL is appended in parentheses.
pub fn render_link(text: &str, href: &str) -> String {
    if text.is_empty() {
        return href.to_string();
    }
    if href.is_empty() {
        return text.to_string();
    }

    let href = href.strip_prefix("mailto:").unwrap_or(href);
    if href.contains(text) {
        format!("{} ", href)
    } else {
        format!("{} ({})", text, href)
    }
}
