//! Built-in tag table for plain-text rendering.

use super::Rule;
use crate::utilities::HIDDEN_ELEMENTS;

/// Create the default tag-to-rule mapping
pub fn plaintext_rules() -> Vec<(&'static str, Rule)> {
    let mut rules = vec![
        ("h1", Rule::Banner('*')),
        ("h2", Rule::Underlined('=')),
        ("h3", Rule::Underlined('-')),
        ("h4", Rule::Uppercase),
    ];

    rules.extend(
        ["h5", "h6", "h7", "h8", "h9", "p", "div", "ol", "ul", "dl"]
            .into_iter()
            .map(|tag| (tag, Rule::Block)),
    );
    // Ordered and definition lists get no numbering or special layout.
    rules.extend([
        ("blockquote", Rule::Indented),
        ("pre", Rule::Indented),
        ("li", Rule::ListItem),
        ("dd", Rule::Line),
        ("dt", Rule::Line),
        ("a", Rule::Link),
        ("br", Rule::LineBreak),
        ("hr", Rule::HorizontalRule),
    ]);
    rules.extend(HIDDEN_ELEMENTS.iter().map(|tag| (*tag, Rule::Skip)));

    rules
}
